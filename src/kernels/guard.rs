//! Domain guard and fallback dispatch
//!
//! Every kernel call first asks its [`Domain`] whether all lanes lie where the
//! fast path is accurate. The answer is all-or-nothing: one bad lane sends
//! the whole vector through the scalar reference, so the fast path never
//! mixes with fallback results.

use super::{BinaryKernel, UnaryKernel, fallback};
use crate::dtype::LaneElement;
use crate::error::FallbackReason;
use crate::lanes::LaneVector;

/// One side of a magnitude bound
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Limit {
    /// The bound itself is accepted
    Inclusive(f64),
    /// The bound itself is rejected
    Exclusive(f64),
}

impl Limit {
    /// The bound value
    pub const fn value(self) -> f64 {
        match self {
            Self::Inclusive(v) | Self::Exclusive(v) => v,
        }
    }

    #[inline]
    fn admits_at_most(self, m: f64) -> bool {
        match self {
            Self::Inclusive(v) => m <= v,
            Self::Exclusive(v) => m < v,
        }
    }

    #[inline]
    fn admits_at_least(self, m: f64) -> bool {
        match self {
            Self::Inclusive(v) => m >= v,
            Self::Exclusive(v) => m > v,
        }
    }
}

/// Input region on which a kernel's fast path meets its error bound
///
/// Checks run in a fixed order: normality, then magnitude, then sign. Bounds
/// apply to `|x|` and are compared in double precision for both lane types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Largest accepted `|x|`
    pub max_magnitude: Option<Limit>,
    /// Smallest accepted `|x|`
    pub min_magnitude: Option<Limit>,
    /// Reject negative lanes
    pub positive_only: bool,
}

impl Domain {
    /// `|x|` bounded above, either sign accepted
    pub const fn symmetric(max: Limit) -> Self {
        Self {
            max_magnitude: Some(max),
            min_magnitude: None,
            positive_only: false,
        }
    }

    /// Positive lanes bounded below
    pub const fn above(min: Limit) -> Self {
        Self {
            max_magnitude: None,
            min_magnitude: Some(min),
            positive_only: true,
        }
    }

    /// Positive lanes bounded above
    pub const fn positive(max: Limit) -> Self {
        Self {
            max_magnitude: Some(max),
            min_magnitude: None,
            positive_only: true,
        }
    }

    /// Route a single operand: `Ok(())` means the fast path applies
    pub fn check<T: LaneElement, const L: usize>(
        &self,
        x: &LaneVector<T, L>,
    ) -> Result<(), FallbackReason> {
        normal(x)?;
        self.magnitude(x)?;
        self.sign(x)
    }

    /// Route a pair of operands, each stage covering both before the next
    pub fn check_pair<T: LaneElement, const L: usize>(
        &self,
        x: &LaneVector<T, L>,
        y: &LaneVector<T, L>,
    ) -> Result<(), FallbackReason> {
        normal(x)?;
        normal(y)?;
        self.magnitude(x)?;
        self.magnitude(y)?;
        self.sign(x)?;
        self.sign(y)
    }

    fn magnitude<T: LaneElement, const L: usize>(
        &self,
        x: &LaneVector<T, L>,
    ) -> Result<(), FallbackReason> {
        if let Some(max) = self.max_magnitude {
            let lane = x.argmax_magnitude();
            if !max.admits_at_most(x[lane].abs().widen()) {
                return Err(FallbackReason::MagnitudeExceeded { lane });
            }
        }
        if let Some(min) = self.min_magnitude {
            let lane = x.argmin_magnitude();
            if !min.admits_at_least(x[lane].abs().widen()) {
                return Err(FallbackReason::MagnitudeExceeded { lane });
            }
        }
        Ok(())
    }

    fn sign<T: LaneElement, const L: usize>(
        &self,
        x: &LaneVector<T, L>,
    ) -> Result<(), FallbackReason> {
        if self.positive_only {
            if let Some(lane) = x.position(|v| v.is_sign_negative()) {
                return Err(FallbackReason::SignInvalid { lane });
            }
        }
        Ok(())
    }
}

fn normal<T: LaneElement, const L: usize>(x: &LaneVector<T, L>) -> Result<(), FallbackReason> {
    match x.position(|v| !v.is_normal()) {
        Some(lane) => Err(FallbackReason::AbnormalLane { lane }),
        None => Ok(()),
    }
}

/// Evaluate a unary kernel on one vector
#[inline]
pub(crate) fn unary<T: LaneElement, const L: usize>(
    kernel: &UnaryKernel<T>,
    x: LaneVector<T, L>,
) -> LaneVector<T, L> {
    match kernel.spec.domain.check(&x) {
        Ok(()) => x.map(kernel.fast),
        Err(reason) => {
            log::trace!("{}: scalar fallback ({reason})", kernel.spec.name);
            x.map(|v| fallback::unary(kernel.op, v))
        }
    }
}

/// Evaluate a binary kernel on one pair of vectors
#[inline]
pub(crate) fn binary<T: LaneElement, const L: usize>(
    kernel: &BinaryKernel<T, L>,
    x: LaneVector<T, L>,
    y: LaneVector<T, L>,
) -> LaneVector<T, L> {
    match kernel.spec.domain.check_pair(&x, &y) {
        Ok(()) => (kernel.fast)(x, y),
        Err(reason) => {
            log::trace!("{}: scalar fallback ({reason})", kernel.spec.name);
            x.zip_map(y, |a, b| fallback::binary(kernel.op, a, b))
        }
    }
}
