//! Vector kernels for the elementary functions
//!
//! Each public function takes and returns a [`LaneVector`](crate::lanes::LaneVector)
//! by value. A call runs the function's domain guard over all lanes; if every
//! lane passes, each lane goes through the table-driven fast path, otherwise
//! every lane goes through the scalar reference.
//!
//! The pipeline is the same for every function: reduce the input to a table
//! index and a small residual, look up the correction for that index,
//! evaluate a short polynomial in the residual and reconstruct. What differs
//! per function is data, held in a [`KernelSpec`] plus the function's
//! constants in `common`.

mod common;
mod exp;
pub(crate) mod fallback;
pub mod guard;
mod log;
mod pow;
mod tables;
mod trig;

pub use self::log::{log_f32, log_f64, log2_f32, log2_f64};
pub use exp::{exp_f32, exp_f64, exp2_f32, exp2_f64};
pub use guard::{Domain, Limit};
pub use pow::{pow_f32, pow_f64};
pub use trig::{cos_f32, cos_f64, sin_f32, sin_f64};

use crate::dtype::DType;
use crate::lanes::LaneVector;

// ============================================================================
// Operations
// ============================================================================

/// Unary functions with a vector kernel
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `e^x`
    Exp,
    /// `2^x`
    Exp2,
    /// Natural logarithm
    Log,
    /// Base-2 logarithm
    Log2,
    /// Sine
    Sin,
    /// Cosine
    Cos,
}

impl UnaryOp {
    /// All unary ops
    pub const ALL: [UnaryOp; 6] = [
        UnaryOp::Exp,
        UnaryOp::Exp2,
        UnaryOp::Log,
        UnaryOp::Log2,
        UnaryOp::Sin,
        UnaryOp::Cos,
    ];

    /// Get the operation name
    pub fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Exp2 => "exp2",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

/// Binary functions with a vector kernel
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `x^y`
    Pow,
}

impl BinaryOp {
    /// Get the operation name
    pub fn name(self) -> &'static str {
        match self {
            Self::Pow => "pow",
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Documented accuracy of a fast path
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Accuracy {
    /// Maximum error against the correctly rounded result, in ulp
    Ulp(f64),
    /// Inherits the bounds of the kernels it is composed from
    Composed,
}

/// Static description of one kernel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KernelSpec {
    /// Kernel name, e.g. `exp_f64`
    pub name: &'static str,
    /// Lane precision
    pub dtype: DType,
    /// Entries in the reduction table, `None` for compositions
    pub table_size: Option<usize>,
    /// Documented accuracy on the fast domain
    pub accuracy: Accuracy,
    /// Where the fast path applies
    pub domain: Domain,
}

impl KernelSpec {
    /// Lanes per vector
    pub const fn lanes(&self) -> usize {
        self.dtype.lanes()
    }
}

/// A unary kernel: descriptor plus its per-lane fast path
pub(crate) struct UnaryKernel<T> {
    pub spec: KernelSpec,
    pub op: UnaryOp,
    pub fast: fn(T) -> T,
}

/// A binary kernel: descriptor plus its vector-level fast path
pub(crate) struct BinaryKernel<T, const L: usize> {
    pub spec: KernelSpec,
    pub op: BinaryOp,
    pub fast: fn(LaneVector<T, L>, LaneVector<T, L>) -> LaneVector<T, L>,
}

/// Every kernel the crate provides
pub static CATALOG: [KernelSpec; 14] = [
    exp::EXP_F64.spec,
    exp::EXP2_F64.spec,
    exp::EXP_F32.spec,
    exp::EXP2_F32.spec,
    log::LOG_F64.spec,
    log::LOG2_F64.spec,
    log::LOG_F32.spec,
    log::LOG2_F32.spec,
    pow::POW_F64.spec,
    pow::POW_F32.spec,
    trig::SIN_F64.spec,
    trig::COS_F64.spec,
    trig::SIN_F32.spec,
    trig::COS_F32.spec,
];

/// Look up a kernel description by name
pub fn find(name: &str) -> Option<&'static KernelSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

/// Double-precision kernel for `op`
pub(crate) fn unary_kernel_f64(op: UnaryOp) -> &'static UnaryKernel<f64> {
    match op {
        UnaryOp::Exp => &exp::EXP_F64,
        UnaryOp::Exp2 => &exp::EXP2_F64,
        UnaryOp::Log => &log::LOG_F64,
        UnaryOp::Log2 => &log::LOG2_F64,
        UnaryOp::Sin => &trig::SIN_F64,
        UnaryOp::Cos => &trig::COS_F64,
    }
}

/// Single-precision kernel for `op`
pub(crate) fn unary_kernel_f32(op: UnaryOp) -> &'static UnaryKernel<f32> {
    match op {
        UnaryOp::Exp => &exp::EXP_F32,
        UnaryOp::Exp2 => &exp::EXP2_F32,
        UnaryOp::Log => &log::LOG_F32,
        UnaryOp::Log2 => &log::LOG2_F32,
        UnaryOp::Sin => &trig::SIN_F32,
        UnaryOp::Cos => &trig::COS_F32,
    }
}

/// Double-precision kernel for `op`
pub(crate) fn binary_kernel_f64(op: BinaryOp) -> &'static BinaryKernel<f64, 2> {
    match op {
        BinaryOp::Pow => &pow::POW_F64,
    }
}

/// Single-precision kernel for `op`
pub(crate) fn binary_kernel_f32(op: BinaryOp) -> &'static BinaryKernel<f32, 4> {
    match op {
        BinaryOp::Pow => &pow::POW_F32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_catalog_matches_dispatch() {
        for op in UnaryOp::ALL {
            let f64_spec = unary_kernel_f64(op).spec;
            let f32_spec = unary_kernel_f32(op).spec;
            assert_eq!(f64_spec.name, format!("{}_f64", op.name()));
            assert_eq!(f32_spec.name, format!("{}_f32", op.name()));
            assert_eq!(f64_spec.lanes(), 2);
            assert_eq!(f32_spec.lanes(), 4);
            assert_eq!(find(f64_spec.name), Some(&f64_spec));
            assert_eq!(find(f32_spec.name), Some(&f32_spec));
        }
    }

    #[test]
    fn test_find() {
        let spec = find("exp_f64").unwrap();
        assert_eq!(spec.dtype, DType::F64);
        assert_eq!(spec.table_size, Some(128));
        assert_eq!(spec.domain.max_magnitude, Some(Limit::Inclusive(700.0)));
        assert_eq!(find("pow_f32").unwrap().accuracy, Accuracy::Composed);
        assert!(find("tan_f64").is_none());
    }
}
