//! Element trait for mapping lane types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use std::fmt::Debug;

/// Trait for types that can be lanes of a kernel vector
///
/// This trait connects `f32`/`f64` to the runtime [`DType`] and is the one
/// place where a float is reinterpreted as its raw bit pattern (and back).
/// Kernels never transmute or pointer-cast floats themselves.
///
/// # Bounds
/// - `Float` - the scalar reference functions used on the fallback path
/// - `Pod + Zeroable` - safe bit reinterpretation and slice casting (bytemuck)
/// - `Send + Sync + 'static` - tables and lanes are shared freely across threads
pub trait LaneElement: Float + Pod + Zeroable + Send + Sync + Debug + 'static {
    /// Unsigned integer of the same width
    type Bits: Pod + Eq + Debug;

    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Raw IEEE 754 bit pattern
    fn bits_of(self) -> Self::Bits;

    /// Float with the given raw IEEE 754 bit pattern
    fn float_of(bits: Self::Bits) -> Self;

    /// Exact conversion to f64
    fn widen(self) -> f64;

    /// Conversion from f64, rounding to nearest
    fn narrow(v: f64) -> Self;
}

impl LaneElement for f64 {
    type Bits = u64;
    const DTYPE: DType = DType::F64;

    #[inline]
    fn bits_of(self) -> u64 {
        bytemuck::cast(self)
    }

    #[inline]
    fn float_of(bits: u64) -> Self {
        bytemuck::cast(bits)
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v
    }
}

impl LaneElement for f32 {
    type Bits = u32;
    const DTYPE: DType = DType::F32;

    #[inline]
    fn bits_of(self) -> u32 {
        bytemuck::cast(self)
    }

    #[inline]
    fn float_of(bits: u32) -> Self {
        bytemuck::cast(bits)
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as f32
    }
}
