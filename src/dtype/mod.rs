//! Lane element types
//!
//! This module provides the `DType` enum naming the two lane precisions the
//! kernels support, and the `LaneElement` trait that maps `f32`/`f64` onto it
//! together with their raw bit representations.

mod element;

pub use element::LaneElement;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Floating-point precision of a lane
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point (2 lanes per vector)
    F64 = 0,
    /// 32-bit floating point (4 lanes per vector)
    F32 = 1,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Number of explicitly stored mantissa bits
    #[inline]
    pub const fn mantissa_bits(self) -> u32 {
        match self {
            Self::F64 => 52,
            Self::F32 => 23,
        }
    }

    /// Lanes in the kernel vector of this precision
    ///
    /// Both widths fill a 128-bit register.
    #[inline]
    pub const fn lanes(self) -> usize {
        16 / self.size_in_bytes()
    }

    /// Short name for display
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_size() {
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::F32.size_in_bytes(), 4);
    }

    #[test]
    fn test_dtype_lanes() {
        assert_eq!(DType::F64.lanes(), 2);
        assert_eq!(DType::F32.lanes(), 4);
    }

    #[test]
    fn test_dtype_display() {
        assert_eq!(DType::F64.to_string(), "f64");
        assert_eq!(format!("{}", DType::F32), "f32");
    }
}
