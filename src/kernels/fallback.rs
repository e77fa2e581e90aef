//! Scalar reference path
//!
//! Lanes rejected by the domain guard are evaluated one at a time by the
//! platform math library through `num_traits::Float`. These functions are
//! total over the floating-point domain, specials included.

use super::{BinaryOp, UnaryOp};
use num_traits::Float;

/// Scalar reference for a unary op
#[inline]
pub(crate) fn unary<T: Float>(op: UnaryOp, x: T) -> T {
    match op {
        UnaryOp::Exp => x.exp(),
        UnaryOp::Exp2 => x.exp2(),
        UnaryOp::Log => x.ln(),
        UnaryOp::Log2 => x.log2(),
        UnaryOp::Sin => x.sin(),
        UnaryOp::Cos => x.cos(),
    }
}

/// Scalar reference for a binary op
#[inline]
pub(crate) fn binary<T: Float>(op: BinaryOp, x: T, y: T) -> T {
    match op {
        BinaryOp::Pow => x.powf(y),
    }
}
