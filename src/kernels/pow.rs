//! Power as a composition of the base-2 kernels
//!
//! `x^y = 2^(y * log2(x))`. Once both operands pass the guard, the vector
//! log2 and exp2 kernels run unchanged, each with its own guard, so the
//! composition inherits both error bounds and adds no compensation of its own.

use super::common::pow_coefficients::*;
use super::exp::{exp2_f32, exp2_f64};
use super::guard::{self, Domain, Limit};
use super::log::{log2_f32, log2_f64};
use super::{Accuracy, BinaryKernel, BinaryOp, KernelSpec};
use crate::dtype::DType;
use crate::lanes::{F32x4, F64x2};

fn pow_compose_f64(x: F64x2, y: F64x2) -> F64x2 {
    exp2_f64(y * log2_f64(x))
}

fn pow_compose_f32(x: F32x4, y: F32x4) -> F32x4 {
    exp2_f32(y * log2_f32(x))
}

pub(crate) const POW_F64: BinaryKernel<f64, 2> = BinaryKernel {
    spec: KernelSpec {
        name: "pow_f64",
        dtype: DType::F64,
        table_size: None,
        accuracy: Accuracy::Composed,
        domain: Domain::positive(Limit::Inclusive(MAX_F64)),
    },
    op: BinaryOp::Pow,
    fast: pow_compose_f64,
};

pub(crate) const POW_F32: BinaryKernel<f32, 4> = BinaryKernel {
    spec: KernelSpec {
        name: "pow_f32",
        dtype: DType::F32,
        table_size: None,
        accuracy: Accuracy::Composed,
        domain: Domain::positive(Limit::Inclusive(MAX_F32)),
    },
    op: BinaryOp::Pow,
    fast: pow_compose_f32,
};

/// `x^y` on two double-precision lanes
///
/// Fast path when every lane of both operands is normal, positive and at
/// most 125.
pub fn pow_f64(x: F64x2, y: F64x2) -> F64x2 {
    guard::binary(&POW_F64, x, y)
}

/// `x^y` on four single-precision lanes
///
/// Fast path when every lane of both operands is normal, positive and at
/// most 80.
pub fn pow_f32(x: F32x4, y: F32x4) -> F32x4 {
    guard::binary(&POW_F32, x, y)
}
