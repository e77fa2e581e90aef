//! Sine and cosine through one shared kernel
//!
//! `|x|` is reduced modulo `pi/16` with a three-part constant, the quotient
//! picks one of 32 reference angles, and the result is rebuilt by angle
//! addition: `f(a + r) = f(a) * c(r) + f'(a) * s(r)` with short Taylor
//! polynomials for `c(r) - 1` and `s(r)/r - 1`. A negative input for sine is
//! handled by moving the lookup half a period instead of by branching on the
//! result; cosine needs no such shift.

use super::common::trig_coefficients::*;
use super::guard::{self, Domain, Limit};
use super::tables::{COS_TABLE, HALF_PERIOD, SIN_TABLE, SINE_TABLE_SIZE, SineRow};
use super::{Accuracy, KernelSpec, UnaryKernel, UnaryOp};
use crate::dtype::{DType, LaneElement};
use crate::lanes::{F32x4, F64x2};

/// Quotient and remainder of `|x|` by `pi/16`
///
/// The remainder is carried as `x0 + r1`, with `r1` collecting the rounding
/// error of `x0` and the low-order terms of the three-part product.
#[derive(Clone, Copy, Debug)]
struct Reduced {
    k: f64,
    x0: f64,
    r1: f64,
}

#[inline]
fn reduce(a: f64) -> Reduced {
    // frinta: ties away from zero
    let k = (a * INV_PI_16).round();
    let t0 = k * PI_16_HI;
    let t1 = k.mul_add(PI_16_HI, -t0);
    let mut a1 = k * PI_16_MID;
    let a2 = k.mul_add(PI_16_MID, -a1);
    let a0 = a - t0;
    a1 += t1;
    let x0 = a0 - a1;
    let x1 = a0 - x0 - a1;
    let r1 = x1 - a2 - k * PI_16_LO;
    Reduced { k, x0, r1 }
}

#[inline]
fn sine_kernel(x: f64, table: &[SineRow; SINE_TABLE_SIZE], symmetry: u32) -> f64 {
    let Reduced { k, x0, r1 } = reduce(x.abs());
    let mut index = k as u32;
    if x.is_sign_negative() {
        index += symmetry;
    }
    let row = &table[index as usize % SINE_TABLE_SIZE];

    // Re-centre on the row's reference angle
    let c0 = x0 - row.hiref;
    let x1 = x0 - c0 - row.hiref + r1 - row.loref;
    let x0 = c0;
    let x02 = x0 * x0;

    let mut s = x02 * SIN_P[4] + SIN_P[3];
    s = x02 * s + SIN_P[2];
    s = x02 * s + SIN_P[1];
    s = x02 * s + SIN_P[0];
    s *= x02;
    let mut t0 = x0 * s + x1;
    t0 += x0;
    t0 *= row.slope;

    let mut c = x02 * COS_P[4] + COS_P[3];
    c = x02 * c + COS_P[2];
    c = x02 * c + COS_P[1];
    c = x02 * c + COS_P[0];
    c *= x02;
    c *= row.value;

    c + t0 + row.value
}

fn sin_fast(x: f64) -> f64 {
    sine_kernel(x, &SIN_TABLE, HALF_PERIOD)
}

fn cos_fast(x: f64) -> f64 {
    sine_kernel(x, &COS_TABLE, 0)
}

fn sinf_fast(x: f32) -> f32 {
    f32::narrow(sin_fast(x.widen()))
}

fn cosf_fast(x: f32) -> f32 {
    f32::narrow(cos_fast(x.widen()))
}

const TRIG_DOMAIN: Domain = Domain::symmetric(Limit::Inclusive(MAX_ABS));

pub(crate) const SIN_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "sin_f64",
        dtype: DType::F64,
        table_size: Some(SINE_TABLE_SIZE),
        accuracy: Accuracy::Ulp(2.5),
        domain: TRIG_DOMAIN,
    },
    op: UnaryOp::Sin,
    fast: sin_fast,
};

pub(crate) const COS_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "cos_f64",
        dtype: DType::F64,
        table_size: Some(SINE_TABLE_SIZE),
        accuracy: Accuracy::Ulp(2.5),
        domain: TRIG_DOMAIN,
    },
    op: UnaryOp::Cos,
    fast: cos_fast,
};

pub(crate) const SIN_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "sin_f32",
        dtype: DType::F32,
        table_size: Some(SINE_TABLE_SIZE),
        accuracy: Accuracy::Ulp(0.51),
        domain: TRIG_DOMAIN,
    },
    op: UnaryOp::Sin,
    fast: sinf_fast,
};

pub(crate) const COS_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "cos_f32",
        dtype: DType::F32,
        table_size: Some(SINE_TABLE_SIZE),
        accuracy: Accuracy::Ulp(0.51),
        domain: TRIG_DOMAIN,
    },
    op: UnaryOp::Cos,
    fast: cosf_fast,
};

/// Sine on two double-precision lanes
///
/// Fast path when every lane is normal and `|x| <= 1000`. Zero lanes of
/// either sign take the scalar path, which keeps `sin(-0) = -0`.
pub fn sin_f64(x: F64x2) -> F64x2 {
    guard::unary(&SIN_F64, x)
}

/// Cosine on two double-precision lanes
///
/// Fast path when every lane is normal and `|x| <= 1000`.
pub fn cos_f64(x: F64x2) -> F64x2 {
    guard::unary(&COS_F64, x)
}

/// Sine on four single-precision lanes, evaluated in double
pub fn sin_f32(x: F32x4) -> F32x4 {
    guard::unary(&SIN_F32, x)
}

/// Cosine on four single-precision lanes, evaluated in double
pub fn cos_f32(x: F32x4) -> F32x4 {
    guard::unary(&COS_F32, x)
}
