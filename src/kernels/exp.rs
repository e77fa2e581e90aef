//! Exponential family: exp, exp2 and their single-precision forms
//!
//! `x` is split as `x = k/N + r` in units of the base's logarithm: `k` is
//! rounded to an integer by adding [`SHIFT`] and reading the integer back out
//! of the sum's bit pattern, `k mod N` selects `2^((k mod N)/N)` from the
//! table, and `k div N` is added straight into that scale's exponent field.
//! The result is `scale * (1 + p(r))`.

use super::common::exp_coefficients::*;
use super::guard::{self, Domain, Limit};
use super::tables::{
    EXP_TABLE, EXP_TABLE_BITS, EXP_TABLE_SIZE, EXPF_TABLE, EXPF_TABLE_BITS, EXPF_TABLE_SIZE,
};
use super::{Accuracy, KernelSpec, UnaryKernel, UnaryOp};
use crate::dtype::{DType, LaneElement};
use crate::lanes::{F32x4, F64x2};

const N: f64 = (1u64 << EXP_TABLE_BITS) as f64;
const NF: f64 = (1u64 << EXPF_TABLE_BITS) as f64;

/// Reduction and polynomial of one double-precision exponential
///
/// exp and exp2 share the pipeline: exp2 is exp with a unit input scale and
/// `-1` as the (exact) high part of the step.
struct ExpParams {
    /// Multiplier bringing `x` into units of `1/N` of the base's log
    inv_scale: f64,
    /// Rounding shift, scaled so the integer lands in the low mantissa bits
    shift: f64,
    /// Step between consecutive `k`, negated and split high/low
    neg_step_hi: f64,
    neg_step_lo: f64,
    /// Coefficients of `r`, `r^2`, .. `r^5`
    poly: [f64; 5],
}

const EXP: ExpParams = ExpParams {
    inv_scale: INV_LN2 * N,
    shift: SHIFT,
    neg_step_hi: NEG_LN2_HI_N,
    neg_step_lo: NEG_LN2_LO_N,
    poly: [1.0, EXP_C2, EXP_C3, EXP_C4, EXP_C5],
};

const EXP2: ExpParams = ExpParams {
    inv_scale: 1.0,
    shift: SHIFT / N,
    neg_step_hi: -1.0,
    neg_step_lo: 0.0,
    poly: [EXP2_C1, EXP2_C2, EXP2_C3, EXP2_C4, EXP2_C5],
};

/// Integer part of a reduced input
#[derive(Clone, Copy, Debug)]
struct Reduced {
    /// `k mod N`
    index: usize,
    /// Raw bits of `k + shift`; the low bits hold `k` in two's complement
    bits: u64,
    /// `k` as a float, in units of the shift
    kd: f64,
}

#[inline]
fn reduce(z: f64, shift: f64, table_bits: u32) -> Reduced {
    let kd = z + shift;
    let bits = kd.bits_of();
    Reduced {
        index: (bits % (1u64 << table_bits)) as usize,
        bits,
        kd: kd - shift,
    }
}

#[inline]
fn exp_lane(x: f64, p: &ExpParams) -> f64 {
    let Reduced { index, bits, kd } = reduce(p.inv_scale * x, p.shift, EXP_TABLE_BITS);
    let entry = EXP_TABLE[index];
    let top = bits << (52 - EXP_TABLE_BITS);
    let scale = f64::float_of(entry.sbits.wrapping_add(top));
    let tail = f64::float_of(entry.tail);

    let r = x + kd * p.neg_step_hi + kd * p.neg_step_lo;
    let r2 = r * r;
    let [c1, c2, c3, c4, c5] = p.poly;
    let tmp = tail + r * c1 + r2 * (c2 + r * c3) + r2 * r2 * (c4 + r * c5);
    scale + scale * tmp
}

/// Reduction and polynomial of one single-precision exponential
///
/// Evaluated entirely in double and rounded once at the end.
struct ExpfParams {
    inv_scale: f64,
    shift: f64,
    /// Coefficients of `r^3`, `r^2`, `r`
    poly: [f64; 3],
}

const EXPF: ExpfParams = ExpfParams {
    inv_scale: INV_LN2 * NF,
    shift: SHIFT,
    poly: [
        EXP2F_C3 / (NF * NF * NF),
        EXP2F_C2 / (NF * NF),
        EXP2F_C1 / NF,
    ],
};

const EXP2F: ExpfParams = ExpfParams {
    inv_scale: 1.0,
    shift: SHIFT / NF,
    poly: [EXP2F_C3, EXP2F_C2, EXP2F_C1],
};

#[inline]
fn expf_lane(x: f32, p: &ExpfParams) -> f32 {
    let z = p.inv_scale * x.widen();
    let Reduced { index, bits, kd } = reduce(z, p.shift, EXPF_TABLE_BITS);
    let r = z - kd;
    let top = bits << (52 - EXPF_TABLE_BITS);
    let s = f64::float_of(EXPF_TABLE[index].wrapping_add(top));

    let [c3, c2, c1] = p.poly;
    let q = c3 * r + c2;
    let r2 = r * r;
    let mut y = c1 * r + 1.0;
    y = q * r2 + y;
    f32::narrow(y * s)
}

fn exp_fast(x: f64) -> f64 {
    exp_lane(x, &EXP)
}

fn exp2_fast(x: f64) -> f64 {
    exp_lane(x, &EXP2)
}

fn expf_fast(x: f32) -> f32 {
    expf_lane(x, &EXPF)
}

fn exp2f_fast(x: f32) -> f32 {
    expf_lane(x, &EXP2F)
}

pub(crate) const EXP_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "exp_f64",
        dtype: DType::F64,
        table_size: Some(EXP_TABLE_SIZE),
        accuracy: Accuracy::Ulp(0.51),
        domain: Domain::symmetric(Limit::Inclusive(MAX_F64)),
    },
    op: UnaryOp::Exp,
    fast: exp_fast,
};

pub(crate) const EXP2_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "exp2_f64",
        dtype: DType::F64,
        table_size: Some(EXP_TABLE_SIZE),
        accuracy: Accuracy::Ulp(0.51),
        domain: Domain::symmetric(Limit::Inclusive(MAX_F64)),
    },
    op: UnaryOp::Exp2,
    fast: exp2_fast,
};

pub(crate) const EXP_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "exp_f32",
        dtype: DType::F32,
        table_size: Some(EXPF_TABLE_SIZE),
        accuracy: Accuracy::Ulp(0.51),
        domain: Domain::symmetric(Limit::Inclusive(MAX_EXPF)),
    },
    op: UnaryOp::Exp,
    fast: expf_fast,
};

pub(crate) const EXP2_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "exp2_f32",
        dtype: DType::F32,
        table_size: Some(EXPF_TABLE_SIZE),
        accuracy: Accuracy::Ulp(1.0),
        domain: Domain::symmetric(Limit::Exclusive(MAX_EXP2F)),
    },
    op: UnaryOp::Exp2,
    fast: exp2f_fast,
};

/// `e^x` on two double-precision lanes
///
/// Fast path when every lane is normal and `|x| <= 700`.
pub fn exp_f64(x: F64x2) -> F64x2 {
    guard::unary(&EXP_F64, x)
}

/// `2^x` on two double-precision lanes
///
/// Fast path when every lane is normal and `|x| <= 700`.
pub fn exp2_f64(x: F64x2) -> F64x2 {
    guard::unary(&EXP2_F64, x)
}

/// `e^x` on four single-precision lanes
///
/// Fast path when every lane is normal and `|x| <= 80`.
pub fn exp_f32(x: F32x4) -> F32x4 {
    guard::unary(&EXP_F32, x)
}

/// `2^x` on four single-precision lanes
///
/// Fast path when every lane is normal and `|x| < 128`.
pub fn exp2_f32(x: F32x4) -> F32x4 {
    guard::unary(&EXP2_F32, x)
}
