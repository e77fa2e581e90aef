//! Logarithm family: log, log2 and their single-precision forms
//!
//! After subtracting an offset from the input bits, the top mantissa bits
//! select a subinterval (and its table entry), the exponent field gives `k`,
//! and the remaining bits form `z` near the subinterval's centre `c`, so
//! `log(x) = k*log(2) + log(c) + log1p(z/c - 1)`. The table holds `1/c` and
//! `log(c)`; the residual `r = z/c - 1` is small enough for a short
//! polynomial.

use super::common::log_coefficients::*;
use super::guard::{self, Domain, Limit};
use super::tables::{
    LOG_OFFSET, LOG_TABLE, LOG_TABLE_BITS, LOG2_TABLE, LOG2_TABLE_BITS, LOG2F_TABLE, LOGF_OFFSET,
    LOGF_TABLE, LOGF_TABLE_BITS, LogEntry,
};
use super::{Accuracy, KernelSpec, UnaryKernel, UnaryOp};
use crate::dtype::{DType, LaneElement};
use crate::lanes::{F32x4, F64x2};

/// Input split into table index, binary exponent and reduced significand
#[derive(Clone, Copy, Debug, PartialEq)]
struct Reduced {
    index: usize,
    kd: f64,
    z: f64,
}

#[inline]
fn reduce(x: f64, table_bits: u32) -> Reduced {
    let ix = x.bits_of();
    let tmp = ix.wrapping_sub(LOG_OFFSET);
    let index = ((tmp >> (52 - table_bits)) % (1 << table_bits)) as usize;
    let k = (tmp as i64) >> 52;
    let iz = ix.wrapping_sub(tmp & (0xfff << 52));
    Reduced {
        index,
        kd: k as f64,
        z: f64::float_of(iz),
    }
}

#[inline]
fn reduce_f32(x: f32) -> Reduced {
    let ix = x.bits_of();
    let tmp = ix.wrapping_sub(LOGF_OFFSET);
    let index = ((tmp >> (23 - LOGF_TABLE_BITS)) % (1 << LOGF_TABLE_BITS)) as usize;
    let k = (tmp as i32) >> 23;
    let iz = ix.wrapping_sub(tmp & (0x1ff << 23));
    Reduced {
        index,
        kd: f64::from(k),
        z: f32::float_of(iz).widen(),
    }
}

fn log_fast(x: f64) -> f64 {
    let Reduced { index, kd, z } = reduce(x, LOG_TABLE_BITS);
    let LogEntry { invc, logc } = LOG_TABLE[index];

    let r = z.mul_add(invc, -1.0);
    // k*ln2 + log(c) + r as an unevaluated hi + lo
    let w = kd * LN2_HI + logc;
    let hi = w + r;
    let lo = w - hi + r + kd * LN2_LO;

    let r2 = r * r;
    let [a0, a1, a2, a3, a4] = LOG_A;
    lo + r2 * a0 + r * r2 * (a1 + r * a2 + r2 * (a3 + r * a4)) + hi
}

fn log2_fast(x: f64) -> f64 {
    let Reduced { index, kd, z } = reduce(x, LOG2_TABLE_BITS);
    let LogEntry { invc, logc } = LOG2_TABLE[index];

    let r = z.mul_add(invc, -1.0);
    // r/ln2 carried as t1 + t2
    let t1 = r * INV_LN2_HI;
    let t2 = r * INV_LN2_LO + r.mul_add(INV_LN2_HI, -t1);
    let t3 = kd + logc;
    let hi = t3 + t1;
    let lo = t3 - hi + t1 + t2;

    let r2 = r * r;
    let r4 = r2 * r2;
    let [b0, b1, b2, b3, b4, b5] = LOG2_B;
    let p = b0 + r * b1 + r2 * (b2 + r * b3) + r4 * (b4 + r * b5);
    lo + r2 * p + hi
}

fn logf_fast(x: f32) -> f32 {
    let Reduced { index, kd, z } = reduce_f32(x);
    let LogEntry { invc, logc } = LOGF_TABLE[index];

    let r = z * invc - 1.0;
    let y0 = logc + kd * LN2;
    let r2 = r * r;
    let [a0, a1, a2] = LOGF_A;
    let mut y = a1 * r + a2;
    y = a0 * r2 + y;
    f32::narrow(y * r2 + (y0 + r))
}

fn log2f_fast(x: f32) -> f32 {
    let Reduced { index, kd, z } = reduce_f32(x);
    let LogEntry { invc, logc } = LOG2F_TABLE[index];

    let r = z * invc - 1.0;
    let y0 = logc + kd;
    let r2 = r * r;
    let [a0, a1, a2, a3] = LOG2F_A;
    let mut y = a1 * r + a2;
    y = a0 * r2 + y;
    let p = a3 * r + y0;
    f32::narrow(y * r2 + p)
}

pub(crate) const LOG_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "log_f64",
        dtype: DType::F64,
        table_size: Some(1 << LOG_TABLE_BITS),
        accuracy: Accuracy::Ulp(0.52),
        domain: Domain::above(Limit::Exclusive(MIN_LOG)),
    },
    op: UnaryOp::Log,
    fast: log_fast,
};

pub(crate) const LOG2_F64: UnaryKernel<f64> = UnaryKernel {
    spec: KernelSpec {
        name: "log2_f64",
        dtype: DType::F64,
        table_size: Some(1 << LOG2_TABLE_BITS),
        accuracy: Accuracy::Ulp(1.01),
        domain: Domain::above(Limit::Exclusive(MIN_LOG2)),
    },
    op: UnaryOp::Log2,
    fast: log2_fast,
};

pub(crate) const LOG_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "log_f32",
        dtype: DType::F32,
        table_size: Some(1 << LOGF_TABLE_BITS),
        accuracy: Accuracy::Ulp(0.52),
        domain: Domain::above(Limit::Inclusive(MIN_LOG)),
    },
    op: UnaryOp::Log,
    fast: logf_fast,
};

pub(crate) const LOG2_F32: UnaryKernel<f32> = UnaryKernel {
    spec: KernelSpec {
        name: "log2_f32",
        dtype: DType::F32,
        table_size: Some(1 << LOGF_TABLE_BITS),
        accuracy: Accuracy::Ulp(0.52),
        domain: Domain::above(Limit::Inclusive(MIN_LOG)),
    },
    op: UnaryOp::Log2,
    fast: log2f_fast,
};

/// Natural logarithm on two double-precision lanes
///
/// Fast path when every lane is normal and greater than 1.3.
pub fn log_f64(x: F64x2) -> F64x2 {
    guard::unary(&LOG_F64, x)
}

/// Base-2 logarithm on two double-precision lanes
///
/// Fast path when every lane is normal and greater than 1.32.
pub fn log2_f64(x: F64x2) -> F64x2 {
    guard::unary(&LOG2_F64, x)
}

/// Natural logarithm on four single-precision lanes
///
/// Fast path when every lane is normal and at least 1.3.
pub fn log_f32(x: F32x4) -> F32x4 {
    guard::unary(&LOG_F32, x)
}

/// Base-2 logarithm on four single-precision lanes
///
/// Fast path when every lane is normal and at least 1.3.
pub fn log2_f32(x: F32x4) -> F32x4 {
    guard::unary(&LOG2_F32, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reduce_powers_of_two() {
        let r = reduce(8.0, LOG_TABLE_BITS);
        assert_eq!(r.kd, 3.0);
        assert_eq!(r.z, 1.0);
        let r = reduce_f32(8.0);
        assert_eq!(r.kd, 3.0);
        assert_eq!(r.z, 1.0);
    }

    #[test]
    fn test_reduce_reconstructs_input() {
        for x in [1.31, 2.0, 3.75, 1e10, 1e300] {
            let r = reduce(x, LOG_TABLE_BITS);
            assert_eq!(r.z * r.kd.exp2(), x);
        }
    }

    #[test]
    fn test_log2_eight() {
        assert_eq!(log2_f64(F64x2::splat(8.0)).to_array(), [3.0, 3.0]);
        assert_eq!(log_fast(8.0), 8.0f64.ln());
    }

    #[test]
    fn test_fallback_computes_every_lane() {
        let x = F64x2::new([1.0, 7.0]);
        assert_eq!(log_f64(x).to_array(), [0.0, 7.0f64.ln()]);
        let x = F32x4::new([-1.0, 2.0, 3.0, 4.0]);
        let y = log2_f32(x);
        assert!(y[0].is_nan());
        assert_eq!(y[3], 2.0);
    }

    proptest! {
        #[test]
        fn prop_index_and_residual(x in 1.3f64..1e300) {
            for bits in [LOG_TABLE_BITS, LOG2_TABLE_BITS] {
                let Reduced { index, z, .. } = reduce(x, bits);
                prop_assert!(index < 1 << bits);
                let table = if bits == LOG_TABLE_BITS { &LOG_TABLE[..] } else { &LOG2_TABLE[..] };
                let r = z.mul_add(table[index].invc, -1.0);
                prop_assert!(r.abs() < 1.0 / f64::from(1u32 << bits));
            }
        }

        #[test]
        fn prop_f32_index_in_table(x in 1.3f32..1e38) {
            let Reduced { index, z, .. } = reduce_f32(x);
            prop_assert!(index < 1 << LOGF_TABLE_BITS);
            prop_assert!((0.69..1.4).contains(&z));
        }
    }
}
