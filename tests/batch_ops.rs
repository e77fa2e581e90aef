//! Slice-level entry points

mod common;

use common::*;
use lanemath::prelude::*;

#[test]
fn test_large_slice_matches_vector_kernels() {
    let mut rng = seeded_rng(41);
    let xs = uniform_f64(&mut rng, -700.0, 700.0, 10_001);
    let mut out = vec![0.0; xs.len()];
    batch::unary_f64(UnaryOp::Exp, &xs, &mut out).unwrap();

    let mut want = map_f64(exp_f64, &xs[..10_000]);
    want.push(xs[10_000].exp());
    assert_bits_eq_f64(&out, &want, "batch exp_f64");
}

#[test]
fn test_every_unary_op_f32() {
    let mut rng = seeded_rng(42);
    let xs = uniform_f32(&mut rng, 1.5, 50.0, 4098);
    for op in UnaryOp::ALL {
        let mut out = vec![0.0f32; xs.len()];
        batch::unary_f32(op, &xs, &mut out).unwrap();
        let kernel: fn(F32x4) -> F32x4 = match op {
            UnaryOp::Exp => exp_f32,
            UnaryOp::Exp2 => exp2_f32,
            UnaryOp::Log => log_f32,
            UnaryOp::Log2 => log2_f32,
            UnaryOp::Sin => sin_f32,
            UnaryOp::Cos => cos_f32,
        };
        let want = map_f32(kernel, &xs[..4096]);
        assert_bits_eq_f32(&out[..4096], &want, op.name());
    }
}

#[test]
fn test_binary_pow_with_tail() {
    let lhs = [2.0f64, 3.0, 4.0, 5.0, 6.0];
    let rhs = [10.0f64, 2.0, 0.5, 1.0, 2.0];
    let mut out = [0.0; 5];
    batch::binary_f64(BinaryOp::Pow, &lhs, &rhs, &mut out).unwrap();
    let want = [1024.0, 9.0, 2.0, 5.0, 36.0];
    assert_allclose_f64(&out, &want, 1e-13, 0.0, "pow slice");
    assert_eq!(out[4], 36.0);
}

#[test]
fn test_length_errors() {
    let mut out = [0.0f32; 2];
    let err = batch::unary_f32(UnaryOp::Sin, &[1.0; 3], &mut out).unwrap_err();
    assert_eq!(err, Error::length_mismatch("output", 3, 2));
    let mut out = [0.0f64; 4];
    let err = batch::binary_f64(BinaryOp::Pow, &[1.0; 3], &[1.0; 3], &mut out).unwrap_err();
    assert_eq!(err, Error::length_mismatch("output", 3, 4));
}
