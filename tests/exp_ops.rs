//! Accuracy tests for the exponential family
//!
//! Fast-path results are compared with the platform libm over dense samples of
//! each kernel's domain. Both sides are within about half an ulp of the exact
//! value, so they may differ by one representable value (two across a binade
//! edge).

mod common;

use common::*;
use lanemath::kernels::{exp_f32, exp_f64, exp2_f32, exp2_f64};
use lanemath::lanes::{F32x4, F64x2};

const SAMPLES: usize = 20_000;

// ============================================================================
// Double precision
// ============================================================================

#[test]
fn test_exp_f64_dense() {
    let mut rng = seeded_rng(1);
    let xs = uniform_f64(&mut rng, -700.0, 700.0, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.exp()).collect();
    assert_ulp_f64(&xs, &map_f64(exp_f64, &xs), &want, 2, "exp_f64");
}

#[test]
fn test_exp_f64_near_zero() {
    let mut rng = seeded_rng(2);
    let xs = uniform_f64(&mut rng, -1.0, 1.0, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.exp()).collect();
    assert_ulp_f64(&xs, &map_f64(exp_f64, &xs), &want, 2, "exp_f64 small");
}

#[test]
fn test_exp2_f64_dense() {
    let mut rng = seeded_rng(3);
    let xs = uniform_f64(&mut rng, -700.0, 700.0, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.exp2()).collect();
    assert_ulp_f64(&xs, &map_f64(exp2_f64, &xs), &want, 2, "exp2_f64");
}

#[test]
fn test_exp_one() {
    let y = exp_f64(F64x2::new([1.0, -1.0]));
    assert_eq!(y[0], 2.718281828459045);
    assert!(ulp_distance_f64(y[1], (-1.0f64).exp()) <= 1);
}

#[test]
fn test_exp_domain_edges() {
    let y = exp_f64(F64x2::new([700.0, -700.0]));
    assert!(ulp_distance_f64(y[0], 700.0f64.exp()) <= 2);
    assert!(ulp_distance_f64(y[1], (-700.0f64).exp()) <= 2);
    let y = exp2_f64(F64x2::new([699.75, -699.75]));
    assert!(ulp_distance_f64(y[0], 699.75f64.exp2()) <= 2);
    assert!(ulp_distance_f64(y[1], (-699.75f64).exp2()) <= 2);
}

// ============================================================================
// Single precision
// ============================================================================

#[test]
fn test_exp_f32_dense() {
    let mut rng = seeded_rng(4);
    let xs = uniform_f32(&mut rng, -80.0, 80.0, SAMPLES);
    let want = reference_f32(f64::exp, &xs);
    assert_ulp_f32(&xs, &map_f32(exp_f32, &xs), &want, 1, "exp_f32");
}

#[test]
fn test_exp2_f32_dense() {
    let mut rng = seeded_rng(5);
    let xs = uniform_f32(&mut rng, -120.0, 120.0, SAMPLES);
    let want = reference_f32(f64::exp2, &xs);
    assert_ulp_f32(&xs, &map_f32(exp2_f32, &xs), &want, 2, "exp2_f32");
}

#[test]
fn test_exp2_f32_small_integers_exact() {
    let y = exp2_f32(F32x4::new([1.0, 2.0, 10.0, -3.0]));
    assert_eq!(y.to_array(), [2.0, 4.0, 1024.0, 0.125]);
}
