//! Accuracy tests for the logarithm family

mod common;

use common::*;
use lanemath::kernels::{log_f32, log_f64, log2_f32, log2_f64};
use lanemath::lanes::{F32x4, F64x2};

const SAMPLES: usize = 20_000;

// ============================================================================
// Double precision
// ============================================================================

#[test]
fn test_log_f64_dense() {
    let mut rng = seeded_rng(11);
    let xs = log_uniform_f64(&mut rng, 1.300_001, 1e300, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.ln()).collect();
    assert_ulp_f64(&xs, &map_f64(log_f64, &xs), &want, 2, "log_f64");
}

#[test]
fn test_log_f64_near_lower_bound() {
    let mut rng = seeded_rng(12);
    let xs = uniform_f64(&mut rng, 1.300_001, 4.0, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.ln()).collect();
    assert_ulp_f64(&xs, &map_f64(log_f64, &xs), &want, 2, "log_f64 near");
}

#[test]
fn test_log2_f64_dense() {
    let mut rng = seeded_rng(13);
    let xs = log_uniform_f64(&mut rng, 1.320_001, 1e300, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.log2()).collect();
    assert_ulp_f64(&xs, &map_f64(log2_f64, &xs), &want, 2, "log2_f64");
}

#[test]
fn test_log2_f64_near_lower_bound() {
    let mut rng = seeded_rng(14);
    let xs = uniform_f64(&mut rng, 1.320_001, 4.0, SAMPLES);
    let want: Vec<f64> = xs.iter().map(|x| x.log2()).collect();
    assert_ulp_f64(&xs, &map_f64(log2_f64, &xs), &want, 2, "log2_f64 near");
}

#[test]
fn test_log2_eight_is_exact() {
    assert_eq!(log2_f64(F64x2::new([8.0, 8.0])).to_array(), [3.0, 3.0]);
    assert_eq!(log2_f32(F32x4::splat(8.0)).to_array(), [3.0; 4]);
}

#[test]
fn test_log_f64_largest_finite() {
    let y = log_f64(F64x2::new([f64::MAX, 2.0]));
    assert!(ulp_distance_f64(y[0], f64::MAX.ln()) <= 2);
    assert!(ulp_distance_f64(y[1], std::f64::consts::LN_2) <= 1);
}

// ============================================================================
// Single precision
// ============================================================================

#[test]
fn test_log_f32_dense() {
    let mut rng = seeded_rng(15);
    let xs: Vec<f32> = log_uniform_f64(&mut rng, 1.3, 1e38, SAMPLES)
        .into_iter()
        .map(|x| (x as f32).max(1.3))
        .collect();
    let want = reference_f32(f64::ln, &xs);
    assert_ulp_f32(&xs, &map_f32(log_f32, &xs), &want, 1, "log_f32");
}

#[test]
fn test_log2_f32_dense() {
    let mut rng = seeded_rng(16);
    let xs: Vec<f32> = log_uniform_f64(&mut rng, 1.3, 1e38, SAMPLES)
        .into_iter()
        .map(|x| (x as f32).max(1.3))
        .collect();
    let want = reference_f32(f64::log2, &xs);
    assert_ulp_f32(&xs, &map_f32(log2_f32, &xs), &want, 1, "log2_f32");
}

#[test]
fn test_log_f32_near_lower_bound() {
    let mut rng = seeded_rng(17);
    let xs = uniform_f32(&mut rng, 1.3, 4.0, SAMPLES);
    let want = reference_f32(f64::ln, &xs);
    assert_ulp_f32(&xs, &map_f32(log_f32, &xs), &want, 1, "log_f32 near");
    let want = reference_f32(f64::log2, &xs);
    assert_ulp_f32(&xs, &map_f32(log2_f32, &xs), &want, 1, "log2_f32 near");
}
