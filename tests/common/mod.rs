//! Common test utilities
#![allow(dead_code)]

use lanemath::lanes::{F32x4, F64x2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run a double-precision kernel over `xs`, two lanes at a time
pub fn map_f64(kernel: fn(F64x2) -> F64x2, xs: &[f64]) -> Vec<f64> {
    assert_eq!(xs.len() % 2, 0, "sample count must fill whole vectors");
    xs.chunks_exact(2)
        .flat_map(|c| kernel(F64x2::new([c[0], c[1]])).to_array())
        .collect()
}

/// Run a single-precision kernel over `xs`, four lanes at a time
pub fn map_f32(kernel: fn(F32x4) -> F32x4, xs: &[f32]) -> Vec<f32> {
    assert_eq!(xs.len() % 4, 0, "sample count must fill whole vectors");
    xs.chunks_exact(4)
        .flat_map(|c| kernel(F32x4::new([c[0], c[1], c[2], c[3]])).to_array())
        .collect()
}

/// Single-precision reference: evaluate in double, round once
pub fn reference_f32(f: fn(f64) -> f64, xs: &[f32]) -> Vec<f32> {
    xs.iter().map(|&x| f(f64::from(x)) as f32).collect()
}

/// Deterministic RNG so dense sampling is reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` doubles drawn uniformly from `[lo, hi)`
pub fn uniform_f64(rng: &mut StdRng, lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

/// `n` doubles whose logarithm is uniform in `[ln(lo), ln(hi))`
pub fn log_uniform_f64(rng: &mut StdRng, lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let (a, b) = (lo.ln(), hi.ln());
    (0..n)
        .map(|_| rng.random_range(a..b).exp().clamp(lo, hi))
        .collect()
}

/// `n` floats drawn uniformly from `[lo, hi)`
pub fn uniform_f32(rng: &mut StdRng, lo: f32, hi: f32, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

/// Distance between two doubles counted in representable values
pub fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    fn ordered(x: f64) -> i64 {
        let bits = x.to_bits() as i64;
        if bits < 0 { i64::MIN - bits } else { bits }
    }
    ordered(a).abs_diff(ordered(b))
}

/// Distance between two floats counted in representable values
pub fn ulp_distance_f32(a: f32, b: f32) -> u32 {
    fn ordered(x: f32) -> i32 {
        let bits = x.to_bits() as i32;
        if bits < 0 { i32::MIN - bits } else { bits }
    }
    ordered(a).abs_diff(ordered(b))
}

/// Assert every result is within `max_ulp` of the reference
pub fn assert_ulp_f64(inputs: &[f64], got: &[f64], want: &[f64], max_ulp: u64, msg: &str) {
    assert_eq!(got.len(), want.len(), "{}: length mismatch", msg);
    for ((x, a), b) in inputs.iter().zip(got).zip(want) {
        let d = ulp_distance_f64(*a, *b);
        assert!(
            d <= max_ulp,
            "{}: at x={:e} got {:e}, want {:e} ({} ulp)",
            msg,
            x,
            a,
            b,
            d
        );
    }
}

/// Assert every result is within `max_ulp` of the reference
pub fn assert_ulp_f32(inputs: &[f32], got: &[f32], want: &[f32], max_ulp: u32, msg: &str) {
    assert_eq!(got.len(), want.len(), "{}: length mismatch", msg);
    for ((x, a), b) in inputs.iter().zip(got).zip(want) {
        let d = ulp_distance_f32(*a, *b);
        assert!(
            d <= max_ulp,
            "{}: at x={:e} got {:e}, want {:e} ({} ulp)",
            msg,
            x,
            a,
            b,
            d
        );
    }
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two slices are identical bit for bit (NaN payloads included)
pub fn assert_bits_eq_f64(a: &[f64], b: &[f64], msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert_eq!(x.to_bits(), y.to_bits(), "{msg}: lane {i}: {x} vs {y}");
    }
}

/// Assert two slices are identical bit for bit (NaN payloads included)
pub fn assert_bits_eq_f32(a: &[f32], b: &[f32], msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert_eq!(x.to_bits(), y.to_bits(), "{msg}: lane {i}: {x} vs {y}");
    }
}
