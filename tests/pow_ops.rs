//! Tests for pow, composed from the base-2 kernels

mod common;

use common::*;
use lanemath::kernels::{exp2_f32, exp2_f64, log2_f32, log2_f64, pow_f32, pow_f64};
use lanemath::lanes::{F32x4, F64x2};
use proptest::prelude::*;

#[test]
fn test_pow_two_ten() {
    let y = pow_f64(F64x2::new([2.0, 2.0]), F64x2::new([10.0, 10.0]));
    assert_allclose_f64(&y.to_array(), &[1024.0, 1024.0], 1e-13, 0.0, "pow(2, 10)");
    let y = pow_f32(F32x4::splat(2.0), F32x4::splat(10.0));
    assert_eq!(y.to_array(), [1024.0; 4]);
}

#[test]
fn test_pow_f64_dense() {
    let mut rng = seeded_rng(21);
    let xs = uniform_f64(&mut rng, 1.5, 100.0, 10_000);
    let ys = uniform_f64(&mut rng, 0.1, 10.0, 10_000);
    let got: Vec<f64> = xs
        .chunks_exact(2)
        .zip(ys.chunks_exact(2))
        .flat_map(|(x, y)| {
            let (x, y) = (F64x2::new([x[0], x[1]]), F64x2::new([y[0], y[1]]));
            pow_f64(x, y).to_array()
        })
        .collect();
    let want: Vec<f64> = xs.iter().zip(&ys).map(|(x, y)| x.powf(*y)).collect();
    assert_allclose_f64(&got, &want, 1e-13, 0.0, "pow_f64");
}

#[test]
fn test_pow_f32_dense() {
    let mut rng = seeded_rng(22);
    let xs = uniform_f32(&mut rng, 1.5, 20.0, 10_000);
    let ys = uniform_f32(&mut rng, 0.1, 4.0, 10_000);
    let got: Vec<f32> = xs
        .chunks_exact(4)
        .zip(ys.chunks_exact(4))
        .flat_map(|(x, y)| {
            pow_f32(
                F32x4::new([x[0], x[1], x[2], x[3]]),
                F32x4::new([y[0], y[1], y[2], y[3]]),
            )
            .to_array()
        })
        .collect();
    let want: Vec<f32> = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| f64::from(*x).powf(f64::from(*y)) as f32)
        .collect();
    assert_allclose_f32(&got, &want, 2e-6, 0.0, "pow_f32");
}

#[test]
fn test_pow_outside_fast_domain_matches_powf() {
    let x = F64x2::new([0.5, 200.0]);
    let y = F64x2::new([3.0, 0.5]);
    assert_bits_eq_f64(
        &pow_f64(x, y).to_array(),
        &[0.5f64.powf(3.0), 200.0f64.powf(0.5)],
        "pow cutoff",
    );
}

proptest! {
    #[test]
    fn prop_pow_f64_is_exp2_of_scaled_log2(
        x0 in 1e-3f64..125.0,
        x1 in 1e-3f64..125.0,
        y0 in 1e-3f64..125.0,
        y1 in 1e-3f64..125.0,
    ) {
        let (x, y) = (F64x2::new([x0, x1]), F64x2::new([y0, y1]));
        let composed = exp2_f64(y * log2_f64(x));
        let got = pow_f64(x, y).to_array().map(f64::to_bits);
        prop_assert_eq!(got, composed.to_array().map(f64::to_bits));
    }

    #[test]
    fn prop_pow_f32_is_exp2_of_scaled_log2(
        x in prop::array::uniform4(1e-3f32..80.0),
        y in prop::array::uniform4(1e-3f32..80.0),
    ) {
        let (x, y) = (F32x4::new(x), F32x4::new(y));
        let composed = exp2_f32(y * log2_f32(x));
        let got = pow_f32(x, y).to_array().map(f32::to_bits);
        prop_assert_eq!(got, composed.to_array().map(f32::to_bits));
    }
}
