//! Reference-angle tables for sine and cosine
//!
//! Row `j` describes the reference angle `a_j = j*pi/16 + hiref`. The small
//! `hiref` offsets are chosen so that `sin(a_j)` and `cos(a_j)` are unusually
//! close to doubles, which makes the stored values nearly exact. Rows `j` and
//! `j + 16` share an offset and differ by half a period, so the second half of
//! each table is the first half negated.

use super::SineRow;

/// Rows per full period
pub(crate) const SINE_TABLE_SIZE: usize = 32;

/// Index offset for a half-period phase shift
pub(crate) const HALF_PERIOD: u32 = 16;

/// `(hiref, sin(a_j), cos(a_j))` bit patterns for the first half period
#[rustfmt::skip]
const BASE: [(u64, u64, u64); 16] = [
    base(0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x3ff0_0000_0000_0000),
    base(0xbd55_9400_0000_0000, 0x3fc8_f8b8_3c69_7bb7, 0x3fef_6297_cff7_5ecb),
    base(0x3d63_e800_0000_0000, 0x3fd8_7de2_a6ae_ce2b, 0x3fed_906b_cf32_85a8),
    base(0x3d44_4000_0000_0000, 0x3fe1_c73b_39ae_6cfe, 0x3fea_9b66_290e_9ed3),
    base(0x3d52_9400_0000_0000, 0x3fe6_a09e_667f_425e, 0x3fe6_a09e_667f_353b),
    base(0xbd44_4000_0000_0000, 0x3fea_9b66_290e_9ed3, 0x3fe1_c73b_39ae_6cfe),
    base(0xbd63_e800_0000_0000, 0x3fed_906b_cf32_85a8, 0x3fd8_7de2_a6ae_ce2b),
    base(0x3d55_9400_0000_0000, 0x3fef_6297_cff7_5ecb, 0x3fc8_f8b8_3c69_7bb7),
    base(0x0000_0000_0000_0000, 0x3ff0_0000_0000_0000, 0x0000_0000_0000_0000),
    base(0xbd55_9400_0000_0000, 0x3fef_6297_cff7_5ecb, 0xbfc8_f8b8_3c69_7bb7),
    base(0x3d63_e800_0000_0000, 0x3fed_906b_cf32_85a8, 0xbfd8_7de2_a6ae_ce2b),
    base(0x3d44_4000_0000_0000, 0x3fea_9b66_290e_9ed3, 0xbfe1_c73b_39ae_6cfe),
    base(0x3d52_9400_0000_0000, 0x3fe6_a09e_667f_353b, 0xbfe6_a09e_667f_425e),
    base(0xbd44_4000_0000_0000, 0x3fe1_c73b_39ae_6cfe, 0xbfea_9b66_290e_9ed3),
    base(0xbd63_e800_0000_0000, 0x3fd8_7de2_a6ae_ce2b, 0xbfed_906b_cf32_85a8),
    base(0x3d55_9400_0000_0000, 0x3fc8_f8b8_3c69_7bb7, 0xbfef_6297_cff7_5ecb),
];

const fn base(hiref: u64, sin: u64, cos: u64) -> (u64, u64, u64) {
    (hiref, sin, cos)
}

/// `value = sin(a_j)`, `slope = cos(a_j)`
pub(crate) static SIN_TABLE: [SineRow; SINE_TABLE_SIZE] = build(false);

/// `value = cos(a_j)`, `slope = -sin(a_j)`
pub(crate) static COS_TABLE: [SineRow; SINE_TABLE_SIZE] = build(true);

const fn build(cosine: bool) -> [SineRow; SINE_TABLE_SIZE] {
    let zero = SineRow {
        hiref: 0.0,
        loref: 0.0,
        value: 0.0,
        slope: 0.0,
    };
    let mut out = [zero; SINE_TABLE_SIZE];
    let mut j = 0;
    while j < SINE_TABLE_SIZE {
        let (hiref, sin, cos) = BASE[j % 16];
        let (mut s, mut c) = (f64::from_bits(sin), f64::from_bits(cos));
        if j >= 16 {
            s = -s;
            c = -c;
        }
        let (value, slope) = if cosine { (c, -s) } else { (s, c) };
        out[j] = SineRow {
            hiref: f64::from_bits(hiref),
            loref: 0.0,
            value,
            slope,
        };
        j += 1;
    }
    out
}
