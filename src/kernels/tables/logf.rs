//! Reciprocal tables for the single-precision logarithms
//!
//! Same layout as the double-precision tables with 16 subintervals of
//! `[0x1.66p-1, 0x1.66p0)`, indexed from the single-precision mantissa.
//! Entries are stored in double precision because the single-precision
//! kernels evaluate in double.

use super::{LogEntry, entry};

/// Offset subtracted from the input bits so `0x1.66p-1` maps to index 0
pub(crate) const LOGF_OFFSET: u32 = 0x3f33_0000;

/// log2 of the table size
pub(crate) const LOGF_TABLE_BITS: u32 = 4;

/// Natural log: `logc = -ln(invc)`
pub(crate) static LOGF_TABLE: [LogEntry; 1 << LOGF_TABLE_BITS] = [
    entry(0x3ff6_64a9_9209_a6d7, 0xbfd5_83cb_b6bc_303e),
    entry(0x3ff5_7455_e6e8_b2fe, 0xbfd2_c620_72a6_50e6),
    entry(0x3ff4_975b_1d6b_37ce, 0xbfd0_254d_4df0_7983),
    entry(0x3ff3_cb7a_0cd9_9367, 0xbfcb_3e15_44b1_b98e),
    entry(0x3ff3_0ec9_506f_9944, 0xbfc6_62a6_d246_141e),
    entry(0x3ff2_5fa5_dcb4_760c, 0xbfc1_b4b6_e8fa_3a2f),
    entry(0x3ff1_bca6_cad5_1a29, 0xbfba_621d_8fef_e6b8),
    entry(0x3ff1_2493_98e8_dd07, 0xbfb1_a997_e4ce_c4df),
    entry(0x3ff0_965c_5033_3d4d, 0xbfa2_7554_3439_ff23),
    entry(0x3fef_f3ca_c6fc_553d, 0x3f58_6f1b_7a2f_343b),
    entry(0x3fee_5e0d_f981_3752, 0x3faa_cfbe_90dd_9755),
    entry(0x3fec_aa70_ef26_1995, 0x3fbc_2b08_5a09_2040),
    entry(0x3feb_2516_9832_10b2, 0x3fc5_0fe5_56ae_7c7a),
    entry(0x3fe9_c6fe_7850_7e4b, 0x3fcb_adc7_bccf_9570),
    entry(0x3fe8_8a80_a369_30b5, 0x3fd0_fc25_001e_6868),
    entry(0x3fe7_6afe_b422_5b84, 0x3fd3_fba0_a49d_392b),
];

/// Base-2 log: `logc = -log2(invc)`
pub(crate) static LOG2F_TABLE: [LogEntry; 1 << LOGF_TABLE_BITS] = [
    entry(0x3ff6_64a9_9209_a6d7, 0xbfdf_0a11_d2f0_cf85),
    entry(0x3ff5_7455_e6e8_b2fe, 0xbfdb_15c6_754b_4656),
    entry(0x3ff4_975b_1d6b_37ce, 0xbfd7_4b18_211e_6492),
    entry(0x3ff3_cb7a_0cd9_9367, 0xbfd3_a6bc_cf35_007c),
    entry(0x3ff3_0ec9_506f_9944, 0xbfd0_25ca_9644_4db9),
    entry(0x3ff2_5fa5_dcb4_760c, 0xbfc9_8b53_20da_0f26),
    entry(0x3ff1_bca6_cad5_1a29, 0xbfc3_0810_7ff6_07c6),
    entry(0x3ff1_2493_98e8_dd07, 0xbfb9_7b47_c086_28ef),
    entry(0x3ff0_965c_5033_3d4d, 0xbfaa_a135_66f4_689d),
    entry(0x3fef_f3ca_c6fc_553d, 0x3f61_a01b_2d9e_fba9),
    entry(0x3fee_5e0d_f981_3752, 0x3fb3_5725_1ee1_4dfe),
    entry(0x3fec_aa70_ef26_1995, 0x3fc4_51a9_16ba_4c6e),
    entry(0x3feb_2516_9832_10b2, 0x3fce_62dc_8553_e774),
    entry(0x3fe9_c6fe_7850_7e4b, 0x3fd3_f74f_5bde_67cd),
    entry(0x3fe8_8a80_a369_30b5, 0x3fd8_810b_eb05_e8c9),
    entry(0x3fe7_6afe_b422_5b84, 0x3fdc_d44a_5a6d_a8eb),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_reciprocals() {
        for (a, b) in LOGF_TABLE.iter().zip(LOG2F_TABLE.iter()) {
            assert_eq!(a.invc, b.invc);
            assert!((a.logc / std::f64::consts::LN_2 - b.logc).abs() < 1e-15);
        }
    }

    #[test]
    fn test_subinterval_coverage() {
        let base = LOGF_OFFSET;
        for (i, e) in LOGF_TABLE.iter().enumerate() {
            let lo = f64::from(f32::from_bits(base + ((i as u32) << 19)));
            let hi = f64::from(f32::from_bits(base + ((i as u32 + 1) << 19)));
            for z in [lo, hi] {
                assert!((z * e.invc - 1.0).abs() < 0.04, "entry {i} at {z}");
            }
        }
    }
}
