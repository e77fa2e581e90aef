//! Shared constants for the lane kernels
//!
//! Polynomial coefficients, reduction constants and split constants for every
//! kernel live here so each function's numeric identity is visible in one
//! place. The coefficients are minimax fits over the residual range the
//! matching reduction guarantees; changing the evaluation order in a kernel
//! invalidates them.

// ============================================================================
// Exponential family
// ============================================================================

/// Constants for exp/exp2 (double) and expf/exp2f (single, evaluated in double)
pub(crate) mod exp_coefficients {
    /// `0x1.8p52`: adding it rounds any `|z| < 2^51` to an integer in the low mantissa bits
    pub const SHIFT: f64 = f64::from_bits(0x4338_0000_0000_0000);

    /// `1/ln2`
    pub const INV_LN2: f64 = f64::from_bits(0x3ff7_1547_652b_82fe);

    /// `-ln2/128` split high/low; `k * NEG_LN2_HI_N` is exact for every reachable `k`
    pub const NEG_LN2_HI_N: f64 = f64::from_bits(0xbf76_2e42_fefa_0000);
    pub const NEG_LN2_LO_N: f64 = f64::from_bits(0xbd0c_f79a_bc9e_3b3a);

    /// `exp(r) - 1 - r` on `|r| <= ln2/256`, degrees 2 to 5
    pub const EXP_C2: f64 = f64::from_bits(0x3fdf_ffff_ffff_fdbd);
    pub const EXP_C3: f64 = f64::from_bits(0x3fc5_5555_5555_543c);
    pub const EXP_C4: f64 = f64::from_bits(0x3fa5_5555_cf17_2b91);
    pub const EXP_C5: f64 = f64::from_bits(0x3f81_1111_67a4_d017);

    /// `2^r - 1` on `|r| <= 1/256`, degrees 1 to 5
    pub const EXP2_C1: f64 = f64::from_bits(0x3fe6_2e42_fefa_39ef);
    pub const EXP2_C2: f64 = f64::from_bits(0x3fce_bfbd_ff82_c424);
    pub const EXP2_C3: f64 = f64::from_bits(0x3fac_6b08_d70c_f4b5);
    pub const EXP2_C4: f64 = f64::from_bits(0x3f83_b2ab_d246_50cc);
    pub const EXP2_C5: f64 = f64::from_bits(0x3f55_d7e0_9b4e_3a84);

    /// `2^r - 1` on `|r| <= 1/64`, degrees 3, 2, 1 (single precision)
    pub const EXP2F_C3: f64 = f64::from_bits(0x3fac_6af8_4b91_2394);
    pub const EXP2F_C2: f64 = f64::from_bits(0x3fce_bfce_50fa_c4f3);
    pub const EXP2F_C1: f64 = f64::from_bits(0x3fe6_2e42_ff0c_52d6);

    /// Input cutoffs of the fast path
    pub const MAX_F64: f64 = 700.0;
    pub const MAX_EXPF: f64 = 80.0;
    pub const MAX_EXP2F: f64 = 128.0;
}

// ============================================================================
// Logarithm family
// ============================================================================

/// Constants for log/log2 (double) and logf/log2f (single, evaluated in double)
pub(crate) mod log_coefficients {
    /// `ln2` split high/low; `k * LN2_HI` is exact for every reachable exponent
    pub const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fefa_3800);
    pub const LN2_LO: f64 = f64::from_bits(0x3d2e_f357_93c7_6730);

    /// `ln2` rounded once, for the single-precision kernels
    pub const LN2: f64 = f64::from_bits(0x3fe6_2e42_fefa_39ef);

    /// `1/ln2` split high/low
    pub const INV_LN2_HI: f64 = f64::from_bits(0x3ff7_1547_6520_0000);
    pub const INV_LN2_LO: f64 = f64::from_bits(0x3de7_05fc_2eef_a200);

    /// `log1p(r) - r` over `r^2`, natural log, degrees 0 to 4
    pub const LOG_A: [f64; 5] = [
        f64::from_bits(0xbfe0_0000_0000_0001),
        f64::from_bits(0x3fd5_5555_5551_305b),
        f64::from_bits(0xbfcf_ffff_ffeb_4590),
        f64::from_bits(0x3fc9_99b3_24f1_0111),
        f64::from_bits(0xbfc5_5575_e506_c89f),
    ];

    /// `log2(1 + r) - r/ln2` over `r^2`, degrees 0 to 5
    pub const LOG2_B: [f64; 6] = [
        f64::from_bits(0xbfe7_1547_652b_8339),
        f64::from_bits(0x3fde_c709_dc3a_04be),
        f64::from_bits(0xbfd7_1547_6470_2ffb),
        f64::from_bits(0x3fd2_776c_5003_4c48),
        f64::from_bits(0xbfce_c7b3_28ea_92bc),
        f64::from_bits(0x3fca_6225_e117_f92e),
    ];

    /// `log1p(r)` for single precision: `r^2` terms of degrees 4, 3, 2
    pub const LOGF_A: [f64; 3] = [
        f64::from_bits(0xbfd0_0ea3_48b8_8334),
        f64::from_bits(0x3fd5_575b_0be0_0b6a),
        f64::from_bits(0xbfdf_fffe_f20a_4123),
    ];

    /// `log2(1 + r)` for single precision, degrees 4 to 1
    pub const LOG2F_A: [f64; 4] = [
        f64::from_bits(0xbfd7_12b6_f70a_7e4d),
        f64::from_bits(0x3fde_cabf_4968_32e0),
        f64::from_bits(0xbfe7_1547_9ffa_e3de),
        f64::from_bits(0x3ff7_1547_5f35_c8b8),
    ];

    /// Lower input bounds of the fast path
    pub const MIN_LOG: f64 = 1.3;
    pub const MIN_LOG2: f64 = 1.32;
}

// ============================================================================
// Power
// ============================================================================

/// Operand cutoffs for pow
pub(crate) mod pow_coefficients {
    pub const MAX_F64: f64 = 125.0;
    pub const MAX_F32: f64 = 80.0;
}

// ============================================================================
// Sine / cosine
// ============================================================================

/// Constants for the shared sine/cosine kernel
pub(crate) mod trig_coefficients {
    /// `16/pi`
    pub const INV_PI_16: f64 = f64::from_bits(0x4014_5f30_6dc9_c883);

    /// `pi/16` as a three-part sum; the parts are calibrated together
    pub const PI_16_HI: f64 = f64::from_bits(0x3fc9_21fb_5444_2d18);
    pub const PI_16_MID: f64 = f64::from_bits(0x3c61_a626_3314_5c07);
    pub const PI_16_LO: f64 = f64::from_bits(0xb8ef_1976_b7ed_8fbc);

    /// Taylor terms of `sin(r)/r - 1` in `r^2`, degrees 1 to 5
    pub const SIN_P: [f64; 5] = [
        -1.0 / 6.0,
        1.0 / 120.0,
        -1.0 / 5040.0,
        1.0 / 362_880.0,
        -1.0 / 39_916_800.0,
    ];

    /// Taylor terms of `cos(r) - 1` in `r^2`, degrees 1 to 5
    pub const COS_P: [f64; 5] = [
        -1.0 / 2.0,
        1.0 / 24.0,
        -1.0 / 720.0,
        1.0 / 40_320.0,
        -1.0 / 3_628_800.0,
    ];

    /// Input cutoff of the fast path
    pub const MAX_ABS: f64 = 1000.0;
}
