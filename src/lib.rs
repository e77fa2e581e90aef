//! # lanemath
//!
//! **Table-driven elementary functions over short fixed-width float vectors.**
//!
//! lanemath evaluates exp, exp2, log, log2, pow, sin and cos on two lanes of
//! double precision or four lanes of single precision at a time. Each call
//! checks every lane against the function's fast domain; vectors that pass
//! take a branch-free reduction, table lookup and short polynomial, and
//! vectors that don't are computed lane by lane by the platform math library.
//!
//! ## Features
//!
//! - **Vector kernels**: `exp`, `exp2`, `log`, `log2`, `pow`, `sin`, `cos` for
//!   [`F64x2`](lanes::F64x2) and [`F32x4`](lanes::F32x4)
//! - **All-or-nothing guard**: a vector is never a mix of fast and fallback lanes
//! - **Introspection**: every kernel's domain, table size and error bound via
//!   [`kernels::CATALOG`]
//! - **Slices**: [`batch`] applies the kernels to whole slices, in parallel with `rayon`
//!
//! ## Quick Start
//!
//! ```rust
//! use lanemath::prelude::*;
//!
//! let y = exp_f64(F64x2::new([1.0, 2.0]));
//! assert_eq!(y[0], std::f64::consts::E);
//!
//! let mut out = [0.0f32; 5];
//! batch::unary_f32(UnaryOp::Log2, &[2.0, 4.0, 8.0, 16.0, 32.0], &mut out)?;
//! assert_eq!(out[4], 5.0);
//! # Ok::<(), lanemath::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded slice evaluation in [`batch`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod dtype;
pub mod error;
pub mod kernels;
pub mod lanes;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch;
    pub use crate::dtype::{DType, LaneElement};
    pub use crate::error::{Error, FallbackReason, Result};
    pub use crate::kernels::{
        BinaryOp, UnaryOp, cos_f32, cos_f64, exp_f32, exp_f64, exp2_f32, exp2_f64, log_f32,
        log_f64, log2_f32, log2_f64, pow_f32, pow_f64, sin_f32, sin_f64,
    };
    pub use crate::lanes::{F32x4, F64x2, LaneVector};
}
