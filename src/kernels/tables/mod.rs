//! Immutable reduction tables
//!
//! Every table is a `static` evaluated at compile time and never written, so
//! concurrent unsynchronized reads from any thread are sound. Lookups index
//! with a value already reduced modulo the table size.

mod exp;
mod log;
mod logf;
mod trig;

pub(crate) use self::log::{LOG_OFFSET, LOG_TABLE, LOG_TABLE_BITS, LOG2_TABLE, LOG2_TABLE_BITS};
pub(crate) use exp::{
    EXP_TABLE, EXP_TABLE_BITS, EXP_TABLE_SIZE, EXPF_TABLE, EXPF_TABLE_BITS, EXPF_TABLE_SIZE,
};
pub(crate) use logf::{LOG2F_TABLE, LOGF_OFFSET, LOGF_TABLE, LOGF_TABLE_BITS};
pub(crate) use trig::{COS_TABLE, HALF_PERIOD, SIN_TABLE, SINE_TABLE_SIZE};

/// Reciprocal and logarithm of a subinterval's leading significand
#[derive(Clone, Copy, Debug)]
pub(crate) struct LogEntry {
    pub invc: f64,
    pub logc: f64,
}

const fn entry(invc: u64, logc: u64) -> LogEntry {
    LogEntry {
        invc: f64::from_bits(invc),
        logc: f64::from_bits(logc),
    }
}

/// One reference angle of the sine/cosine tables
///
/// `hiref`/`loref` locate the angle relative to `j*pi/16`; `value` is the
/// function at that angle and `slope` its derivative.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SineRow {
    pub hiref: f64,
    pub loref: f64,
    pub value: f64,
    pub slope: f64,
}
