//! Error types for lanemath

use thiserror::Error;

/// Result type alias using lanemath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the slice-level entry points
///
/// The vector kernels themselves are total: every input produces a value,
/// either through the fast path or through the scalar fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An output slice or second operand does not match the input length
    #[error("Length mismatch for '{arg}': expected {expected}, got {got}")]
    LengthMismatch {
        /// The mismatched argument
        arg: &'static str,
        /// Expected length (the input length)
        expected: usize,
        /// Actual length
        got: usize,
    },
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { arg, expected, got }
    }
}

/// Why a vector was routed to the scalar fallback
///
/// This is a routing decision rather than a failure: the caller still gets
/// a result, computed lane by lane by the scalar reference.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// A lane is zero, subnormal, infinite or NaN
    #[error("lane {lane} is not a normal number")]
    AbnormalLane {
        /// First offending lane
        lane: usize,
    },

    /// A lane magnitude lies outside the range the polynomial is accurate on
    #[error("lane {lane} magnitude is outside the accurate range")]
    MagnitudeExceeded {
        /// First offending lane
        lane: usize,
    },

    /// A lane is negative where the function needs a positive operand
    #[error("lane {lane} is negative")]
    SignInvalid {
        /// First offending lane
        lane: usize,
    },
}

impl FallbackReason {
    /// Lane that triggered the fallback
    pub fn lane(self) -> usize {
        match self {
            Self::AbnormalLane { lane }
            | Self::MagnitudeExceeded { lane }
            | Self::SignInvalid { lane } => lane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::length_mismatch("output", 8, 7);
        assert_eq!(
            err.to_string(),
            "Length mismatch for 'output': expected 8, got 7"
        );
    }

    #[test]
    fn test_fallback_reason_lane() {
        assert_eq!(FallbackReason::SignInvalid { lane: 3 }.lane(), 3);
        assert_eq!(
            FallbackReason::AbnormalLane { lane: 1 }.to_string(),
            "lane 1 is not a normal number"
        );
    }
}
