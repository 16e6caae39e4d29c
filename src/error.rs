//! Error types for divider calculations.
//!
//! Every out-of-range input is rejected with a [`DividerError`] rather than
//! being allowed to produce an infinite or NaN resistance.

use thiserror::Error;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

/// Error conditions raised while solving a divider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DividerError {
    /// Supply voltage is zero, negative or not a number
    #[error("Supply voltage must be positive (got {supply} V)")]
    InvalidSupply { supply: f64 },

    /// R1 + R2 is zero, so the output voltage is undefined
    #[error("R1 + R2 is zero, output voltage is undefined")]
    ZeroResistance,

    /// R1 cannot be derived from a zero output voltage
    #[error("Output voltage must be non-zero to solve for R1")]
    ZeroOutputVoltage,

    /// Output voltage outside of `[0, supply)`
    #[error("Output voltage {output} V must be at least 0 V and below the supply voltage {supply} V")]
    OutputOutOfRange { output: f64, supply: f64 },

    /// Too many quantities unknown to pick a mode
    #[error("Cannot solve for the output voltage while {missing} is also unknown")]
    Underdetermined { missing: &'static str },
}

impl DividerError {
    /// Create an out of range error
    pub fn out_of_range(output: f64, supply: f64) -> Self {
        Self::OutputOutOfRange { output, supply }
    }
}
