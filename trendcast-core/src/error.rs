//! Forecast errors.
//!
//! Every failure of the forecasting core is an invalid-input condition. Most are
//! caught before fitting; overflow of finite inputs is caught right after the
//! fit. Nothing is retried or recovered internally.

use thiserror::Error;

/// Minimum number of observations for a least-squares line to be defined.
pub const MIN_OBSERVATIONS: usize = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("invalid input: need at least 2 observations, got {0}")]
    TooFewObservations(usize),

    #[error("invalid input: steps must be >= 0, got {0}")]
    NegativeSteps(i64),

    #[error("invalid input: seasonal period must be > 0, got {0}")]
    NonPositivePeriod(i64),

    #[error("invalid input: observation {index} is not finite ({value})")]
    NonFiniteObservation { index: usize, value: f64 },

    /// Finite observations whose magnitude overflows `f64` during fitting.
    #[error("invalid input: {quantity} overflowed to {value} during fitting")]
    NumericOverflow { quantity: &'static str, value: f64 },
}

impl ForecastError {
    /// All forecast errors belong to the invalid-input class.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::TooFewObservations(_)
                | Self::NegativeSteps(_)
                | Self::NonPositivePeriod(_)
                | Self::NonFiniteObservation { .. }
                | Self::NumericOverflow { .. }
        )
    }
}
