//! Linear trend — ordinary least-squares line through (index, value) pairs.
//!
//! Uses the centered form `slope = Σ(x−x̄)(y−ȳ) / Σ(x−x̄)²` so large series
//! do not lose precision to the raw-sum formula. Time indices are `0..n`.

use crate::error::{ForecastError, MIN_OBSERVATIONS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fit a degree-1 polynomial through `values` indexed `0..n`.
    ///
    /// Requires at least two finite values.
    pub fn fit(values: &[f64]) -> Result<Self, ForecastError> {
        check_observations(values)?;

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        // sxx > 0 whenever n >= 2 since the indices are distinct
        let slope = ensure_finite("slope", sxy / sxx)?;
        let intercept = ensure_finite("intercept", y_mean - slope * x_mean)?;
        Ok(Self { slope, intercept })
    }

    pub fn at(&self, i: usize) -> f64 {
        self.slope * i as f64 + self.intercept
    }

    /// Detrended residuals: observed minus trend at the same index.
    pub fn residuals(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| y - self.at(i))
            .collect()
    }
}

/// Length and finiteness checks shared by every model that fits a line.
pub(crate) fn check_observations(values: &[f64]) -> Result<(), ForecastError> {
    if values.len() < MIN_OBSERVATIONS {
        return Err(ForecastError::TooFewObservations(values.len()));
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ForecastError::NonFiniteObservation { index, value });
    }
    Ok(())
}

/// Finite inputs can still overflow in sums and products.
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, ForecastError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForecastError::NumericOverflow { quantity, value })
    }
}
