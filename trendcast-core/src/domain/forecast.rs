//! Fitted model parameters and the forecast result built from them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::period::SeasonalPeriod;

/// Parameters of one trend + seasonality fit.
///
/// Returned by value from every fit; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    pub slope: f64,
    pub intercept: f64,
    /// Mean absolute detrended residual. A single scalar for every phase.
    #[serde(alias = "season_amp")]
    pub seasonal_amplitude: f64,
    #[serde(alias = "season_period")]
    pub seasonal_period: SeasonalPeriod,
}

impl FittedModel {
    /// Linear trend component at time index `i`.
    pub fn trend_at(&self, i: usize) -> f64 {
        self.slope * i as f64 + self.intercept
    }

    /// Seasonal component at time index `i`.
    pub fn seasonal_at(&self, i: usize) -> f64 {
        let phase = 2.0 * PI * i as f64 / self.seasonal_period.get() as f64;
        self.seasonal_amplitude * phase.sin()
    }

    /// Trend plus seasonal component at time index `i`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.trend_at(i) + self.seasonal_at(i)
    }

    /// Values for indices `start..start + steps`.
    pub fn project(&self, start: usize, steps: usize) -> Vec<f64> {
        (start..start + steps).map(|i| self.value_at(i)).collect()
    }
}

/// Forecast values plus the model that produced them.
///
/// Serializes to the flat map
/// `{ forecast, slope, intercept, seasonal_amplitude, seasonal_period }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecast: Vec<f64>,
    #[serde(flatten)]
    pub model: FittedModel,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }
}
