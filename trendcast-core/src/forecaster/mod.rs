//! Forecasters — turn an observation sequence into future values.
//!
//! Every model implements [`Forecaster`] and returns a [`ForecastReport`]: the
//! forecast values plus the model's named parameters. Forecasters hold no
//! mutable state, so one instance can serve any number of callers.

pub mod naive_drift;
pub mod trend_seasonal;

pub use naive_drift::NaiveDrift;
pub use trend_seasonal::TrendSeasonal;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Forecast, SeasonalPeriod};
use crate::error::ForecastError;

/// Model-agnostic forecast result.
///
/// `params` uses `BTreeMap` so serialized output has a stable key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub model: String,
    pub forecast: Vec<f64>,
    pub params: BTreeMap<String, f64>,
}

impl ForecastReport {
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params.get(name).copied()
    }
}

/// Trait for forecasting models.
pub trait Forecaster: Send + Sync {
    /// Model name (e.g., "trend_seasonal").
    fn name(&self) -> &str;

    /// Forecast `steps` values past the end of `observations`.
    ///
    /// The forecast has `steps` entries whenever the model can produce values
    /// at all; [`NaiveDrift`] returns an empty forecast for empty input.
    fn forecast(
        &self,
        observations: &[f64],
        steps: usize,
        period: SeasonalPeriod,
    ) -> Result<ForecastReport, ForecastError>;
}

/// Trend + seasonality forecast with integer arguments.
///
/// Rejects negative `steps` and non-positive `seasonal_period` before fitting.
/// Use [`SeasonalPeriod::DEFAULT`] (4) when the caller has no period in mind.
pub fn forecast(
    observations: &[f64],
    steps: i64,
    seasonal_period: i64,
) -> Result<Forecast, ForecastError> {
    let steps = usize::try_from(steps).map_err(|_| ForecastError::NegativeSteps(steps))?;
    let period = SeasonalPeriod::try_from(seasonal_period)?;
    TrendSeasonal.run(observations, steps, period)
}
