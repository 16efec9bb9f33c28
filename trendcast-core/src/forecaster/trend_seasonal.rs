//! Trend + seasonality model.
//!
//! 1. Least-squares line through `(i, y_i)` for `i = 0..n`.
//! 2. Seasonal amplitude = mean absolute residual around that line.
//! 3. `forecast[i - n] = slope·i + intercept + amplitude·sin(2π·i / period)`
//!    for `i = n..n + steps`.
//!
//! The amplitude is one scalar shared by every phase of the cycle; there is no
//! per-phase seasonal index.

use std::collections::BTreeMap;

use crate::domain::{FittedModel, Forecast, SeasonalPeriod};
use crate::error::ForecastError;
use crate::trend::{ensure_finite, LinearTrend};

use super::{ForecastReport, Forecaster};

#[derive(Debug, Clone, Copy, Default)]
pub struct TrendSeasonal;

impl TrendSeasonal {
    pub const NAME: &'static str = "trend_seasonal";

    /// Fit trend and seasonal amplitude without projecting.
    pub fn fit(
        &self,
        observations: &[f64],
        period: SeasonalPeriod,
    ) -> Result<FittedModel, ForecastError> {
        let trend = LinearTrend::fit(observations)?;
        let residuals = trend.residuals(observations);
        let seasonal_amplitude = ensure_finite(
            "seasonal amplitude",
            residuals.iter().map(|r| r.abs()).sum::<f64>() / residuals.len() as f64,
        )?;

        tracing::debug!(
            n = observations.len(),
            slope = trend.slope,
            intercept = trend.intercept,
            seasonal_amplitude,
            period = period.get(),
            "fitted trend + seasonal model"
        );

        Ok(FittedModel {
            slope: trend.slope,
            intercept: trend.intercept,
            seasonal_amplitude,
            seasonal_period: period,
        })
    }

    /// Fit, then project `steps` values past the last observation.
    pub fn run(
        &self,
        observations: &[f64],
        steps: usize,
        period: SeasonalPeriod,
    ) -> Result<Forecast, ForecastError> {
        let model = self.fit(observations, period)?;
        let forecast = model.project(observations.len(), steps);
        tracing::debug!(steps, "projected forecast");
        Ok(Forecast { forecast, model })
    }
}

impl From<Forecast> for ForecastReport {
    fn from(f: Forecast) -> Self {
        let mut params = BTreeMap::new();
        params.insert("slope".into(), f.model.slope);
        params.insert("intercept".into(), f.model.intercept);
        params.insert("seasonal_amplitude".into(), f.model.seasonal_amplitude);
        params.insert(
            "seasonal_period".into(),
            f.model.seasonal_period.get() as f64,
        );
        ForecastReport {
            model: TrendSeasonal::NAME.into(),
            forecast: f.forecast,
            params,
        }
    }
}

impl Forecaster for TrendSeasonal {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn forecast(
        &self,
        observations: &[f64],
        steps: usize,
        period: SeasonalPeriod,
    ) -> Result<ForecastReport, ForecastError> {
        self.run(observations, steps, period).map(ForecastReport::from)
    }
}
