//! Naive drift — mean level plus an endpoint-to-endpoint drift.
//!
//! `avg = mean(y)`, `trend = (y[n-1] - y[0]) / n`, `forecast[k-1] = avg + trend·k`
//! for `k = 1..=steps`. The seasonal period is echoed into the report but does
//! not affect the values. Empty input yields an empty forecast rather than an
//! error.

use std::collections::BTreeMap;

use crate::domain::SeasonalPeriod;
use crate::error::ForecastError;
use crate::trend::ensure_finite;

use super::{ForecastReport, Forecaster};

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDrift;

impl NaiveDrift {
    pub const NAME: &'static str = "naive_drift";
}

impl Forecaster for NaiveDrift {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn forecast(
        &self,
        observations: &[f64],
        steps: usize,
        period: SeasonalPeriod,
    ) -> Result<ForecastReport, ForecastError> {
        let mut params = BTreeMap::new();
        params.insert("period".to_string(), period.get() as f64);

        let (first, last) = match (observations.first(), observations.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                params.insert("avg".to_string(), 0.0);
                params.insert("trend".to_string(), 0.0);
                return Ok(ForecastReport {
                    model: Self::NAME.into(),
                    forecast: Vec::new(),
                    params,
                });
            }
        };

        if let Some((index, &value)) = observations
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(ForecastError::NonFiniteObservation { index, value });
        }

        let n = observations.len() as f64;
        let avg = ensure_finite("average", observations.iter().sum::<f64>() / n)?;
        let trend = ensure_finite("trend", (last - first) / n)?;
        let forecast = (1..=steps).map(|k| avg + trend * k as f64).collect();

        tracing::debug!(n = observations.len(), avg, trend, steps, "naive drift forecast");

        params.insert("avg".to_string(), avg);
        params.insert("trend".to_string(), trend);
        Ok(ForecastReport {
            model: Self::NAME.into(),
            forecast,
            params,
        })
    }
}
