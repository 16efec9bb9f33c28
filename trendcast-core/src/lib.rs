//! trendcast core — trend + seasonality forecasting.
//!
//! - Linear least-squares trend over time indices
//! - Trend + seasonal sine forecaster, and a naive drift baseline
//! - `Forecaster` trait with a name-keyed factory
//! - TOML configuration, CSV/JSON observation loading
//! - Content-addressed run ids and seeded sample series

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod fingerprint;
pub mod forecaster;
pub mod observations;
pub mod sample;
pub mod trend;

pub use config::{ConfigError, ForecastConfig};
pub use domain::{FittedModel, Forecast, RunId, SeasonalPeriod};
pub use error::ForecastError;
pub use factory::{create_forecaster, FactoryError, ModelKind};
pub use fingerprint::ForecastRequest;
pub use forecaster::{forecast, ForecastReport, Forecaster, NaiveDrift, TrendSeasonal};
pub use observations::{load_observations, LoadError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: forecasters and their outputs can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<TrendSeasonal>();
        require_sync::<TrendSeasonal>();
        require_send::<NaiveDrift>();
        require_sync::<NaiveDrift>();
        require_send::<Box<dyn Forecaster>>();
        require_sync::<Box<dyn Forecaster>>();

        require_send::<Forecast>();
        require_sync::<Forecast>();
        require_send::<FittedModel>();
        require_sync::<FittedModel>();
        require_send::<ForecastReport>();
        require_sync::<ForecastReport>();
        require_send::<ForecastConfig>();
        require_sync::<ForecastConfig>();
        require_send::<ForecastRequest>();
        require_sync::<ForecastRequest>();
    }

    #[test]
    fn default_period_matches_config_default() {
        assert_eq!(
            ForecastConfig::default().seasonal_period,
            SeasonalPeriod::DEFAULT.get() as i64
        );
    }
}
