//! Domain types for trendcast

pub mod forecast;
pub mod ids;
pub mod period;

pub use forecast::{FittedModel, Forecast};
pub use ids::{DatasetHash, RunId};
pub use period::SeasonalPeriod;
