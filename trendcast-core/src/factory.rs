//! Factory — converts a model name or [`ModelKind`] into a runtime forecaster.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::forecaster::{Forecaster, NaiveDrift, TrendSeasonal};

/// Errors that can occur during forecaster construction.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown model type: {0} (expected trend_seasonal or naive_drift)")]
    UnknownModel(String),
}

/// Available forecasting models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    #[serde(alias = "trend-seasonal")]
    TrendSeasonal,
    #[serde(alias = "naive-drift")]
    NaiveDrift,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TrendSeasonal => TrendSeasonal::NAME,
            Self::NaiveDrift => NaiveDrift::NAME,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = FactoryError;

    /// Accepts snake_case or kebab-case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "trend_seasonal" => Ok(Self::TrendSeasonal),
            "naive_drift" => Ok(Self::NaiveDrift),
            _ => Err(FactoryError::UnknownModel(s.to_string())),
        }
    }
}

/// Create a forecaster for `kind`.
pub fn create_forecaster(kind: ModelKind) -> Box<dyn Forecaster> {
    match kind {
        ModelKind::TrendSeasonal => Box::new(TrendSeasonal),
        ModelKind::NaiveDrift => Box::new(NaiveDrift),
    }
}
