//! Serializable forecast configuration, loaded from TOML.
//!
//! ```toml
//! model = "trend_seasonal"
//! steps = 8
//! seasonal_period = 4
//! input = "data/sales.csv"
//! column = "units"
//! ```
//!
//! Every key is optional. Integer fields are signed so that invalid negative
//! values surface through [`ForecastConfig::validate`] instead of a parse error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::SeasonalPeriod;
use crate::error::ForecastError;
use crate::factory::ModelKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ForecastError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    pub model: ModelKind,
    pub steps: i64,
    pub seasonal_period: i64,
    /// Observation file (CSV or JSON array).
    pub input: Option<PathBuf>,
    /// CSV column to read. Defaults to the first column.
    pub column: Option<String>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            steps: 4,
            seasonal_period: SeasonalPeriod::DEFAULT.get() as i64,
            input: None,
            column: None,
        }
    }
}

impl ForecastConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check ranges and convert to typed values.
    pub fn validate(&self) -> Result<(usize, SeasonalPeriod), ConfigError> {
        let steps =
            usize::try_from(self.steps).map_err(|_| ForecastError::NegativeSteps(self.steps))?;
        let period = SeasonalPeriod::try_from(self.seasonal_period)?;
        Ok((steps, period))
    }
}
