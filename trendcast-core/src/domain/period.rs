//! Seasonal period: the assumed cycle length, in index units, of the sine
//! adjustment. Always strictly positive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::ForecastError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SeasonalPeriod(NonZeroUsize);

impl SeasonalPeriod {
    /// Quarterly cycles, the default when no period is given.
    pub const DEFAULT: SeasonalPeriod = match NonZeroUsize::new(4) {
        Some(p) => SeasonalPeriod(p),
        None => unreachable!(),
    };

    /// Returns `None` for a zero period.
    pub fn new(period: usize) -> Option<Self> {
        NonZeroUsize::new(period).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for SeasonalPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for SeasonalPeriod {
    type Error = ForecastError;

    fn try_from(period: i64) -> Result<Self, Self::Error> {
        usize::try_from(period)
            .ok()
            .and_then(Self::new)
            .ok_or(ForecastError::NonPositivePeriod(period))
    }
}

impl From<SeasonalPeriod> for i64 {
    fn from(period: SeasonalPeriod) -> Self {
        period.get() as i64
    }
}

impl fmt::Display for SeasonalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
