//! Deterministic sample series: linear trend + sine cycle + uniform noise.
//!
//! Seeded from a single `u64`, so the same parameters always produce the same
//! series. Used by benches, tests and the `sample` CLI command.

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::domain::SeasonalPeriod;

/// Largest noise half-width whose sampling range `[-noise, noise]` stays finite.
pub const MAX_NOISE: f64 = f64::MAX / 4.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("noise must be between 0 and f64::MAX / 4, got {0}")]
    NoiseOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    pub len: usize,
    pub slope: f64,
    pub intercept: f64,
    pub amplitude: f64,
    pub period: SeasonalPeriod,
    /// Half-width of the uniform noise band; zero disables noise.
    pub noise: f64,
    pub seed: u64,
}

impl Default for SampleSeries {
    fn default() -> Self {
        Self {
            len: 48,
            slope: 0.5,
            intercept: 100.0,
            amplitude: 5.0,
            period: SeasonalPeriod::DEFAULT,
            noise: 1.0,
            seed: 42,
        }
    }
}

impl SampleSeries {
    /// Reject parameters that would produce non-finite values or an
    /// unsampleable noise range.
    pub fn validate(&self) -> Result<(), SampleError> {
        for (field, value) in [
            ("slope", self.slope),
            ("intercept", self.intercept),
            ("amplitude", self.amplitude),
        ] {
            if !value.is_finite() {
                return Err(SampleError::NonFinite { field, value });
            }
        }
        if !(0.0..=MAX_NOISE).contains(&self.noise) {
            return Err(SampleError::NoiseOutOfRange(self.noise));
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Vec<f64>, SampleError> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let noise = (self.noise > 0.0).then(|| Uniform::new_inclusive(-self.noise, self.noise));
        let period = self.period.get() as f64;
        Ok((0..self.len)
            .map(|i| {
                let t = i as f64;
                let eps = noise.as_ref().map_or(0.0, |dist| rng.sample(dist));
                let seasonal = self.amplitude * (2.0 * PI * t / period).sin();
                self.slope * t + self.intercept + seasonal + eps
            })
            .collect())
    }
}
