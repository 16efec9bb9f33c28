//! Run fingerprinting — deterministic identification of forecast requests.
//!
//! A request is identified by its model, horizon, period and the content hash
//! of its observations. Two identical requests always produce the same
//! [`RunId`], so results can be cached or compared across runs.

use serde::{Deserialize, Serialize};

use crate::domain::{DatasetHash, RunId, SeasonalPeriod};
use crate::factory::ModelKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub model: ModelKind,
    pub steps: usize,
    pub seasonal_period: SeasonalPeriod,
    pub dataset_hash: DatasetHash,
}

impl ForecastRequest {
    pub fn new(
        model: ModelKind,
        steps: usize,
        seasonal_period: SeasonalPeriod,
        observations: &[f64],
    ) -> Self {
        Self {
            model,
            steps,
            seasonal_period,
            dataset_hash: DatasetHash::of(observations),
        }
    }

    /// BLAKE3 over a canonical JSON rendering of the request.
    pub fn run_id(&self) -> RunId {
        use serde_json::json;

        // json! objects are BTreeMap-backed, so key order is fixed
        let canonical = json!({
            "model": self.model.as_str(),
            "steps": self.steps,
            "seasonal_period": self.seasonal_period.get(),
            "dataset_hash": &self.dataset_hash.0,
        });
        let hash = blake3::hash(canonical.to_string().as_bytes());
        RunId::from_hash(&hash.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model: ModelKind, steps: usize, obs: &[f64]) -> ForecastRequest {
        ForecastRequest::new(model, steps, SeasonalPeriod::DEFAULT, obs)
    }

    #[test]
    fn run_id_deterministic() {
        let a = request(ModelKind::TrendSeasonal, 4, &[1.0, 2.0, 3.0]);
        let b = request(ModelKind::TrendSeasonal, 4, &[1.0, 2.0, 3.0]);
        assert_eq!(a.run_id(), b.run_id());
        assert_eq!(a.run_id().0.len(), 64);
    }

    #[test]
    fn run_id_changes_with_inputs() {
        let base = request(ModelKind::TrendSeasonal, 4, &[1.0, 2.0, 3.0]);
        assert_ne!(
            base.run_id(),
            request(ModelKind::NaiveDrift, 4, &[1.0, 2.0, 3.0]).run_id()
        );
        assert_ne!(
            base.run_id(),
            request(ModelKind::TrendSeasonal, 5, &[1.0, 2.0, 3.0]).run_id()
        );
        assert_ne!(
            base.run_id(),
            request(ModelKind::TrendSeasonal, 4, &[1.0, 2.0, 3.5]).run_id()
        );
    }
}
