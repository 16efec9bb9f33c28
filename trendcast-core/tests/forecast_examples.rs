//! Worked examples for the public `forecast` entry point.

use std::f64::consts::PI;

use trendcast_core::{forecast, Forecast, ForecastError};

fn expected_at(f: &Forecast, i: usize) -> f64 {
    let period = f.model.seasonal_period.get() as f64;
    f.model.slope * i as f64
        + f.model.intercept
        + f.model.seasonal_amplitude * (2.0 * PI * i as f64 / period).sin()
}

#[test]
fn perfectly_linear_series() {
    let obs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    for period in [1, 3, 4, 12] {
        let f = forecast(&obs, 5, period).unwrap();
        assert!((f.model.slope - 1.0).abs() < 1e-9);
        assert!(f.model.intercept.abs() < 1e-9);
        assert!(f.model.seasonal_amplitude.abs() < 1e-9);
        // No seasonality left: the forecast continues the line.
        for (k, v) in f.forecast.iter().enumerate() {
            assert!((v - (6 + k) as f64).abs() < 1e-9);
        }
    }
}

#[test]
fn alternating_series_with_period_two() {
    let obs = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let f = forecast(&obs, 4, 2).unwrap();

    assert_eq!(f.forecast.len(), 4);
    assert_eq!(f.model.seasonal_period.get(), 2);
    assert!(f.model.slope.abs() < 0.1);
    assert!((f.model.intercept - 1.5).abs() < 0.2);
    assert!((f.model.seasonal_amplitude - 0.5).abs() < 0.1);

    // sin(π·i) vanishes at integer i, so the forecast sits on the trend line
    // and stays inside the observed band.
    for (k, v) in f.forecast.iter().enumerate() {
        let i = obs.len() + k;
        assert!((v - (f.model.slope * i as f64 + f.model.intercept)).abs() < 1e-9);
        assert!((1.0..=2.0).contains(v));
    }
}

#[test]
fn forecast_matches_closed_form() {
    let obs = [12.0, 15.0, 11.0, 9.0, 14.0, 18.0, 13.0, 11.0, 17.0];
    let f = forecast(&obs, 7, 4).unwrap();
    for (k, v) in f.forecast.iter().enumerate() {
        assert!((v - expected_at(&f, obs.len() + k)).abs() < 1e-9);
    }
}

#[test]
fn zero_steps_is_empty() {
    let f = forecast(&[1.0, 2.0, 4.0], 0, 4).unwrap();
    assert!(f.forecast.is_empty());
}

#[test]
fn too_few_observations() {
    assert_eq!(forecast(&[], 3, 4), Err(ForecastError::TooFewObservations(0)));
    let err = forecast(&[7.0], 3, 4).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn invalid_period_and_steps() {
    assert!(forecast(&[1.0, 2.0], 3, 0).unwrap_err().is_invalid_input());
    assert!(forecast(&[1.0, 2.0], 3, -2).unwrap_err().is_invalid_input());
    assert!(forecast(&[1.0, 2.0], -1, 4).unwrap_err().is_invalid_input());
}

#[test]
fn repeated_calls_do_not_share_state() {
    let a = forecast(&[1.0, 2.0, 3.0], 2, 4).unwrap();
    let _ = forecast(&[10.0, -4.0, 8.0, 0.0], 6, 3).unwrap();
    let again = forecast(&[1.0, 2.0, 3.0], 2, 4).unwrap();
    assert_eq!(a, again);
}

#[test]
fn json_shape_matches_result_map() {
    let f = forecast(&[0.0, 1.0, 2.0, 3.0], 2, 4).unwrap();
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["forecast"].as_array().unwrap().len(), 2);
    assert_eq!(json["seasonal_period"], 4);
    assert!(json["slope"].is_f64());
    assert!(json["intercept"].is_f64());
    assert!(json["seasonal_amplitude"].is_f64());
}

#[test]
fn huge_alternating_values_fail_instead_of_returning_nan() {
    let err = forecast(&[1e308, -1e308, 1e308, -1e308], 2, 4).unwrap_err();
    assert!(matches!(err, ForecastError::NumericOverflow { .. }));
    assert!(err.is_invalid_input());
}
