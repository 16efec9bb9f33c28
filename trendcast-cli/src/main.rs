//! trendcast CLI — forecast and sample commands.
//!
//! Commands:
//! - `forecast` — fit a model to observations and print a JSON manifest
//! - `sample` — write a deterministic trend + seasonal sample series as CSV

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use trendcast_core::observations::write_csv;
use trendcast_core::sample::SampleSeries;
use trendcast_core::{
    create_forecaster, load_observations, ForecastConfig, ForecastReport, ForecastRequest,
    ModelKind, RunId, SeasonalPeriod,
};

#[derive(Parser)]
#[command(
    name = "trendcast",
    about = "trendcast CLI — trend + seasonality forecasting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast future values from a series of observations.
    Forecast {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Observation file: CSV with a header row, or a JSON array.
        #[arg(long)]
        input: Option<PathBuf>,

        /// CSV column to read. Defaults to the first column.
        #[arg(long)]
        column: Option<String>,

        /// Inline observations (e.g., --values 1,2,3.5).
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<f64>>,

        /// Number of future points to predict. Defaults to 4.
        #[arg(long, allow_negative_numbers = true)]
        steps: Option<i64>,

        /// Seasonal period in index units. Defaults to 4.
        #[arg(long, allow_negative_numbers = true)]
        period: Option<i64>,

        /// Model: trend_seasonal or naive_drift.
        #[arg(long)]
        model: Option<String>,

        /// Write the manifest here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a deterministic sample series (trend + sine + noise) as CSV.
    Sample {
        /// Number of points.
        #[arg(long, default_value_t = 48)]
        len: usize,

        /// Cycle length of the sine component.
        #[arg(long, default_value_t = 4)]
        period: usize,

        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        slope: f64,

        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        intercept: f64,

        #[arg(long, default_value_t = 5.0)]
        amplitude: f64,

        /// Half-width of the uniform noise band.
        #[arg(long, default_value_t = 1.0)]
        noise: f64,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the CSV here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Everything needed to identify and reproduce one forecast.
#[derive(Serialize)]
struct ForecastManifest {
    run_id: RunId,
    generated_at: DateTime<Utc>,
    model: ModelKind,
    observations: usize,
    steps: usize,
    seasonal_period: SeasonalPeriod,
    report: ForecastReport,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendcast=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast {
            config,
            input,
            column,
            values,
            steps,
            period,
            model,
            output,
        } => run_forecast(
            config, input, column, values, steps, period, model, output,
        ),
        Commands::Sample {
            len,
            period,
            slope,
            intercept,
            amplitude,
            noise,
            seed,
            output,
        } => {
            let Some(period) = SeasonalPeriod::new(period) else {
                bail!("--period must be > 0");
            };
            let series = SampleSeries {
                len,
                slope,
                intercept,
                amplitude,
                period,
                noise,
                seed,
            };
            run_sample(&series, output.as_deref())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_forecast(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    column: Option<String>,
    values: Option<Vec<f64>>,
    steps: Option<i64>,
    period: Option<i64>,
    model: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    if input.is_some() && values.is_some() {
        bail!("--input and --values are mutually exclusive");
    }

    // Flags override the config file, including `--values` over a config `input`.
    let mut config = match &config_path {
        Some(path) => ForecastConfig::from_file(path)?,
        None => ForecastConfig::default(),
    };
    if let Some(steps) = steps {
        config.steps = steps;
    }
    if let Some(period) = period {
        config.seasonal_period = period;
    }
    if let Some(model) = model {
        config.model = model.parse::<ModelKind>()?;
    }
    if input.is_some() {
        config.input = input;
    }
    if column.is_some() {
        config.column = column;
    }

    let (steps, period) = config.validate()?;

    let observations = match (values, &config.input) {
        (Some(values), _) => values,
        (None, Some(path)) => load_observations(path, config.column.as_deref())
            .with_context(|| format!("loading observations from {}", path.display()))?,
        (None, None) => bail!("one of --input, --values, or a config `input` is required"),
    };
    tracing::info!(
        count = observations.len(),
        model = %config.model,
        steps,
        period = period.get(),
        "forecasting"
    );

    let forecaster = create_forecaster(config.model);
    let report = forecaster.forecast(&observations, steps, period)?;

    let request = ForecastRequest::new(config.model, steps, period, &observations);
    let manifest = ForecastManifest {
        run_id: request.run_id(),
        generated_at: Utc::now(),
        model: config.model,
        observations: observations.len(),
        steps,
        seasonal_period: period,
        report,
    };

    let json = serde_json::to_string_pretty(&manifest)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing manifest to {}", path.display()))?;
            tracing::info!(path = %path.display(), run_id = %manifest.run_id, "manifest written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_sample(series: &SampleSeries, output: Option<&Path>) -> Result<()> {
    let values = series.generate()?;
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_csv(file, &values)?;
            tracing::info!(path = %path.display(), count = values.len(), "sample written");
        }
        None => write_csv(std::io::stdout().lock(), &values)?,
    }
    Ok(())
}
