//! Run a batch of interest scenarios from CSV
//!
//! Reads rows of `mode,principal,rate,time,frequency` from stdin and writes one
//! result row per scenario to stdout. Rows that fail validation are reported in
//! the `error` column and do not stop the batch.

use anyhow::{Context, Result};
use clap::Parser;
use interest_calculator::{
    calculate, compare_with_simple, validate_with_limits, CalculationMode, RawInput,
    ValidationLimits,
};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "interest_batch", version, about = "Calculate interest for CSV scenarios on stdin")]
struct Cli {
    /// JSON file overriding the validation limits
    #[arg(long)]
    config: Option<PathBuf>,
}

/// One scenario as read from the input CSV
#[derive(Debug, Clone, Deserialize)]
struct ScenarioRow {
    mode: String,
    #[serde(default)]
    principal: String,
    #[serde(default)]
    rate: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    frequency: Option<String>,
}

/// One line of output; calculation columns are empty when `error` is set
#[derive(Debug, Clone, Default, Serialize)]
struct OutputRow {
    row: usize,
    mode: String,
    principal: Option<f64>,
    interest: Option<f64>,
    total: Option<f64>,
    simple_total: Option<f64>,
    difference: Option<f64>,
    error: Option<String>,
}

fn evaluate(row: usize, scenario: &ScenarioRow, limits: &ValidationLimits) -> OutputRow {
    let mode = match scenario.mode.parse::<CalculationMode>() {
        Ok(mode) => mode,
        Err(message) => {
            return OutputRow {
                row,
                mode: scenario.mode.clone(),
                error: Some(message),
                ..Default::default()
            }
        }
    };

    let mut raw = RawInput::new(
        scenario.principal.as_str(),
        scenario.rate.as_str(),
        scenario.time.as_str(),
    );
    raw.compounding_frequency_per_year = scenario.frequency.clone();

    match validate_with_limits(&raw, limits) {
        Ok(input) => {
            let result = calculate(mode, &input);
            let comparison = compare_with_simple(&result);
            OutputRow {
                row,
                mode: mode.to_string(),
                principal: Some(result.principal()),
                interest: Some(result.interest()),
                total: Some(result.total()),
                simple_total: comparison.map(|c| c.simple_total),
                difference: comparison.map(|c| c.difference),
                error: None,
            }
        }
        Err(err) => OutputRow {
            row,
            mode: mode.to_string(),
            error: Some(err.message()),
            ..Default::default()
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let limits = match &cli.config {
        Some(path) => ValidationLimits::from_path(path).context("failed to load validation limits")?,
        None => ValidationLimits::default(),
    };

    let start = Instant::now();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(io::stdin().lock());

    let scenarios = reader
        .deserialize::<ScenarioRow>()
        .enumerate()
        .map(|(i, record)| record.with_context(|| format!("malformed CSV at row {}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let calc_start = Instant::now();
    let rows: Vec<OutputRow> = scenarios
        .par_iter()
        .enumerate()
        .map(|(i, scenario)| evaluate(i + 1, scenario, &limits))
        .collect();
    info!("Calculations complete in {:?}", calc_start.elapsed());

    let rejected = rows.iter().filter(|r| r.error.is_some()).count();
    if rejected > 0 {
        warn!("{} of {} scenarios failed validation", rejected, rows.len());
    }

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for row in &rows {
        writer.serialize(row).context("failed to write result row")?;
    }
    writer.flush().context("failed to flush output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(mode: &str, principal: &str, rate: &str, time: &str, frequency: Option<&str>) -> ScenarioRow {
        ScenarioRow {
            mode: mode.to_string(),
            principal: principal.to_string(),
            rate: rate.to_string(),
            time: time.to_string(),
            frequency: frequency.map(str::to_string),
        }
    }

    #[test]
    fn test_evaluate_compound_row() {
        let row = evaluate(1, &scenario("compound", "1000000", "5", "2", Some("12")), &ValidationLimits::default());

        assert_eq!(row.error, None);
        assert_eq!(row.mode, "compound");
        assert!((row.total.unwrap() - 1_104_941.34).abs() < 0.01);
        assert!((row.difference.unwrap() - 4_941.34).abs() < 0.01);
    }

    #[test]
    fn test_evaluate_reports_errors_per_row() {
        let limits = ValidationLimits::default();

        let row = evaluate(2, &scenario("simple", "abc", "5", "2", None), &limits);
        assert_eq!(row.error.as_deref(), Some("input must be a valid number"));
        assert_eq!(row.total, None);

        let row = evaluate(3, &scenario("weekly", "1000", "5", "2", None), &limits);
        assert!(row.error.unwrap().contains("unknown calculation mode"));
    }

    #[test]
    fn test_reads_csv_with_blank_frequency() {
        let data = "mode,principal,rate,time,frequency\nsimple,1000000,5,2,\ncompound, 1000 ,10,3,1\n";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());
        let rows: Vec<ScenarioRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        let limits = ValidationLimits::default();
        let simple = evaluate(1, &rows[0], &limits);
        assert!((simple.total.unwrap() - 1_100_000.0).abs() < 1e-6);
        assert_eq!(simple.simple_total, None);

        let compound = evaluate(2, &rows[1], &limits);
        assert!((compound.total.unwrap() - 1331.0).abs() < 1e-9);
    }
}
