//! Calculate simple or compound interest from the command line
//!
//! Example:
//!   interest compound --principal 1000000 --rate 5 --time 2 --frequency 12

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use interest_calculator::{
    calculate, compare_with_simple, validate_with_limits, CalculationMode, CalculationResult,
    Comparison, RawInput, Summary, ValidationLimits,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "interest", version, about = "Simple and compound interest calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// JSON file overriding the validation limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interest on the initial principal only
    Simple(Amounts),

    /// Interest on principal plus accumulated interest
    Compound {
        #[command(flatten)]
        amounts: Amounts,

        /// Compounding periods per year (defaults to monthly)
        #[arg(long)]
        frequency: Option<String>,
    },
}

#[derive(Debug, Args)]
struct Amounts {
    /// Initial principal
    #[arg(long)]
    principal: String,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: String,

    /// Term in years
    #[arg(long)]
    time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonOutput {
    result: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<Comparison>,
}

impl Command {
    fn into_request(self) -> (CalculationMode, RawInput) {
        match self {
            Command::Simple(amounts) => (CalculationMode::Simple, amounts.into_raw()),
            Command::Compound { amounts, frequency } => {
                let mut raw = amounts.into_raw();
                raw.compounding_frequency_per_year = frequency;
                (CalculationMode::Compound, raw)
            }
        }
    }
}

impl Amounts {
    fn into_raw(self) -> RawInput {
        RawInput::new(self.principal, self.rate, self.time)
    }
}

fn load_limits(path: Option<&Path>) -> Result<ValidationLimits> {
    match path {
        Some(path) => ValidationLimits::from_path(path).context("failed to load validation limits"),
        None => Ok(ValidationLimits::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let limits = load_limits(cli.config.as_deref())?;
    let (mode, raw) = cli.command.into_request();

    let input = validate_with_limits(&raw, &limits)?;
    let result = calculate(mode, &input);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", mode.description());
            println!();
            println!("{}", Summary::from_result(&result));
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                result,
                comparison: compare_with_simple(&result),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
