//! Simple and compound interest calculations
//!
//! Every function here is pure: it only reads its arguments, so calls can be
//! made from any number of threads at once.

mod formulas;
mod result;

pub use formulas::{compound_interest, simple_interest};
pub use result::{CalculationResult, Comparison};

use crate::input::ValidatedInput;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interest model to calculate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    #[default]
    Simple,
    Compound,
}

impl CalculationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::Simple => "simple",
            CalculationMode::Compound => "compound",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(CalculationMode::Simple),
            "compound" => Ok(CalculationMode::Compound),
            other => Err(format!("unknown calculation mode '{}', expected simple or compound", other)),
        }
    }
}

/// Run the calculation selected by `mode`
///
/// The frequency carried by `input` is ignored for simple interest.
pub fn calculate(mode: CalculationMode, input: &ValidatedInput) -> CalculationResult {
    let result = match mode {
        CalculationMode::Simple => simple_interest(
            input.principal(),
            input.annual_rate_percent(),
            input.time_years(),
        ),
        CalculationMode::Compound => compound_interest(
            input.principal(),
            input.annual_rate_percent(),
            input.time_years(),
            input.compounding_frequency_per_year(),
        ),
    };
    debug!("{} calculation: {:?}", mode, result);
    result
}

/// Compare a compound result with the simple-interest total for the same
/// principal, rate, and term. Returns `None` for simple results.
pub fn compare_with_simple(result: &CalculationResult) -> Option<Comparison> {
    match result {
        CalculationResult::Simple { .. } => None,
        CalculationResult::Compound { principal, rate_percent, time_years, total, .. } => {
            let simple_total = simple_interest(*principal, *rate_percent, *time_years).total();
            Some(Comparison {
                simple_total,
                difference: total - simple_total,
            })
        }
    }
}
