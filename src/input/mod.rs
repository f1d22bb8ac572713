//! Raw input, validation limits, and the validated input set

mod error;
mod validator;

pub use error::{ConfigError, ValidationError, ValidationErrorKind};
pub use validator::{validate, validate_with_limits};

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ============================================================================
// Default Limits
// ============================================================================
// Upper bounds accepted by the calculator form. Inputs must also be strictly
// positive; zero is never accepted for any field.

/// Largest accepted principal (999 billion)
pub const MAX_PRINCIPAL: f64 = 999_999_999_999.0;

/// Largest accepted annual rate, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Longest accepted term, in years
pub const MAX_TIME_YEARS: f64 = 100.0;

/// Compounding frequency used when none is supplied (monthly)
pub const DEFAULT_FREQUENCY: u32 = 12;

/// Required numeric fields, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Principal,
    AnnualRatePercent,
    TimeYears,
}

impl Field {
    /// Check order used by the validator
    pub const ALL: [Field; 3] = [Field::Principal, Field::AnnualRatePercent, Field::TimeYears];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::AnnualRatePercent => "annual rate",
            Field::TimeYears => "time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input exactly as received from a form, command line, or CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub principal: String,

    #[serde(default, alias = "rate")]
    pub annual_rate_percent: String,

    #[serde(default, alias = "time")]
    pub time_years: String,

    /// Only meaningful for compound interest; empty or absent means the default
    #[serde(default, alias = "frequency")]
    pub compounding_frequency_per_year: Option<String>,
}

impl RawInput {
    pub fn new(
        principal: impl Into<String>,
        annual_rate_percent: impl Into<String>,
        time_years: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            annual_rate_percent: annual_rate_percent.into(),
            time_years: time_years.into(),
            compounding_frequency_per_year: None,
        }
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.compounding_frequency_per_year = Some(frequency.into());
        self
    }

    /// Text supplied for a required field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Principal => &self.principal,
            Field::AnnualRatePercent => &self.annual_rate_percent,
            Field::TimeYears => &self.time_years,
        }
    }
}

/// Range limits applied by the validator
///
/// Deserializes from JSON with any missing key falling back to its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Largest accepted principal
    #[serde(default = "default_max_principal")]
    pub max_principal: f64,

    /// Largest accepted annual rate, in percent (100.0 = 100%)
    #[serde(default = "default_max_rate_percent")]
    pub max_rate_percent: f64,

    /// Longest accepted term, in years
    #[serde(default = "default_max_time_years")]
    pub max_time_years: f64,

    /// Compounding frequency used when the input leaves it blank
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,
}

fn default_max_principal() -> f64 { MAX_PRINCIPAL }
fn default_max_rate_percent() -> f64 { MAX_RATE_PERCENT }
fn default_max_time_years() -> f64 { MAX_TIME_YEARS }
fn default_frequency() -> u32 { DEFAULT_FREQUENCY }

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_principal: MAX_PRINCIPAL,
            max_rate_percent: MAX_RATE_PERCENT,
            max_time_years: MAX_TIME_YEARS,
            default_frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl ValidationLimits {
    /// Parse limits from a JSON document; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let limits: Self = serde_json::from_str(json)?;
        if limits.default_frequency == 0 {
            return Err(ConfigError::ZeroDefaultFrequency);
        }
        Ok(limits)
    }

    /// Load limits from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let limits = Self::from_json(&json)?;
        info!("Loaded validation limits from {}: {:?}", path.display(), limits);
        Ok(limits)
    }

    /// Upper bound for a required field
    pub fn max_for(&self, field: Field) -> f64 {
        match field {
            Field::Principal => self.max_principal,
            Field::AnnualRatePercent => self.max_rate_percent,
            Field::TimeYears => self.max_time_years,
        }
    }
}

/// Normalized input that has passed every range check
///
/// Only the validator can build one, so holding a `ValidatedInput` means every
/// field is in range and the frequency is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedInput {
    principal: f64,
    annual_rate_percent: f64,
    time_years: f64,
    compounding_frequency_per_year: u32,
}

impl ValidatedInput {
    pub(crate) fn new(
        principal: f64,
        annual_rate_percent: f64,
        time_years: f64,
        compounding_frequency_per_year: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            time_years,
            compounding_frequency_per_year,
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn time_years(&self) -> f64 {
        self.time_years
    }

    pub fn compounding_frequency_per_year(&self) -> u32 {
        self.compounding_frequency_per_year
    }
}
