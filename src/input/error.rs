//! Validation errors reported back to the user

use super::Field;
use crate::display::format_rupiah;
use serde::Serialize;
use thiserror::Error;

/// Category of a validation failure, for programmatic inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    MissingField,
    NotANumber,
    NonPositive,
    OutOfRange,
    InvalidFrequency,
}

/// Reason raw input was rejected
///
/// None of these are retried automatically; the user has to correct the input
/// and submit again. `Display` gives the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("all fields must be filled")]
    MissingField(Field),

    #[error("input must be a valid number")]
    NotANumber(Field),

    #[error("all values must be greater than 0")]
    NonPositive(Field),

    #[error("{}", out_of_range_message(.field, .max))]
    OutOfRange { field: Field, max: f64 },

    #[error("compounding frequency must be a positive whole number, got '{0}'")]
    InvalidFrequency(String),
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingField(_) => ValidationErrorKind::MissingField,
            ValidationError::NotANumber(_) => ValidationErrorKind::NotANumber,
            ValidationError::NonPositive(_) => ValidationErrorKind::NonPositive,
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
            ValidationError::InvalidFrequency(_) => ValidationErrorKind::InvalidFrequency,
        }
    }

    /// Field that failed, if the error concerns one of the required fields
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NotANumber(field)
            | ValidationError::NonPositive(field)
            | ValidationError::OutOfRange { field, .. } => Some(*field),
            ValidationError::InvalidFrequency(_) => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failure loading `ValidationLimits` from a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("default_frequency must be greater than 0")]
    ZeroDefaultFrequency,
}

fn out_of_range_message(field: &Field, max: &f64) -> String {
    match field {
        Field::Principal => format!("principal too large, maximum {}", format_rupiah(*max)),
        Field::AnnualRatePercent => format!("interest rate too large, maximum {}%", max),
        Field::TimeYears => format!("term too long, maximum {} years", max),
    }
}
