//! Input validation
//!
//! Checks run in a fixed order and stop at the first failure, so the user only
//! ever sees one message at a time:
//! 1. every required field is filled in
//! 2. every required field is a finite number
//! 3. every required field is greater than zero
//! 4. principal, rate, and time are within their maximums
//! 5. the compounding frequency, if given, is a positive whole number

use super::{Field, RawInput, ValidatedInput, ValidationError, ValidationLimits};
use log::debug;

/// Validate raw input against the default limits
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, ValidationError> {
    validate_with_limits(raw, &ValidationLimits::default())
}

/// Validate raw input against custom limits
pub fn validate_with_limits(
    raw: &RawInput,
    limits: &ValidationLimits,
) -> Result<ValidatedInput, ValidationError> {
    let result = run_checks(raw, limits);
    if let Err(err) = &result {
        debug!("rejected input {:?}: {}", raw, err);
    }
    result
}

fn run_checks(raw: &RawInput, limits: &ValidationLimits) -> Result<ValidatedInput, ValidationError> {
    for field in Field::ALL {
        if raw.field(field).trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let mut values = [0.0; 3];
    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        *slot = parse_number(raw.field(field)).ok_or(ValidationError::NotANumber(field))?;
    }

    for (value, field) in values.iter().zip(Field::ALL) {
        if *value <= 0.0 {
            return Err(ValidationError::NonPositive(field));
        }
    }

    for (value, field) in values.iter().zip(Field::ALL) {
        let max = limits.max_for(field);
        if *value > max {
            return Err(ValidationError::OutOfRange { field, max });
        }
    }

    let frequency = parse_frequency(raw.compounding_frequency_per_year.as_deref(), limits)?;

    let [principal, annual_rate_percent, time_years] = values;
    Ok(ValidatedInput::new(principal, annual_rate_percent, time_years, frequency))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_frequency(text: Option<&str>, limits: &ValidationLimits) -> Result<u32, ValidationError> {
    let text = match text.map(str::trim) {
        None | Some("") if limits.default_frequency > 0 => return Ok(limits.default_frequency),
        None | Some("") => {
            return Err(ValidationError::InvalidFrequency(limits.default_frequency.to_string()))
        }
        Some(text) => text,
    };

    match text.parse::<u32>() {
        Ok(frequency) if frequency > 0 => Ok(frequency),
        _ => Err(ValidationError::InvalidFrequency(text.to_string())),
    }
}
