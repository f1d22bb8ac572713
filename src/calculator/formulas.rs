//! Interest formulas
//!
//! Rates are given in percent (5.0 = 5%) and converted to decimals here.
//! Inputs are expected to have passed validation: positive, finite, and a
//! non-zero compounding frequency.

use super::CalculationResult;

/// Simple interest: I = P × r × t
pub fn simple_interest(principal: f64, rate_percent: f64, time_years: f64) -> CalculationResult {
    let rate = rate_percent / 100.0;
    let interest = principal * rate * time_years;
    let total = principal + interest;

    CalculationResult::Simple {
        principal,
        interest,
        total,
        rate_percent,
        time_years,
    }
}

/// Compound interest: A = P × (1 + r/n)^(n × t)
///
/// The exponent is real-valued, so fractional terms (e.g. 1.5 years) compound
/// for a fractional number of periods rather than being truncated.
pub fn compound_interest(
    principal: f64,
    rate_percent: f64,
    time_years: f64,
    frequency: u32,
) -> CalculationResult {
    debug_assert!(frequency > 0, "compounding frequency must be validated before use");

    let rate = rate_percent / 100.0;
    let periods_per_year = frequency as f64;
    let total = principal * (1.0 + rate / periods_per_year).powf(periods_per_year * time_years);
    let interest = total - principal;

    CalculationResult::Compound {
        principal,
        interest,
        total,
        rate_percent,
        time_years,
        compounding_frequency_per_year: frequency,
    }
}
