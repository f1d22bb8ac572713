//! Calculation result types

use super::CalculationMode;
use serde::Serialize;

/// Outcome of a single interest calculation
///
/// `total` is always `principal + interest`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalculationResult {
    Simple {
        principal: f64,
        interest: f64,
        total: f64,
        rate_percent: f64,
        time_years: f64,
    },
    Compound {
        principal: f64,
        interest: f64,
        total: f64,
        rate_percent: f64,
        time_years: f64,
        compounding_frequency_per_year: u32,
    },
}

impl CalculationResult {
    pub fn mode(&self) -> CalculationMode {
        match self {
            CalculationResult::Simple { .. } => CalculationMode::Simple,
            CalculationResult::Compound { .. } => CalculationMode::Compound,
        }
    }

    pub fn principal(&self) -> f64 {
        match self {
            CalculationResult::Simple { principal, .. }
            | CalculationResult::Compound { principal, .. } => *principal,
        }
    }

    pub fn interest(&self) -> f64 {
        match self {
            CalculationResult::Simple { interest, .. }
            | CalculationResult::Compound { interest, .. } => *interest,
        }
    }

    pub fn total(&self) -> f64 {
        match self {
            CalculationResult::Simple { total, .. }
            | CalculationResult::Compound { total, .. } => *total,
        }
    }

    pub fn rate_percent(&self) -> f64 {
        match self {
            CalculationResult::Simple { rate_percent, .. }
            | CalculationResult::Compound { rate_percent, .. } => *rate_percent,
        }
    }

    pub fn time_years(&self) -> f64 {
        match self {
            CalculationResult::Simple { time_years, .. }
            | CalculationResult::Compound { time_years, .. } => *time_years,
        }
    }

    /// Compounding frequency, only present for compound results
    pub fn compounding_frequency_per_year(&self) -> Option<u32> {
        match self {
            CalculationResult::Simple { .. } => None,
            CalculationResult::Compound { compounding_frequency_per_year, .. } => {
                Some(*compounding_frequency_per_year)
            }
        }
    }
}

/// How much compounding adds over simple interest for the same inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Total the same principal, rate, and term would reach with simple interest
    pub simple_total: f64,
    /// Compound total minus `simple_total`
    pub difference: f64,
}
