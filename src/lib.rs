//! Interest Calculator - validation and calculation engine for simple and compound interest
//!
//! This library provides:
//! - Validation of raw textual input into a normalized, range-checked input set
//! - Simple and compound interest calculations
//! - Comparison of a compound result against the equivalent simple-interest total
//! - Rupiah currency formatting for presentation layers

pub mod input;
pub mod calculator;
pub mod display;

// Re-export commonly used types
pub use input::{
    validate, validate_with_limits, ConfigError, Field, RawInput, ValidatedInput, ValidationError,
    ValidationErrorKind, ValidationLimits,
};
pub use calculator::{
    calculate, compare_with_simple, compound_interest, simple_interest, CalculationMode,
    CalculationResult, Comparison,
};
pub use display::{format_rupiah, Summary};
