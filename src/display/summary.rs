//! Rendered view of a calculation result

use super::format_rupiah;
use crate::calculator::{compare_with_simple, CalculationMode, CalculationResult};
use std::fmt;

/// Formatted figures for one result, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub mode: CalculationMode,
    pub principal: String,
    pub interest: String,
    pub total: String,
    pub formula: &'static str,
    /// Simple-interest total for the same inputs (compound results only)
    pub simple_total: Option<String>,
    /// Extra earned by compounding (compound results only)
    pub difference: Option<String>,
}

impl Summary {
    pub fn from_result(result: &CalculationResult) -> Self {
        let mode = result.mode();
        let comparison = compare_with_simple(result);

        Self {
            mode,
            principal: format_rupiah(result.principal()),
            interest: format_rupiah(result.interest()),
            total: format_rupiah(result.total()),
            formula: mode.formula(),
            simple_total: comparison.map(|c| format_rupiah(c.simple_total)),
            difference: comparison.map(|c| format_rupiah(c.difference)),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {}", "Principal:", self.principal)?;
        writeln!(f, "{:<18} {}", "Interest:", self.interest)?;
        writeln!(f, "{:<18} {}", "Total:", self.total)?;
        write!(f, "{:<18} {}", "Formula:", self.formula)?;
        if let (Some(simple_total), Some(difference)) = (&self.simple_total, &self.difference) {
            writeln!(f)?;
            writeln!(f, "{:<18} {}", "Simple interest:", simple_total)?;
            write!(f, "{:<18} {}", "Compounding gain:", difference)?;
        }
        Ok(())
    }
}
