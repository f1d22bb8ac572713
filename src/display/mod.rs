//! Presentation helpers: currency formatting, formula text, and result summaries

mod currency;
mod summary;

pub use currency::format_rupiah;
pub use summary::Summary;

use crate::calculator::CalculationMode;

impl CalculationMode {
    /// Formula shown alongside a result
    pub fn formula(&self) -> &'static str {
        match self {
            CalculationMode::Simple => "Interest = Principal × Rate × Time",
            CalculationMode::Compound => {
                "Total = Principal × (1 + Rate / Frequency)^(Frequency × Time)"
            }
        }
    }

    /// Short explanation of the interest model
    pub fn description(&self) -> &'static str {
        match self {
            CalculationMode::Simple => {
                "Interest is earned on the initial principal only. Suited to short-term \
                 investments or simple loans."
            }
            CalculationMode::Compound => {
                "Interest is earned on the principal plus previously earned interest. Suited \
                 to long-term investments with exponential growth."
            }
        }
    }
}
