//! # Calculator Settings
//!
//! Options that change how a result is rounded and presented. Settings are
//! plain data passed explicitly to [`calculate`](crate::calculations::bmi::calculate);
//! nothing is read from files or ambient state.

use serde::{Deserialize, Serialize};

use crate::rounding::RoundingMode;

/// Number of decimal places a BMI is reported to
pub const DISPLAY_DECIMALS: u32 = 1;

/// Calculation and presentation options.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rounding": "half-away-from-zero",
///   "include_category": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Tie-breaking rule for the displayed value
    pub rounding: RoundingMode,

    /// Whether front-ends should print the WHO category next to the message
    pub include_category: bool,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            rounding: RoundingMode::HalfAwayFromZero,
            include_category: false,
        }
    }
}

impl CalculatorSettings {
    /// Builder-style setter for the rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder-style setter for category display
    pub fn with_category(mut self, include_category: bool) -> Self {
        self.include_category = include_category;
        self
    }
}
