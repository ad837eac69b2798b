//! # Rounding Modes
//!
//! BMI values are reported to one decimal place. Two tie-breaking rules are
//! supported and the choice is always explicit in [`CalculatorSettings`].
//!
//! | Mode               | 0.25 → | 0.75 → | -0.25 → |
//! |--------------------|--------|--------|---------|
//! | `HalfAwayFromZero` | 0.3    | 0.8    | -0.3    |
//! | `HalfEven`         | 0.2    | 0.8    | -0.2    |
//!
//! Ties are resolved on the scaled binary value (`value * 10^decimals`), so a
//! decimal literal that is not exactly representable (e.g. `22.85`) rounds by
//! whichever side of the tie its binary value actually lies on.
//!
//! [`CalculatorSettings`]: crate::settings::CalculatorSettings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest magnitude at which every f64 is a whole number
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Tie-breaking rule used when rounding for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round half away from zero (0.25 → 0.3). Matches `f64::round`.
    #[default]
    HalfAwayFromZero,
    /// Round half to even, a.k.a. banker's rounding (0.25 → 0.2)
    HalfEven,
}

impl RoundingMode {
    /// All modes, for pick lists and help text
    pub const ALL: [RoundingMode; 2] = [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven];

    /// Round `value` to `decimals` places using this mode.
    ///
    /// ```rust
    /// use bmi_core::rounding::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::HalfAwayFromZero.apply(22.857, 1), 22.9);
    /// assert_eq!(RoundingMode::HalfEven.apply(0.25, 1), 0.2);
    /// ```
    pub fn apply(self, value: f64, decimals: u32) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scale = 10f64.powi(decimals as i32);
        let scaled = value * scale;
        // Past 2^52 every f64 is already integral; beyond that scaling may overflow
        if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
            return value;
        }
        let rounded = match self {
            RoundingMode::HalfAwayFromZero => scaled.round(),
            RoundingMode::HalfEven => scaled.round_ties_even(),
        };
        rounded / scale
    }

    /// Stable identifier, also accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfAwayFromZero => "half-away-from-zero",
            RoundingMode::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away-from-zero" | "half-up" => Ok(RoundingMode::HalfAwayFromZero),
            "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            other => Err(format!(
                "unknown rounding mode '{other}' (expected 'half-away-from-zero' or 'half-even')"
            )),
        }
    }
}
