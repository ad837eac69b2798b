//! # BMI Classification
//!
//! WHO adult weight-status categories. Boundaries are applied to the
//! rounded value so the category always agrees with the number shown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound of the normal range
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the overweight range
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese range
pub const OBESE_MIN: f64 = 30.0;

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25.0
    Normal,
    /// 25.0 <= BMI < 30.0
    Overweight,
    /// BMI >= 30.0
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    ///
    /// ```rust
    /// use bmi_core::classification::BmiCategory;
    ///
    /// assert_eq!(BmiCategory::from_bmi(22.9), BmiCategory::Normal);
    /// assert_eq!(BmiCategory::from_bmi(17.6), BmiCategory::Underweight);
    /// ```
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Range label, e.g. "18.5 - 24.9"
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "below 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25.0 - 29.9",
            BmiCategory::Obese => "30.0 and above",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
