//! # BMI Calculation
//!
//! Computes body mass index from weight (kg) and height (cm).
//!
//! ## Formula
//!
//! ```text
//! height_m = height_cm / 100
//! BMI      = weight_kg / height_m²
//! ```
//!
//! The raw value is kept on the result; the reported value is rounded to one
//! decimal place with the [`RoundingMode`] from [`CalculatorSettings`].
//!
//! ## Validation
//!
//! Both fields are checked before anything is reported, so a single error
//! lists every bad field. A field is rejected when it is:
//! - missing (empty or whitespace)
//! - not a number
//! - not finite (`inf`, `NaN`)
//! - zero or negative
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::bmi::{calculate, BmiInput};
//! use bmi_core::settings::CalculatorSettings;
//!
//! let input = BmiInput::new(70.0, 175.0);
//! let result = calculate(&input, &CalculatorSettings::default()).unwrap();
//!
//! assert_eq!(result.bmi, 22.9);
//! assert_eq!(result.message(), "Your BMI is: 22.9");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classification::BmiCategory;
use crate::errors::{CalcError, CalcResult, InputProblem};
use crate::rounding::RoundingMode;
use crate::settings::{CalculatorSettings, DISPLAY_DECIMALS};
use crate::units::{Centimeters, Kilograms, Meters};

/// Field name used in errors for the weight input
pub const WEIGHT_FIELD: &str = "weight_kg";
/// Field name used in errors for the height input
pub const HEIGHT_FIELD: &str = "height_cm";

/// Input parameters for a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight_kg": 70.0,
///   "height_cm": 175.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms
    pub weight_kg: Kilograms,

    /// Standing height in centimeters
    pub height_cm: Centimeters,
}

impl BmiInput {
    /// Create an input from raw numbers. Call [`validate`](Self::validate)
    /// (or [`calculate`]) before trusting the values.
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        BmiInput {
            weight_kg: Kilograms(weight_kg),
            height_cm: Centimeters(height_cm),
        }
    }

    /// Parse an input from text fields, as typed into a form or CLI.
    ///
    /// Surrounding whitespace is ignored. Every bad field is reported.
    ///
    /// ```rust
    /// use bmi_core::calculations::bmi::BmiInput;
    ///
    /// let input = BmiInput::parse(" 45 ", "160").unwrap();
    /// assert_eq!(input.weight_kg.value(), 45.0);
    ///
    /// let err = BmiInput::parse("abc", "").unwrap_err();
    /// assert_eq!(err.problems().len(), 2);
    /// ```
    pub fn parse(weight: &str, height: &str) -> CalcResult<Self> {
        let weight_kg = parse_field(WEIGHT_FIELD, "Weight", weight, |v| {
            Kilograms(v).is_positive_finite()
        });
        let height_cm = parse_field(HEIGHT_FIELD, "Height", height, |v| {
            Centimeters(v).is_positive_finite()
        });

        match (weight_kg, height_cm) {
            (Ok(w), Ok(h)) => Ok(BmiInput::new(w, h)),
            (w, h) => {
                let problems: Vec<InputProblem> =
                    [w.err(), h.err()].into_iter().flatten().collect();
                warn!(problems = problems.len(), "rejected BMI input text");
                Err(CalcError::validation(problems))
            }
        }
    }

    /// Validate input parameters, collecting every failure.
    pub fn validate(&self) -> CalcResult<()> {
        let mut problems = Vec::new();

        problems.extend(range_problem(
            WEIGHT_FIELD,
            "Weight",
            self.weight_kg.value(),
            self.weight_kg.is_positive_finite(),
        ));
        problems.extend(range_problem(
            HEIGHT_FIELD,
            "Height",
            self.height_cm.value(),
            self.height_cm.is_positive_finite(),
        ));

        if problems.is_empty() {
            Ok(())
        } else {
            warn!(problems = problems.len(), "rejected BMI input");
            Err(CalcError::validation(problems))
        }
    }

    /// Height converted to meters
    pub fn height_m(&self) -> Meters {
        self.height_cm.into()
    }
}

fn parse_field(
    field: &str,
    label: &str,
    raw: &str,
    accepts: impl Fn(f64) -> bool,
) -> Result<f64, InputProblem> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputProblem::new(field, raw, format!("{label} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputProblem::new(field, raw, format!("{label} must be a number")))?;
    match range_problem(field, label, value, accepts(value)) {
        Some(problem) => Err(problem),
        None => Ok(value),
    }
}

/// Describe why `value` failed the positive-finite check, if it did.
fn range_problem(field: &str, label: &str, value: f64, accepted: bool) -> Option<InputProblem> {
    if accepted {
        return None;
    }
    let reason = if !value.is_finite() {
        format!("{label} must be a finite number")
    } else {
        format!("{label} must be positive")
    };
    Some(InputProblem::new(field, value.to_string(), reason))
}

/// Results from a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bmi": 22.9,
///   "bmi_raw": 22.857142857142858,
///   "height_m": 1.75,
///   "category": "Normal",
///   "rounding": "half-away-from-zero"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,

    /// Unrounded weight / height²
    pub bmi_raw: f64,

    /// Height in meters used for the calculation
    pub height_m: Meters,

    /// WHO category of the rounded value
    pub category: BmiCategory,

    /// Rounding mode that produced `bmi`
    pub rounding: RoundingMode,
}

impl BmiResult {
    /// User-facing message, e.g. `"Your BMI is: 22.9"`
    pub fn message(&self) -> String {
        format!("Your BMI is: {:.1$}", self.bmi, DISPLAY_DECIMALS as usize)
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Calculate BMI.
///
/// # Arguments
///
/// * `input` - Weight and height
/// * `settings` - Rounding and presentation options
///
/// # Returns
///
/// * `Ok(BmiResult)` - Calculation results
/// * `Err(CalcError::Validation)` - If inputs are non-finite or non-positive
pub fn calculate(input: &BmiInput, settings: &CalculatorSettings) -> CalcResult<BmiResult> {
    input.validate()?;

    let height_m = input.height_m();
    let bmi_raw = input.weight_kg.value() / height_m.squared();

    // Positive finite inputs can still overflow (e.g. 1e300 kg at 1e-300 cm)
    if !bmi_raw.is_finite() {
        warn!(bmi_raw, "BMI overflowed for finite inputs");
        return Err(CalcError::validation(vec![InputProblem::new(
            HEIGHT_FIELD,
            input.height_cm.value().to_string(),
            "Height is too small for the given weight",
        )]));
    }

    let bmi = settings.rounding.apply(bmi_raw, DISPLAY_DECIMALS);
    let category = BmiCategory::from_bmi(bmi);

    debug!(
        weight_kg = input.weight_kg.value(),
        height_cm = input.height_cm.value(),
        bmi_raw,
        bmi,
        rounding = %settings.rounding,
        "computed BMI"
    );

    Ok(BmiResult {
        bmi,
        bmi_raw,
        height_m,
        category,
        rounding: settings.rounding,
    })
}

/// Compute the rounded BMI from two text fields with default settings.
///
/// ```rust
/// use bmi_core::calculations::bmi::compute_bmi;
///
/// assert_eq!(compute_bmi("70", "175").unwrap(), 22.9);
/// assert!(compute_bmi("70", "tall").is_err());
/// ```
pub fn compute_bmi(weight: &str, height: &str) -> CalcResult<f64> {
    let input = BmiInput::parse(weight, height)?;
    calculate(&input, &CalculatorSettings::default()).map(|r| r.bmi)
}

/// Compute BMI from text fields and return the user-facing message.
pub fn bmi_message(
    weight: &str,
    height: &str,
    settings: &CalculatorSettings,
) -> CalcResult<String> {
    let input = BmiInput::parse(weight, height)?;
    calculate(&input, settings).map(|r| r.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn defaults() -> CalculatorSettings {
        CalculatorSettings::default()
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(compute_bmi("70", "175").unwrap(), 22.9);
        assert_eq!(compute_bmi("45", "160").unwrap(), 17.6);
    }

    #[test]
    fn test_raw_value() {
        let result = calculate(&BmiInput::new(70.0, 175.0), &defaults()).unwrap();
        // 70 / 1.75² = 22.857...
        assert!((result.bmi_raw - 22.857).abs() < 0.001);
        assert_eq!(result.height_m, Meters(1.75));
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.rounding, RoundingMode::HalfAwayFromZero);
    }

    #[test]
    fn test_message() {
        assert_eq!(bmi_message("70", "175", &defaults()).unwrap(), "Your BMI is: 22.9");
        assert_eq!(bmi_message("45", "160", &defaults()).unwrap(), "Your BMI is: 17.6");
    }

    #[test]
    fn test_message_keeps_trailing_zero() {
        // 64 / 1.6² = 25.0 exactly
        let result = calculate(&BmiInput::new(64.0, 160.0), &defaults()).unwrap();
        assert_eq!(result.message(), "Your BMI is: 25.0");
        assert_eq!(result.to_string(), result.message());
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_negative_weight() {
        let err = compute_bmi("-5", "170").unwrap_err();
        assert!(err.has_field(WEIGHT_FIELD));
        assert!(!err.has_field(HEIGHT_FIELD));
    }

    #[test]
    fn test_non_numeric_height() {
        let err = compute_bmi("70", "tall").unwrap_err();
        assert_eq!(err.problems().len(), 1);
        assert_eq!(err.problems()[0].field, HEIGHT_FIELD);
        assert_eq!(err.problems()[0].value, "tall");
    }

    #[test]
    fn test_zero_values() {
        assert!(compute_bmi("0", "170").is_err());
        assert!(compute_bmi("70", "0").is_err());
        assert!(calculate(&BmiInput::new(0.0, 170.0), &defaults()).is_err());
    }

    #[test]
    fn test_missing_values() {
        let err = compute_bmi("", "   ").unwrap_err();
        assert_eq!(err.problems().len(), 2);
        assert!(err.problems()[0].reason.contains("required"));
    }

    #[test]
    fn test_all_problems_reported() {
        let err = calculate(&BmiInput::new(-1.0, f64::NAN), &defaults()).unwrap_err();
        assert!(err.has_field(WEIGHT_FIELD));
        assert!(err.has_field(HEIGHT_FIELD));
    }

    #[test]
    fn test_non_finite_text_rejected() {
        assert!(compute_bmi("inf", "170").is_err());
        assert!(compute_bmi("70", "NaN").is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        let err = calculate(&BmiInput::new(1e300, 1e-300), &defaults()).unwrap_err();
        assert!(err.has_field(HEIGHT_FIELD));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(compute_bmi(" 70\n", "\t175 ").unwrap(), 22.9);
    }

    #[test]
    fn test_trailing_text_rejected() {
        let err = compute_bmi("70kg", "175").unwrap_err();
        assert_eq!(err.problems()[0].field, WEIGHT_FIELD);
        assert_eq!(err.problems()[0].value, "70kg");
        assert!(compute_bmi("70", "175 cm").is_err());
    }

    #[test]
    fn test_parse_and_range_problems_combined() {
        let err = compute_bmi("abc", "-5").unwrap_err();
        assert_eq!(err.problems()[0].reason, "Weight must be a number");
        assert_eq!(err.problems()[1].reason, "Height must be positive");
    }

    #[test]
    fn test_huge_bmi_stays_finite() {
        let result = calculate(&BmiInput::new(1e308, 100.0), &defaults()).unwrap();
        assert!(result.bmi_raw.is_finite());
        assert!(result.bmi.is_finite());
        assert_eq!(result.bmi, 1e308);
        assert!(!result.message().contains("inf"));
        assert_eq!(result.category, BmiCategory::Obese);
    }

    #[test]
    fn test_idempotent() {
        let first = compute_bmi("70", "175").unwrap();
        for _ in 0..10 {
            assert_eq!(compute_bmi("70", "175").unwrap(), first);
        }
    }

    #[test]
    fn test_half_even_setting() {
        // 36 / 4² = 2.25, an exact binary tie at one decimal
        let input = BmiInput::new(36.0, 400.0);
        let up = calculate(&input, &defaults()).unwrap();
        let even = calculate(&input, &defaults().with_rounding(RoundingMode::HalfEven)).unwrap();
        assert_eq!(up.bmi_raw, 2.25);
        assert_eq!(up.bmi, 2.3);
        assert_eq!(even.bmi, 2.2);
        assert_eq!(even.rounding, RoundingMode::HalfEven);
    }

    #[test]
    fn test_serialization() {
        let input = BmiInput::new(70.0, 175.0);
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"weight_kg":70.0,"height_cm":175.0}"#);
        let roundtrip: BmiInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input, &defaults()).unwrap();
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["bmi"], 22.9);
        assert_eq!(value["category"], "Normal");
        assert_eq!(value["rounding"], "half-away-from-zero");
    }

    proptest! {
        #[test]
        fn positive_inputs_always_succeed(weight in 0.1f64..500.0, height in 30.0f64..300.0) {
            let result = calculate(&BmiInput::new(weight, height), &defaults()).unwrap();
            let height_m = height / 100.0;
            let expected = weight / (height_m * height_m);
            prop_assert!((result.bmi_raw - expected).abs() <= expected * 1e-12);
            prop_assert!((result.bmi - expected).abs() <= 0.05 + 1e-9);
            prop_assert_eq!(result.bmi, (expected * 10.0).round() / 10.0);
        }

        #[test]
        fn text_matches_numeric(weight in 1u32..300, height in 50u32..250) {
            let from_text = compute_bmi(&weight.to_string(), &height.to_string()).unwrap();
            let input = BmiInput::new(weight as f64, height as f64);
            let numeric = calculate(&input, &defaults()).unwrap();
            prop_assert_eq!(from_text, numeric.bmi);
        }

        #[test]
        fn non_positive_weight_fails(weight in -500.0f64..=0.0, height in 30.0f64..300.0) {
            let err = calculate(&BmiInput::new(weight, height), &defaults()).unwrap_err();
            prop_assert!(err.has_field(WEIGHT_FIELD));
        }

        #[test]
        fn non_positive_height_fails(weight in 0.1f64..500.0, height in -300.0f64..=0.0) {
            let err = calculate(&BmiInput::new(weight, height), &defaults()).unwrap_err();
            prop_assert!(err.has_field(HEIGHT_FIELD));
        }
    }
}
