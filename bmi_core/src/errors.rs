//! # Error Types
//!
//! Structured error types for bmi_core. A failed calculation reports every
//! input rule that was broken, not only the first, so a caller can flag
//! both form fields at once.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::errors::{CalcError, CalcResult, InputProblem};
//!
//! fn validate_weight(weight_kg: f64) -> CalcResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(CalcError::validation(vec![InputProblem::new(
//!             "weight_kg",
//!             weight_kg.to_string(),
//!             "Weight must be positive",
//!         )]));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_weight(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bmi_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Message shown to a person when their input is rejected.
pub const USER_VALIDATION_MESSAGE: &str =
    "Please enter valid positive numbers for weight and height.";

/// One broken validation rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputProblem {
    /// Field name (`weight_kg` or `height_cm`)
    pub field: String,

    /// The offending value as supplied (may be empty)
    pub value: String,

    /// Why the value was rejected
    pub reason: String,
}

impl InputProblem {
    /// Create a new input problem
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        InputProblem {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Weight or height is missing, non-numeric, non-finite, zero, or negative
    #[error("Validation failed: non-numeric or non-positive input ({})", describe(.problems))]
    Validation { problems: Vec<InputProblem> },
}

fn describe(problems: &[InputProblem]) -> String {
    problems
        .iter()
        .map(|p| format!("{} = '{}': {}", p.field, p.value, p.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalcError {
    /// Create a Validation error
    pub fn validation(problems: Vec<InputProblem>) -> Self {
        CalcError::Validation { problems }
    }

    /// The problems behind this error
    pub fn problems(&self) -> &[InputProblem] {
        match self {
            CalcError::Validation { problems } => problems,
        }
    }

    /// Check whether a specific field was rejected
    pub fn has_field(&self, field: &str) -> bool {
        self.problems().iter().any(|p| p.field == field)
    }

    /// Human-facing message, suitable for an alert or status line
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => USER_VALIDATION_MESSAGE,
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Validation failures never are: the caller must supply new input.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}
