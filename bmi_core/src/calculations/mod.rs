//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body mass index from weight and height

pub mod bmi;

// Re-export commonly used types
pub use bmi::{bmi_message, calculate, compute_bmi, BmiInput, BmiResult};
