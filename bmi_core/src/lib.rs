//! # bmi_core - Body Mass Index Calculation Engine
//!
//! `bmi_core` is the computational heart of Bodymass. It validates a weight
//! and a height, computes BMI, and hands back a result the caller decides how
//! to present. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Every broken input rule is reported, not just the first
//! - **No Presentation**: Front-ends print, alert, or render the message
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi_core::{compute_bmi, BmiInput, CalculatorSettings};
//!
//! assert_eq!(compute_bmi("70", "175").unwrap(), 22.9);
//!
//! let input = BmiInput::new(45.0, 160.0);
//! let result = bmi_core::calculate(&input, &CalculatorSettings::default()).unwrap();
//! assert_eq!(result.message(), "Your BMI is: 17.6");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The BMI calculation
//! - [`classification`] - WHO weight-status categories
//! - [`rounding`] - Display rounding modes
//! - [`settings`] - Calculator options
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod classification;
pub mod errors;
pub mod rounding;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::bmi::{bmi_message, calculate, compute_bmi, BmiInput, BmiResult};
pub use classification::BmiCategory;
pub use errors::{CalcError, CalcResult, InputProblem};
pub use rounding::RoundingMode;
pub use settings::CalculatorSettings;
