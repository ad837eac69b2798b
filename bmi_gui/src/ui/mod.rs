//! UI module for Bodymass GUI
//!
//! # Panel Structure
//! - `toolbar` - Application header
//! - `input_panel` - Left: weight/height fields, rounding, Calculate/Clear
//! - `results_panel` - Right: BMI message and category, or validation errors
//! - `status_bar` - Bottom status messages

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
