//! # Unit Types
//!
//! Type-safe wrappers for body measurement units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Metric Units Only
//!
//! Bodymass accepts exactly two input units:
//! - Mass: kilograms (kg)
//! - Length: centimeters (cm), converted internally to meters (m)
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::units::{Centimeters, Meters};
//!
//! let height = Centimeters(175.0);
//! let height_m: Meters = height.into();
//! assert_eq!(height_m.0, 1.75);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl Meters {
    /// Square of the length (m²)
    pub fn squared(self) -> f64 {
        self.0 * self.0
    }
}

// ============================================================================
// Shared Accessors
// ============================================================================

macro_rules! impl_measure {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// True when the value is a finite number greater than zero
            pub fn is_positive_finite(self) -> bool {
                self.0.is_finite() && self.0 > 0.0
            }
        }
    };
}

impl_measure!(Kilograms);
impl_measure!(Centimeters);
