//! Message handling for the GUI.
//!
//! Every state change goes through [`App::update`]; calculation is
//! synchronous and delegated to `bmi_core`.

use bmi_core::{calculate, BmiInput};

use crate::{App, Message};

impl App {
    pub(crate) fn update(&mut self, message: Message) {
        match message {
            Message::WeightChanged(value) => {
                self.weight = value;
            }
            Message::HeightChanged(value) => {
                self.height = value;
            }
            Message::RoundingSelected(mode) => {
                self.settings.rounding = mode;
                // Keep a shown result consistent with the selected mode
                if matches!(self.outcome, Some(Ok(_))) {
                    self.run_calculation();
                }
            }
            Message::ShowCategoryToggled(show) => {
                self.settings.include_category = show;
            }
            Message::Calculate => {
                self.run_calculation();
            }
            Message::Clear => {
                self.weight.clear();
                self.height.clear();
                self.outcome = None;
                self.status = "Cleared".to_string();
            }
        }
    }

    fn run_calculation(&mut self) {
        let outcome = BmiInput::parse(&self.weight, &self.height)
            .and_then(|input| calculate(&input, &self.settings));

        self.status = match &outcome {
            Ok(result) => {
                tracing::info!(bmi = result.bmi, "calculated");
                format!("Calculated ({} rounding)", result.rounding)
            }
            Err(e) => format!("Invalid input ({})", e.error_code()),
        };
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::{CalculatorSettings, RoundingMode};

    fn app_with(weight: &str, height: &str) -> App {
        let mut app = App::new();
        app.update(Message::WeightChanged(weight.to_string()));
        app.update(Message::HeightChanged(height.to_string()));
        app
    }

    #[test]
    fn test_new_app_has_no_result() {
        let app = App::new();
        assert!(app.outcome.is_none());
        assert_eq!(app.settings, CalculatorSettings::default());
    }

    #[test]
    fn test_calculate_success() {
        let mut app = app_with("70", "175");
        app.update(Message::Calculate);
        let result = app.outcome.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(result.message(), "Your BMI is: 22.9");
        assert!(app.status.starts_with("Calculated"));
    }

    #[test]
    fn test_calculate_invalid() {
        let mut app = app_with("70", "tall");
        app.update(Message::Calculate);
        let err = app.outcome.as_ref().unwrap().as_ref().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(app.status, "Invalid input (VALIDATION_ERROR)");
    }

    #[test]
    fn test_editing_does_not_recalculate() {
        let mut app = app_with("70", "175");
        app.update(Message::Calculate);
        app.update(Message::WeightChanged("abc".to_string()));
        assert!(matches!(app.outcome, Some(Ok(_))));
    }

    #[test]
    fn test_rounding_change_recalculates() {
        // 36 / 4² = 2.25, an exact tie
        let mut app = app_with("36", "400");
        app.update(Message::Calculate);
        app.update(Message::RoundingSelected(RoundingMode::HalfEven));
        let result = app.outcome.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(result.bmi, 2.2);
        assert_eq!(result.rounding, RoundingMode::HalfEven);
    }

    #[test]
    fn test_clear() {
        let mut app = app_with("70", "175");
        app.update(Message::Calculate);
        app.update(Message::ShowCategoryToggled(true));
        app.update(Message::Clear);
        assert!(app.weight.is_empty());
        assert!(app.height.is_empty());
        assert!(app.outcome.is_none());
        assert!(app.settings.include_category);
    }
}
