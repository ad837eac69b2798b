//! Results Panel (Right Side)
//!
//! Shows the BMI message, the category when enabled, or the validation
//! error with one line per rejected field.

use iced::widget::{column, container, text, Column, Space};
use iced::{Element, Length};

use bmi_core::{BmiResult, CalcError, CalculatorSettings};

use crate::{App, Message};

/// Render the results panel for the last calculation
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &app.outcome {
        None => column![
            text("Result").size(14),
            Space::new().height(8),
            text("Enter your weight and height, then press Calculate.")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        ],
        Some(Ok(result)) => view_result(result, &app.settings),
        Some(Err(error)) => view_error(error),
    };

    container(content.padding(8))
        .width(Length::FillPortion(50))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result<'a>(result: &BmiResult, settings: &CalculatorSettings) -> Column<'a, Message> {
    let mut col = column![
        text("Result").size(14),
        Space::new().height(8),
        text(result.message()).size(20),
    ]
    .spacing(4);

    if settings.include_category {
        col = col.push(
            text(format!("{} ({})", result.category, result.category.range_label())).size(12),
        );
    }

    col.push(
        text(format!("Unrounded: {:.3}", result.bmi_raw))
            .size(10)
            .color([0.5, 0.5, 0.5]),
    )
}

fn view_error<'a>(error: &CalcError) -> Column<'a, Message> {
    let mut col = column![
        text("Error").size(14),
        Space::new().height(8),
        text(error.user_message()).size(12).color([0.8, 0.2, 0.2]),
    ]
    .spacing(4);

    for problem in error.problems() {
        col = col.push(
            text(format!("{}: {}", problem.field, problem.reason))
                .size(11)
                .color([0.8, 0.2, 0.2]),
        );
    }
    col
}
