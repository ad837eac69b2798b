//! # Bodymass GUI Application
//!
//! A single-window form for the BMI calculator. Built with Iced.
//!
//! The result (or the validation message) is shown in the results panel
//! instead of a blocking dialog; the calculation itself lives in `bmi_core`.

mod ui;
mod update;

use iced::widget::{column, container, row};
use iced::{Element, Length};

use bmi_core::{BmiResult, CalcResult, CalculatorSettings, RoundingMode};

/// Application state
#[derive(Debug, Default)]
pub struct App {
    /// Weight field text (kg)
    pub weight: String,
    /// Height field text (cm)
    pub height: String,
    /// Calculator options chosen in the form
    pub settings: CalculatorSettings,
    /// Outcome of the last calculation, if any
    pub outcome: Option<CalcResult<BmiResult>>,
    /// Status bar text
    pub status: String,
}

/// Messages emitted by the UI
#[derive(Debug, Clone)]
pub enum Message {
    WeightChanged(String),
    HeightChanged(String),
    RoundingSelected(RoundingMode),
    ShowCategoryToggled(bool),
    Calculate,
    Clear,
}

impl App {
    pub(crate) fn new() -> Self {
        App {
            status: "Enter weight and height".to_string(),
            ..App::default()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(8)
        .height(Length::Fill);

        let content = column![
            ui::toolbar::view_header(),
            panels,
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn setup_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> iced::Result {
    setup_logging();

    iced::application(App::new, App::update, App::view)
        .title("Bodymass - BMI Calculator")
        .window_size((640.0, 360.0))
        .run()
}
