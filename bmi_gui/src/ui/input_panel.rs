//! Input Panel (Left)
//!
//! Weight and height fields plus calculator options. Pressing Enter in
//! either field calculates, same as the button.

use iced::widget::{button, checkbox, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use bmi_core::RoundingMode;

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let rounding = row![
        text("Rounding:").size(11).width(Length::Fixed(80.0)),
        pick_list(&RoundingMode::ALL[..], Some(app.settings.rounding), Message::RoundingSelected)
            .width(Length::Fill)
            .text_size(11),
    ]
    .align_y(Alignment::Center);

    let show_category = checkbox(app.settings.include_category)
        .label("Show weight category")
        .on_toggle(Message::ShowCategoryToggled)
        .text_size(11);

    let actions = row![
        button(text("Calculate").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text("Clear").size(11))
            .on_press(Message::Clear)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4);

    let panel = column![
        text("Measurements").size(14),
        Space::new().height(8),
        labeled_input("Weight (kg):", "70", &app.weight, Message::WeightChanged),
        labeled_input("Height (cm):", "175", &app.height, Message::HeightChanged),
        Space::new().height(8),
        rounding,
        show_category,
        Space::new().height(8),
        actions,
    ]
    .spacing(6)
    .padding(8);

    container(panel)
        .width(Length::FillPortion(50))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
