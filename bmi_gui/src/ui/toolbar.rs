//! Application header

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Bodymass").size(28),
        Space::new().width(Length::Fill),
        text("BMI Calculator").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}
