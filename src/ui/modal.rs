use std::path::PathBuf;

use iced::widget::{button, center, column, container, horizontal_space, mouse_area, opaque, row, text};
use iced::{Color, Element, Length};

use super::{filled, picture, GRAY, INK};
use crate::state::{GalleryImage, OverlayTarget};
use crate::Message;

const BACKDROP: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.8 };

/// Detail overlay for the selected image.
///
/// Clicks on the backdrop dismiss it. The panel is opaque and reports its own
/// clicks as `Panel`, so they never reach the backdrop.
pub fn view<'a>(image: &'a GalleryImage, full: Option<PathBuf>) -> Element<'a, Message> {
    let close = button(text("X").size(18))
        .on_press(Message::Overlay(OverlayTarget::CloseButton))
        .style(button::secondary);

    let panel = container(
        column![
            row![horizontal_space(), close],
            picture(full, 480.0),
            text(image.title.as_str()).size(24).color(INK),
            text(image.description.as_str()).color(GRAY),
        ]
        .spacing(12),
    )
    .padding(24)
    .max_width(768.0)
    .style(|_theme| filled(Color::WHITE, 8.0));

    let panel = opaque(mouse_area(panel).on_press(Message::Overlay(OverlayTarget::Panel)));

    let backdrop = center(panel)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| filled(BACKDROP, 0.0));

    opaque(mouse_area(backdrop).on_press(Message::Overlay(OverlayTarget::Backdrop)))
}
