use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::{filled, GRAY, INK, MIST, PINK};
use crate::state::Page;
use crate::Message;

/// Top bar: brand, back/forward controls, address, and the four page links.
///
/// `address` is whatever the history holds, which can be a path outside the
/// page table; it is shown as-is.
pub fn view<'a>(
    current: Page,
    address: &'a str,
    can_go_back: bool,
    can_go_forward: bool,
) -> Element<'a, Message> {
    let badge = container(text("JS").size(16).color(iced::Color::WHITE))
        .center_x(Length::Fixed(40.0))
        .center_y(Length::Fixed(40.0))
        .style(|_theme| filled(PINK, 20.0));

    let brand = row![badge, text("Jasper Smith").color(INK)]
        .spacing(8)
        .align_y(Alignment::Center);

    let history = row![
        button(text("<").size(16))
            .on_press_maybe(can_go_back.then_some(Message::HistoryBack))
            .style(button::text),
        button(text(">").size(16))
            .on_press_maybe(can_go_forward.then_some(Message::HistoryForward))
            .style(button::text),
        container(text(address).size(14).color(GRAY))
            .padding([4, 12])
            .style(|_theme| filled(MIST, 12.0)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let links = Page::ALL.into_iter().fold(row![].spacing(32), |links, page| {
        let color = if page == current { INK } else { GRAY };
        links.push(
            button(text(page.label()).color(color))
                .on_press(Message::Navigate(page))
                .style(button::text),
        )
    });

    container(
        row![brand, history, horizontal_space(), links.align_y(Alignment::Center)]
            .spacing(24)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16, 24])
    .style(|_theme| filled(iced::Color::WHITE, 0.0))
    .into()
}
