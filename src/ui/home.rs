use std::path::PathBuf;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{filled, picture, CYAN, CYAN_DARK, INK, PINK};
use crate::state::Page;
use crate::Message;

/// Asset shown in the profile card
pub const PROFILE_IMAGE: &str = "/jasper-portfolio/assets/jaspy.png";

const INTRO: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam.";

/// Landing page. The "My Portfolio" button leads to the color gallery.
pub fn view<'a>(profile: Option<PathBuf>) -> Element<'a, Message> {
    let greeting = column![
        text("Hello, I'm Jasper").size(96).color(INK),
        row![Space::with_width(50.0), text("Smith").size(96).color(INK)],
    ];

    let tag = container(text("Illustrator").color(iced::Color::WHITE))
        .padding([8, 40])
        .style(|_theme| filled(INK, 999.0));

    let card = container(
        column![
            container(Space::with_height(40.0))
                .width(Length::Fill)
                .style(|_theme| filled(PINK, 0.0)),
            picture(profile, 600.0),
            tag,
        ]
        .align_x(Alignment::End),
    )
    .width(Length::Fill)
    .style(|_theme| filled(iced::Color::WHITE, 8.0));

    let portfolio_button = button(text("My Portfolio ->").color(INK))
        .padding([16, 40])
        .on_press(Message::Navigate(Page::ColorGallery))
        .style(|theme, status| {
            let base = button::primary(theme, status);
            button::Style {
                background: Some(PINK.into()),
                text_color: INK,
                ..base
            }
        });

    let intro = container(
        column![
            text(INTRO).size(18).color(CYAN_DARK).width(Length::Fixed(448.0)),
            portfolio_button,
        ]
        .spacing(32),
    )
    .width(Length::Fill)
    .padding([64, 24])
    .style(|_theme| filled(CYAN, 48.0));

    column![
        row![greeting.width(Length::FillPortion(1)), card.width(Length::FillPortion(1))]
            .spacing(48)
            .padding([48, 24]),
        intro,
    ]
    .into()
}
