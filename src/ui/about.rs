use std::path::PathBuf;

use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length};

use super::{filled, picture, CYAN, CYAN_DARK, GRAY, GREEN, INK, PINK};
use crate::Message;

/// Illustration next to the biography
pub const PORTRAIT_IMAGE: &str = "/jasper-portfolio/assets/meow.png";

const BIO: &str = "I'm Jasper Smith, a Visual Artist and Illustrator based in California. \
I specialize in creating vibrant digital illustrations and character designs. \
I'm passionate about bringing stories to life through art and am always \
eager to take on new creative challenges.";

const SPECIALIZATIONS: [&str; 4] = ["Digital Art", "Illustrations", "Painting", "Sketching"];
const LANGUAGES: [&str; 2] = ["English (Native)", "Spanish (Conversational)"];

pub fn view<'a>(portrait: Option<PathBuf>) -> Element<'a, Message> {
    let about = container(
        column![
            text("ABOUT ME").size(30).color(CYAN_DARK),
            text(BIO).color(CYAN_DARK),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(|_theme| filled(CYAN, 8.0));

    let education = column![
        heading("EDUCATION"),
        row![marker(), text("Freshman at Capuchino High School").color(INK)].spacing(12),
    ]
    .spacing(16);

    let experience = column![
        heading("EXPERIENCE"),
        column![
            text("2019-Present: Fine arts and Illustration").color(INK),
            text("Creating custom illustrations and character designs").color(GRAY),
        ]
        .spacing(4)
        .padding([0, 16]),
    ]
    .spacing(16);

    let skills = row![
        listing("SPECIALIZATIONS", &SPECIALIZATIONS).width(Length::FillPortion(1)),
        listing("LANGUAGE", &LANGUAGES).width(Length::FillPortion(1)),
    ]
    .spacing(32);

    row![
        column![picture(portrait, 560.0)].width(Length::FillPortion(1)),
        column![about, education, experience, skills]
            .spacing(48)
            .width(Length::FillPortion(1)),
    ]
    .spacing(64)
    .padding([48, 24])
    .into()
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(24).color(PINK).into()
}

/// Small green square used as a bullet
fn marker<'a>() -> Element<'a, Message> {
    container(text(""))
        .width(Length::Fixed(12.0))
        .height(Length::Fixed(12.0))
        .style(|_theme| filled(GREEN, 0.0))
        .into()
}

fn listing<'a>(label: &'a str, items: &'a [&'a str]) -> Column<'a, Message> {
    items
        .iter()
        .fold(column![heading(label)].spacing(8), |list, item| {
            list.push(text(*item).color(GRAY))
        })
}
