/// View layer
///
/// Every view is a free function of the state it is handed and returns an
/// `Element`. None of them touch the router or the selection directly; user
/// input comes back as `Message`s.

pub mod about;
pub mod gallery;
pub mod home;
pub mod modal;
pub mod nav;

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{container, image, text};
use iced::{Background, Border, Color, Element, Length};

use crate::state::{Gallery, Page, Selection};
use crate::Message;

pub const PINK: Color = Color { r: 0.957, g: 0.447, b: 0.714, a: 1.0 };
pub const CYAN: Color = Color { r: 0.404, g: 0.910, b: 0.976, a: 1.0 };
pub const CYAN_DARK: Color = Color { r: 0.031, g: 0.200, b: 0.267, a: 1.0 };
pub const GREEN: Color = Color { r: 0.290, g: 0.871, b: 0.502, a: 1.0 };
pub const GRAY: Color = Color { r: 0.294, g: 0.333, b: 0.388, a: 1.0 };
pub const MIST: Color = Color { r: 0.953, g: 0.957, b: 0.965, a: 1.0 };
pub const INK: Color = Color { r: 0.067, g: 0.094, b: 0.153, a: 1.0 };

/// The view currently mounted under the navigation bar.
///
/// Rebuilt whenever the router's page changes, which is what drops a gallery's
/// selection and thumbnails when the user leaves it.
#[derive(Debug)]
pub enum Screen {
    Home,
    About,
    Gallery(GalleryScreen),
}

impl Screen {
    pub fn for_page(page: Page) -> Self {
        match page.gallery() {
            Some(gallery) => Screen::Gallery(GalleryScreen::new(gallery)),
            None if page == Page::About => Screen::About,
            None => Screen::Home,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Screen::Home => Page::Home,
            Screen::About => Page::About,
            Screen::Gallery(screen) => screen.gallery.page(),
        }
    }
}

/// Thumbnail state of one grid card
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Loading,
    Ready(image::Handle),
    /// Missing or undecodable; the card shows its title instead
    Failed,
}

/// Mounted gallery: which images it shows, what is selected, and decoded thumbnails
#[derive(Debug)]
pub struct GalleryScreen {
    pub gallery: Gallery,
    pub selection: Selection,
    pub thumbnails: HashMap<u32, ThumbnailState>,
}

impl GalleryScreen {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            selection: Selection::new(),
            thumbnails: HashMap::new(),
        }
    }

    pub fn thumbnail(&self, id: u32) -> &ThumbnailState {
        self.thumbnails.get(&id).unwrap_or(&ThumbnailState::Loading)
    }
}

/// A full-size picture, or a tinted placeholder when the asset could not be resolved
pub fn picture<'a>(path: Option<PathBuf>, height: f32) -> Element<'a, Message> {
    match path {
        Some(path) => image(path)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => placeholder("Image unavailable", height),
    }
}

/// Grey box with a centered caption
pub fn placeholder<'a>(caption: &'a str, height: f32) -> Element<'a, Message> {
    container(text(caption).size(16).color(GRAY))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(|_theme| filled(MIST, 8.0))
        .into()
}

/// Container style with a solid background and rounded corners
pub fn filled(color: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_for_every_page() {
        for page in Page::ALL {
            assert_eq!(Screen::for_page(page).page(), page);
        }
    }

    #[test]
    fn test_new_gallery_screen_has_no_selection() {
        let screen = GalleryScreen::new(Gallery::Color);
        assert!(!screen.selection.is_open());
        assert!(matches!(screen.thumbnail(1), ThumbnailState::Loading));
    }
}
