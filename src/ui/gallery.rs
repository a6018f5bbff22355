use iced::widget::{button, column, container, image, scrollable, stack, text};
use iced::{Element, Length, Pixels};
use iced_aw::Wrap;

use super::{modal, placeholder, GalleryScreen, ThumbnailState, GRAY, INK};
use crate::assets::AssetResolver;
use crate::state::GalleryImage;
use crate::Message;

/// Width of a grid card
const CARD_WIDTH: f32 = 320.0;
const THUMBNAIL_HEIGHT: f32 = 256.0;

/// Gallery page: heading, wrapped grid of artwork, and the detail overlay
/// stacked on top whenever an image is selected.
pub fn view<'a>(
    screen: &'a GalleryScreen,
    images: &'a [GalleryImage],
    resolver: &AssetResolver,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = images
        .iter()
        .map(|artwork| card(artwork, screen.thumbnail(artwork.id)))
        .collect();

    let page = scrollable(
        column![
            text(screen.gallery.heading()).size(72).color(INK),
            Wrap::with_elements(cards)
                .spacing(Pixels(32.0))
                .line_spacing(Pixels(32.0)),
        ]
        .spacing(64)
        .padding([48, 24])
        .width(Length::Fill),
    )
    .height(Length::Fill);

    match screen.selection.selected() {
        Some(selected) => {
            let full = resolver.resolve(&selected.source).ok();
            stack![page, modal::view(selected, full)].into()
        }
        None => page.into(),
    }
}

/// One clickable artwork card
fn card<'a>(artwork: &'a GalleryImage, thumbnail: &'a ThumbnailState) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        ThumbnailState::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .into(),
        ThumbnailState::Loading => placeholder("Loading...", THUMBNAIL_HEIGHT),
        ThumbnailState::Failed => placeholder(&artwork.title, THUMBNAIL_HEIGHT),
    };

    let content = column![
        preview,
        text(artwork.title.as_str()).size(18).color(INK),
        text(artwork.description.as_str()).size(14).color(GRAY),
    ]
    .spacing(6)
    .width(Length::Fixed(CARD_WIDTH));

    button(container(content))
        .padding(0)
        .on_press(Message::SelectImage(artwork.clone()))
        .style(button::text)
        .into()
}
