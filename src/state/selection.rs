//! Per-gallery image selection driving the detail overlay.

use super::data::GalleryImage;

/// Where a click on the open overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The dimmed area around the detail panel
    Backdrop,
    /// Inside the detail panel (image, title, description)
    Panel,
    CloseButton,
}

/// Which image, if any, is open in the detail overlay.
///
/// Lives inside a mounted gallery view and is dropped with it, so a selection
/// never survives a page change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<GalleryImage>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `image`, replacing any previous selection
    pub fn select(&mut self, image: GalleryImage) {
        tracing::debug!(id = image.id, title = %image.title, "Image selected");
        self.selected = Some(image);
    }

    /// Close the overlay
    pub fn clear(&mut self) {
        if let Some(image) = self.selected.take() {
            tracing::debug!(id = image.id, "Selection cleared");
        }
    }

    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Route a click on the overlay.
    ///
    /// The panel swallows its own clicks; everything else dismisses.
    /// Returns `true` if the selection changed.
    pub fn click(&mut self, target: OverlayTarget) -> bool {
        match target {
            OverlayTarget::Panel => false,
            OverlayTarget::Backdrop | OverlayTarget::CloseButton => {
                let was_open = self.is_open();
                self.clear();
                was_open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: u32) -> GalleryImage {
        GalleryImage {
            id,
            source: format!("/jasper-portfolio/assets/{id}.png"),
            title: format!("Artwork {id}"),
            description: "Pencil on paper".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let selection = Selection::new();
        assert!(selection.selected().is_none());
        assert!(!selection.is_open());
    }

    #[test]
    fn test_select_then_clear() {
        let mut selection = Selection::new();
        selection.select(image(3));
        assert_eq!(selection.selected(), Some(&image(3)));

        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_last_select_wins() {
        let mut selection = Selection::new();
        selection.select(image(1));
        selection.select(image(2));
        assert_eq!(selection.selected().map(|i| i.id), Some(2));

        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_panel_click_keeps_selection() {
        let mut selection = Selection::new();
        selection.select(image(7));
        assert!(!selection.click(OverlayTarget::Panel));
        assert_eq!(selection.selected().map(|i| i.id), Some(7));
    }

    #[test]
    fn test_backdrop_click_clears() {
        let mut selection = Selection::new();
        selection.select(image(7));
        assert!(selection.click(OverlayTarget::Backdrop));
        assert!(!selection.is_open());
    }

    #[test]
    fn test_close_button_clears() {
        let mut selection = Selection::new();
        selection.select(image(7));
        assert!(selection.click(OverlayTarget::CloseButton));
        assert!(!selection.is_open());

        // Nothing left to close
        assert!(!selection.click(OverlayTarget::CloseButton));
    }
}
