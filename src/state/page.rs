//! Page identifiers and the fixed path table.

use std::fmt;

/// The four top-level views of the portfolio.
/// Exactly one of them is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    ColorGallery,
    BwGallery,
}

/// Which image sequence a gallery page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gallery {
    Color,
    BlackAndWhite,
}

impl Page {
    /// Every page, in navigation-bar order
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::ColorGallery, Page::BwGallery];

    /// Resolve an address path to a page.
    ///
    /// Paths outside the table fall back to `Home`. This is not an error:
    /// the unknown path stays in the address bar and the home view renders.
    pub fn from_path(path: &str) -> Page {
        match path {
            "" | "/" => Page::Home,
            "/about" => Page::About,
            "/color" => Page::ColorGallery,
            "/black-and-white" => Page::BwGallery,
            _ => Page::Home,
        }
    }

    /// The address path this page is published under
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::ColorGallery => "/color",
            Page::BwGallery => "/black-and-white",
        }
    }

    /// Label used by the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Me",
            Page::ColorGallery => "Color",
            Page::BwGallery => "Black & White",
        }
    }

    /// The gallery shown by this page, if it is a gallery page
    pub fn gallery(self) -> Option<Gallery> {
        match self {
            Page::ColorGallery => Some(Gallery::Color),
            Page::BwGallery => Some(Gallery::BlackAndWhite),
            Page::Home | Page::About => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Gallery {
    /// Heading rendered above the grid
    pub fn heading(self) -> &'static str {
        match self {
            Gallery::Color => "Color",
            Gallery::BlackAndWhite => "Black & White",
        }
    }

    /// The page that hosts this gallery
    pub fn page(self) -> Page {
        match self {
            Gallery::Color => Page::ColorGallery,
            Gallery::BlackAndWhite => Page::BwGallery,
        }
    }
}

impl fmt::Display for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gallery::Color => "color",
            Gallery::BlackAndWhite => "black-and-white",
        })
    }
}
