/// State management module
///
/// This module holds all portfolio state, including:
/// - Page identifiers and the path table (page.rs)
/// - Navigation history abstraction (history.rs)
/// - The page-state controller (router.rs)
/// - Gallery content model (data.rs)
/// - Per-gallery image selection (selection.rs)

pub mod page;
pub mod history;
pub mod router;
pub mod data;
pub mod selection;

pub use data::{Catalog, GalleryImage};
pub use history::{History, MemoryHistory};
pub use page::{Gallery, Page};
pub use router::Router;
pub use selection::{OverlayTarget, Selection};
