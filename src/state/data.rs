//! Gallery content model
//!
//! Two fixed, ordered sequences of image records make up the whole content
//! of the gallery pages. They are loaded once at startup and never mutated.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::page::Gallery;
use crate::error::CatalogError;

/// Catalog shipped with the binary
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Represents a single artwork in a gallery
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Unique within its gallery
    pub id: u32,
    /// Asset path, resolved by the asset resolver (e.g. "/jasper-portfolio/assets/eye.png")
    pub source: String,
    pub title: String,
    pub description: String,
}

/// Both gallery sequences
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    color: Vec<GalleryImage>,
    black_and_white: Vec<GalleryImage>,
}

impl Catalog {
    /// The catalog embedded at build time
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Images of one gallery, in display order
    pub fn images(&self, gallery: Gallery) -> &[GalleryImage] {
        match gallery {
            Gallery::Color => &self.color,
            Gallery::BlackAndWhite => &self.black_and_white,
        }
    }

    /// Ids must be unique within each gallery
    fn validate(&self) -> Result<(), CatalogError> {
        for gallery in [Gallery::Color, Gallery::BlackAndWhite] {
            let mut seen = HashSet::new();
            for image in self.images(gallery) {
                if !seen.insert(image.id) {
                    return Err(CatalogError::DuplicateId {
                        gallery,
                        id: image.id,
                    });
                }
            }
        }
        Ok(())
    }
}
