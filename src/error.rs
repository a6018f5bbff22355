use std::path::PathBuf;

use thiserror::Error;

use crate::state::page::Gallery;

/// Errors raised while loading the gallery catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate image id {id} in {gallery} gallery")]
    DuplicateId { gallery: Gallery, id: u32 },
}

/// Errors raised while resolving or decoding a gallery asset.
///
/// Cloneable so it can travel inside UI messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Asset path escapes the asset root: {0}")]
    OutsideRoot(String),

    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid catalog JSON"));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateId {
            gallery: Gallery::BlackAndWhite,
            id: 9,
        };
        assert_eq!(err.to_string(), "Duplicate image id 9 in black-and-white gallery");

        let err = AssetError::NotFound(PathBuf::from("assets/eye.png"));
        assert_eq!(err.to_string(), "Asset not found: assets/eye.png");

        let err = AssetError::OutsideRoot("/../secret.png".to_string());
        assert_eq!(err.to_string(), "Asset path escapes the asset root: /../secret.png");
    }
}
