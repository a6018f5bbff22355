use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::AssetError;

/// Longest edge of generated thumbnails
pub const THUMBNAIL_SIZE: u32 = 256;

/// Decoded thumbnail, ready to hand to an iced image handle
#[derive(Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Load a thumbnail for the image at `path`
///
/// Reading happens on tokio's fs pool and decoding is spawned as blocking work,
/// since full-size artwork can take a while to decode.
pub async fn load_thumbnail(path: PathBuf) -> Result<Thumbnail, AssetError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| read_error(&path, e))?;

    let decode_path = path.clone();
    task::spawn_blocking(move || decode_thumbnail(&decode_path, &bytes))
        .await
        .map_err(|e| AssetError::Decode {
            path,
            message: format!("Task join error: {}", e),
        })?
}

/// Decode image bytes and shrink them to fit within THUMBNAIL_SIZE
pub fn decode_thumbnail(path: &Path, bytes: &[u8]) -> Result<Thumbnail, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Small images are kept as-is, never upscaled
    let img = if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    tracing::trace!(path = %path.display(), width = rgba.width(), height = rgba.height(), "Decoded thumbnail");

    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

fn read_error(path: &Path, error: std::io::Error) -> AssetError {
    if error.kind() == std::io::ErrorKind::NotFound {
        AssetError::NotFound(path.to_path_buf())
    } else {
        AssetError::Io {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_thumbnail_fits_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::from_pixel(512, 256, image::Rgba([255, 105, 180, 255]))
            .save(&path)
            .unwrap();

        let thumbnail = load_thumbnail(path).await.unwrap();
        assert_eq!((thumbnail.width, thumbnail.height), (256, 128));
        assert_eq!(thumbnail.pixels.len(), 256 * 128 * 4);
    }

    #[tokio::test]
    async fn test_small_image_not_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::new(10, 20).save(&path).unwrap();

        let thumbnail = load_thumbnail(path).await.unwrap();
        assert_eq!((thumbnail.width, thumbnail.height), (10, 20));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = load_thumbnail(path.clone()).await.unwrap_err();
        assert_eq!(err, AssetError::NotFound(path));
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_thumbnail(Path::new("broken.png"), b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
