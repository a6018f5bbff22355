/// Static asset access
///
/// This module handles:
/// - Mapping gallery source strings to files under the asset root (mod.rs)
/// - Decoding and downscaling gallery thumbnails (thumbnail.rs)

pub mod thumbnail;

use std::path::{Component, Path, PathBuf};

use crate::error::AssetError;

pub use thumbnail::{load_thumbnail, Thumbnail};

/// Resolves the asset paths used by gallery records into files on disk.
///
/// Sources look like "/jasper-portfolio/assets/eye.png": the public base prefix
/// is stripped and the rest is joined onto the asset root.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    base: String,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            base,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a source string to a file path under the asset root
    pub fn resolve(&self, source: &str) -> Result<PathBuf, AssetError> {
        let relative = self.strip_base(source).trim_start_matches('/');

        let escapes = Path::new(relative).components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || relative.is_empty() {
            return Err(AssetError::OutsideRoot(source.to_string()));
        }

        Ok(self.root.join(relative))
    }

    /// Strip the base prefix only when it ends on a path segment boundary
    fn strip_base<'a>(&self, source: &'a str) -> &'a str {
        if self.base.is_empty() {
            return source;
        }
        match source.strip_prefix(self.base.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => source,
        }
    }
}
