//! AssetFile entity - a file an asset produces or was loaded from
//!
//! AssetFiles are what a materialized asset exposes through `files()`.
//! They represent what will be written to the output directory.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// A generated or loaded file, addressed relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Path relative to the output directory
    path: PathBuf,
    /// Raw content
    content: Vec<u8>,
}

impl AssetFile {
    /// Create a new AssetFile
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8, if it is valid UTF-8
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Compute the SHA-256 hash of the content
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.content)
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }
}
