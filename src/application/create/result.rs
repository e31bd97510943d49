//! Create result types

use std::path::PathBuf;

use crate::domain::value_objects::ContentHash;

/// A file written to the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub hash: ContentHash,
    pub size: usize,
}

/// Result of a create operation
#[derive(Debug, Clone, Default)]
pub struct CreateResult {
    pub written: Vec<WrittenFile>,
}

impl CreateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_written(&mut self, path: PathBuf, hash: ContentHash, size: usize) {
        self.written.push(WrittenFile { path, hash, size });
    }

    pub fn paths(&self) -> Vec<&PathBuf> {
        self.written.iter().map(|w| &w.path).collect()
    }
}
