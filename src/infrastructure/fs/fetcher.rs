//! File fetchers
//!
//! `DirFetcher` serves asset files from a directory through any
//! [`FileSystem`]; `MemoryFetcher` holds them in a map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::domain::ports::{FileFetcher, FileSystem, FsError, FsResult};

/// Fetches asset files relative to a root directory
#[derive(Debug, Clone)]
pub struct DirFetcher<FS: FileSystem> {
    root: PathBuf,
    fs: FS,
}

impl<FS: FileSystem> DirFetcher<FS> {
    pub fn new(root: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<FS: FileSystem> FileFetcher for DirFetcher<FS> {
    fn fetch_by_name(&self, name: &str) -> FsResult<AssetFile> {
        let content = self.fs.read(&self.root.join(name))?;
        Ok(AssetFile::new(name, content))
    }
}

/// Asset files keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }
}

impl FileFetcher for MemoryFetcher {
    fn fetch_by_name(&self, name: &str) -> FsResult<AssetFile> {
        self.files
            .get(name)
            .map(|content| AssetFile::new(name, content.clone()))
            .ok_or_else(|| FsError::NotFound(PathBuf::from(name)))
    }
}
