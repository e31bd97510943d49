//! FileFetcher port - read access to persisted asset state
//!
//! Assets that can be reconstituted from disk ask for their files by name.
//! `FsError::NotFound` means "not persisted"; every other error is a failure.

use crate::domain::entities::AssetFile;

use super::file_system::FsResult;

/// Fetches previously written asset files by their relative name
pub trait FileFetcher {
    /// Fetch one file. The returned file's path is `name`.
    fn fetch_by_name(&self, name: &str) -> FsResult<AssetFile>;
}
