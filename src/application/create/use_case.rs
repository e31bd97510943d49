//! Create Use Case
//!
//! Orchestrates one resolution pass and the output write.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::asset::{Asset, AssetStore};
use crate::domain::entities::AssetFile;
use crate::domain::ports::FileSystem;
use crate::error::{ClustergenError, ClustergenResult};
use crate::infrastructure::fs::DirFetcher;

use super::options::CreateOptions;
use super::result::CreateResult;

/// Create use case - materializes a target and writes its files
pub struct CreateUseCase<FS>
where
    FS: FileSystem + Clone,
{
    fs: FS,
}

impl<FS> CreateUseCase<FS>
where
    FS: FileSystem + Clone,
{
    /// Create a new create use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn execute(&self, options: &CreateOptions) -> ClustergenResult<CreateResult> {
        self.execute_with(options, Vec::new())
    }

    /// Like [`execute`](Self::execute), resolving `seeds` first.
    ///
    /// A seeded asset takes the place of the default instance of its type
    /// for everything resolved after it.
    pub fn execute_with(
        &self,
        options: &CreateOptions,
        seeds: Vec<Box<dyn Asset>>,
    ) -> ClustergenResult<CreateResult> {
        let fetcher = DirFetcher::new(options.dir.clone(), self.fs.clone());
        let mut store = AssetStore::new(&fetcher, &options.inputs);

        for seed in seeds {
            store.resolve(seed)?;
        }

        let mut pending: Vec<AssetFile> = Vec::new();
        for target in options.target.assets() {
            let asset = store.resolve(target)?;
            debug!(
                asset = asset.name(),
                files = asset.files().len(),
                "target materialized"
            );
            pending.extend(asset.files().iter().cloned());
        }

        self.write_all(options, pending)
    }

    /// Writes every file or none of them.
    ///
    /// Existing targets are read up front. If a write fails, files already
    /// written get their previous content back (or are removed) and any
    /// directory this call created is removed again.
    fn write_all(
        &self,
        options: &CreateOptions,
        pending: Vec<AssetFile>,
    ) -> ClustergenResult<CreateResult> {
        let mut staged = Vec::with_capacity(pending.len());
        let mut created_dirs: Vec<PathBuf> = Vec::new();
        for file in pending {
            let path = options.dir.join(file.path());
            let previous = match self.fs.read(&path) {
                Ok(bytes) => Some(bytes),
                Err(err) if err.is_not_found() => None,
                Err(source) => return Err(ClustergenError::Write { path, source }),
            };
            for dir in path.ancestors().skip(1) {
                if dir.as_os_str().is_empty() || self.fs.exists(dir) {
                    break;
                }
                if !created_dirs.iter().any(|d| d == dir) {
                    created_dirs.push(dir.to_path_buf());
                }
            }
            staged.push((path, previous, file));
        }

        let mut written: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
        let mut result = CreateResult::new();
        for (path, previous, file) in staged {
            if let Err(source) = self.fs.write(&path, file.content()) {
                self.roll_back(&written, &mut created_dirs);
                return Err(ClustergenError::Write { path, source });
            }
            let hash = file.hash();
            info!(path = %path.display(), hash = %hash.short(), "wrote file");
            result.add_written(path.clone(), hash, file.len());
            written.push((path, previous));
        }

        Ok(result)
    }

    fn roll_back(&self, written: &[(PathBuf, Option<Vec<u8>>)], created_dirs: &mut [PathBuf]) {
        for (path, previous) in written.iter().rev() {
            let restored = match previous {
                Some(bytes) => self.fs.write(path, bytes),
                None => self.fs.remove(path),
            };
            match restored {
                Ok(()) => debug!(path = %path.display(), "rolled back"),
                Err(err) => warn!(path = %path.display(), error = %err, "rollback failed"),
            }
        }

        // deepest first, so parents are empty by the time we reach them
        created_dirs.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));
        for dir in created_dirs.iter() {
            if let Err(err) = self.fs.remove_dir(dir) {
                if !err.is_not_found() {
                    warn!(path = %dir.display(), error = %err, "could not remove directory");
                }
            }
        }
    }
}
