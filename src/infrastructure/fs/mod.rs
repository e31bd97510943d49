//! File System Implementations
//!
//! Concrete implementations of the FileSystem and FileFetcher ports.

mod fetcher;
mod local;
mod memory;

pub use fetcher::{DirFetcher, MemoryFetcher};
pub use local::LocalFs;
pub use memory::MemoryFs;
