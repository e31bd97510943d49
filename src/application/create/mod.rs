//! Create Use Case
//!
//! Materializes a target and writes its files to the asset directory.
//!
//! This module handles:
//! - Resolving the target's asset graph against persisted files
//! - Writing output only after every asset succeeded

mod options;
mod result;
mod use_case;

pub use options::{CreateOptions, CreateTarget};
pub use result::{CreateResult, WrittenFile};
pub use use_case::CreateUseCase;
