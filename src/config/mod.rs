//! Install inputs for clustergen
//!
//! Inputs are resolved in this order, later sources winning:
//! 1. Inputs file (`--inputs`, or `clustergen.toml` in the target directory)
//! 2. Environment variables (CLUSTERGEN_*)
//! 3. `pull_secret_file` / `ssh_key_file`, only where the inline value is unset

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::InputWarning;

pub use loader::{
    load_or_default, load_with_warnings, resolve_files, with_env_overrides, DEFAULT_INPUTS_FILE,
};
pub use types::{InstallInputs, PlatformInputs, PlatformKind};
