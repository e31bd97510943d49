//! Install config assets
//!
//! One leaf asset per user input, and the install config record built
//! from them.

mod base_domain;
mod cluster_name;
mod install_config;
mod platform;
mod pull_secret;
mod ssh_key;

pub use base_domain::BaseDomain;
pub use cluster_name::ClusterName;
pub use install_config::{InstallConfigAsset, INSTALL_CONFIG_FILENAME};
pub use platform::PlatformSelection;
pub use pull_secret::PullSecret;
pub use ssh_key::SshPublicKey;

use crate::error::{ClustergenError, ClustergenResult};

/// A required text input, trimmed; absent or blank is `MissingInput`
fn required(value: Option<&str>, field: &str) -> ClustergenResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ClustergenError::MissingInput {
            field: field.to_string(),
        }),
    }
}
