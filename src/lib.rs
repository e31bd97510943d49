//! Clustergen - cluster installation asset generator
//!
//! Clustergen turns a handful of user inputs into the files a cluster
//! installer consumes: a validated `install-config.yaml`, the cluster
//! network manifests and the cluster-api `Cluster` object. Every file is an
//! asset in a dependency graph; the [`asset::AssetStore`] resolves each asset
//! at most once, preferring a copy persisted by an earlier run.

pub mod application;
pub mod asset;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CreateOptions, CreateResult, CreateTarget, CreateUseCase};
pub use asset::{Asset, AssetStore};
pub use config::{InstallInputs, PlatformKind};
pub use error::{ClustergenError, ClustergenResult, ErrorKind, Stage};
