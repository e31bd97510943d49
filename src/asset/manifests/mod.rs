//! Manifests compiled from the install config

mod cluster_k8s_io;
mod network;

pub use cluster_k8s_io::{ClusterK8sIo, CLUSTER_MANIFEST};
pub use network::{Networking, NETWORK_CONFIG_MANIFEST, NETWORK_CRD_MANIFEST};

/// Directory for manifests applied by the bootstrap process
pub const MANIFEST_DIR: &str = "manifests";

/// Directory for OpenShift-specific manifests
pub const OPENSHIFT_DIR: &str = "openshift";
