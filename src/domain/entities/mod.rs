//! Domain Entities
//!
//! Records produced by assets.
//! - `AssetFile` - A generated or loaded file
//! - `InstallConfig` - The canonical installation record
//! - `Network` - The cluster network operator configuration
//! - `Cluster` - The cluster-api cluster object

mod asset_file;
mod cluster;
mod install_config;
mod network;

pub use asset_file::AssetFile;
pub use cluster::{
    Cluster, ClusterMeta, ClusterNetworkingConfig, ClusterSpec, NetworkRanges,
    CLUSTER_API_NAMESPACE, CLUSTER_API_VERSION,
};
pub use install_config::{
    AwsMachinePool, AwsPlatform, ClusterNetworkEntry, InstallConfig, LegacyClusterNetwork,
    LibvirtMachinePool, LibvirtNetwork, LibvirtPlatform, MachinePool, MachinePoolPlatform,
    NetworkingConfig, NonePlatform, ObjectMeta, OpenStackMachinePool, OpenStackPlatform, Platform,
    COMPUTE_POOL, CONTROL_PLANE_POOL, INSTALL_CONFIG_VERSION, UPGRADABLE_VERSIONS,
};
pub use network::{
    ClusterNetwork, ClusterNetworkRanges, Network, NetworkSpec, NETWORK_API_VERSION, NETWORK_NAME,
};
