//! InstallConfig entity - the canonical installation record
//!
//! This is the document persisted as `install-config.yaml`. Fields are
//! declared in alphabetical order of their serialized names so the YAML
//! output is stable. Fields marked deprecated are only ever read: the
//! upgrade service moves them to their current location and clears them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Cidr;

/// Schema version written by this tool
pub const INSTALL_CONFIG_VERSION: &str = "v1beta4";

/// Older schema versions that can be upgraded to [`INSTALL_CONFIG_VERSION`]
pub const UPGRADABLE_VERSIONS: &[&str] = &["v1beta1", "v1beta2", "v1beta3"];

/// Name of the control plane machine pool
pub const CONTROL_PLANE_POOL: &str = "master";

/// Name of the default compute machine pool
pub const COMPUTE_POOL: &str = "worker";

/// Object metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

/// The install configuration record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub base_domain: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compute: Vec<MachinePool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<MachinePool>,

    /// Deprecated: replaced by `controlPlane` and `compute`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub machines: Vec<MachinePool>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub networking: NetworkingConfig,

    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub pull_secret: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key: String,
}

impl InstallConfig {
    /// A record tagged with the current schema version
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            api_version: INSTALL_CONFIG_VERSION.to_string(),
            metadata: ObjectMeta {
                name: cluster_name.into(),
            },
            ..Self::default()
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.metadata.name
    }
}

/// Cluster networking section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkingConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_network: Vec<ClusterNetworkEntry>,

    /// Deprecated: replaced by `clusterNetwork`
    #[serde(
        rename = "clusterNetworks",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub deprecated_cluster_networks: Vec<LegacyClusterNetwork>,

    #[serde(rename = "machineCIDR", default, skip_serializing_if = "Option::is_none")]
    pub machine_cidr: Option<Cidr>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_type: String,

    /// Deprecated: replaced by `serviceNetwork`
    #[serde(rename = "serviceCIDR", default, skip_serializing_if = "Option::is_none")]
    pub deprecated_service_cidr: Option<Cidr>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_network: Vec<Cidr>,

    /// Deprecated: replaced by `networkType`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub deprecated_type: Option<String>,
}

/// A pod network and the per-node subnet size carved out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetworkEntry {
    pub cidr: Cidr,
    pub host_prefix: u8,
}

/// Pre-v1beta4 pod network shape, sized by host bits instead of prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyClusterNetwork {
    pub cidr: Cidr,
    pub host_subnet_length: u8,
}

/// A named group of machines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MachinePool {
    pub name: String,

    #[serde(default, skip_serializing_if = "MachinePoolPlatform::is_empty")]
    pub platform: MachinePoolPlatform,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
}

impl MachinePool {
    pub fn new(name: impl Into<String>, replicas: i64) -> Self {
        Self {
            name: name.into(),
            platform: MachinePoolPlatform::default(),
            replicas: Some(replicas),
        }
    }
}

/// Per-pool machine settings for the selected platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MachinePoolPlatform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsMachinePool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libvirt: Option<LibvirtMachinePool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack: Option<OpenStackMachinePool>,
}

impl MachinePoolPlatform {
    pub fn is_empty(&self) -> bool {
        self.configured().is_empty()
    }

    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.aws.is_some() {
            names.push("aws");
        }
        if self.libvirt.is_some() {
            names.push("libvirt");
        }
        if self.openstack.is_some() {
            names.push("openstack");
        }
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AwsMachinePool {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub instance_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibvirtMachinePool {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpenStackMachinePool {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub flavor_name: String,
}

/// Platform settings; exactly one member is expected to be set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPlatform>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libvirt: Option<LibvirtPlatform>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none: Option<NonePlatform>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack: Option<OpenStackPlatform>,
}

impl Platform {
    /// Names of the platform members that are set, in declaration order
    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.aws.is_some() {
            names.push("aws");
        }
        if self.libvirt.is_some() {
            names.push("libvirt");
        }
        if self.none.is_some() {
            names.push("none");
        }
        if self.openstack.is_some() {
            names.push("openstack");
        }
        names
    }

    /// Name of the selected platform when exactly one is set
    pub fn name(&self) -> Option<&'static str> {
        match self.configured().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    #[serde(default)]
    pub region: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibvirtPlatform {
    #[serde(rename = "URI", default)]
    pub uri: String,

    #[serde(default)]
    pub network: LibvirtNetwork,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LibvirtNetwork {
    #[serde(rename = "if", default)]
    pub interface: String,
}

/// Bare-metal or user-provisioned infrastructure; carries no settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NonePlatform {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackPlatform {
    #[serde(default)]
    pub cloud: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compute_flavor: String,

    #[serde(default)]
    pub external_network: String,

    #[serde(default)]
    pub region: String,
}
