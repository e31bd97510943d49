//! Network entity - the cluster network operator configuration
//!
//! Derived from the install config's networking section. It is never
//! persisted as input; it only exists as a generated manifest.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NetworkingConfig, ObjectMeta};
use crate::error::{ClustergenError, ClustergenResult};

/// API group/version of the Network resource
pub const NETWORK_API_VERSION: &str = "config.openshift.io/v1";

/// The singleton Network resource is always named `cluster`
pub const NETWORK_NAME: &str = "cluster";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: NetworkSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    pub cluster_network: Vec<ClusterNetwork>,
    pub service_network: Vec<String>,
    pub network_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetwork {
    pub cidr: String,
    pub host_prefix: u32,
}

/// Pod and service CIDR blocks, for consumers that are not networking aware
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterNetworkRanges {
    pub pods: Vec<String>,
    pub services: Vec<String>,
}

impl Network {
    /// Build the Network resource from an install config networking section.
    ///
    /// Cluster network entries keep their input order. At least one entry is
    /// required; an empty list is a missing input, not something to default.
    pub fn from_networking(networking: &NetworkingConfig) -> ClustergenResult<Self> {
        if networking.cluster_network.is_empty() {
            return Err(ClustergenError::MissingInput {
                field: "clusterNetwork".to_string(),
            });
        }

        let cluster_network = networking
            .cluster_network
            .iter()
            .map(|entry| ClusterNetwork {
                cidr: entry.cidr.to_string(),
                host_prefix: u32::from(entry.host_prefix),
            })
            .collect();

        let service_network = networking
            .service_network
            .iter()
            .map(|cidr| cidr.to_string())
            .collect();

        Ok(Self {
            api_version: NETWORK_API_VERSION.to_string(),
            kind: "Network".to_string(),
            metadata: ObjectMeta {
                name: NETWORK_NAME.to_string(),
            },
            spec: NetworkSpec {
                cluster_network,
                service_network,
                network_type: networking.network_type.clone(),
            },
        })
    }

    /// Pod ranges are the cluster network CIDRs; services are copied as-is
    pub fn cluster_network_ranges(&self) -> ClusterNetworkRanges {
        ClusterNetworkRanges {
            pods: self
                .spec
                .cluster_network
                .iter()
                .map(|cn| cn.cidr.clone())
                .collect(),
            services: self.spec.service_network.clone(),
        }
    }
}
