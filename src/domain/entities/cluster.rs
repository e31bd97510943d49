//! Cluster entity - the cluster-api `Cluster` object
//!
//! Captures generalized cluster state. It only needs pod and service ranges,
//! not the full networking section.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ClusterNetworkRanges;

pub const CLUSTER_API_VERSION: &str = "cluster.k8s.io/v1alpha1";
pub const CLUSTER_API_NAMESPACE: &str = "openshift-cluster-api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub api_version: String,
    pub kind: String,
    pub metadata: ClusterMeta,
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMeta {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub cluster_network: ClusterNetworkingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetworkingConfig {
    pub services: NetworkRanges,
    pub pods: NetworkRanges,
    pub service_domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRanges {
    pub cidr_blocks: Vec<String>,
}

impl Cluster {
    pub fn new(name: impl Into<String>, ranges: ClusterNetworkRanges) -> Self {
        Self {
            api_version: CLUSTER_API_VERSION.to_string(),
            kind: "Cluster".to_string(),
            metadata: ClusterMeta {
                name: name.into(),
                namespace: CLUSTER_API_NAMESPACE.to_string(),
            },
            spec: ClusterSpec {
                cluster_network: ClusterNetworkingConfig {
                    services: NetworkRanges {
                        cidr_blocks: ranges.services,
                    },
                    pods: NetworkRanges {
                        cidr_blocks: ranges.pods,
                    },
                    service_domain: String::new(),
                },
            },
        }
    }
}
