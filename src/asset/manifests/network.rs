use crate::asset::installconfig::InstallConfigAsset;
use crate::asset::templates::NetworkCrds;
use crate::asset::{Asset, Parents};
use crate::domain::entities::{AssetFile, ClusterNetworkRanges, Network};
use crate::error::{ClustergenError, ClustergenResult};

use super::MANIFEST_DIR;

pub const NETWORK_CRD_MANIFEST: &str = "cluster-network-01-crd.yml";
pub const NETWORK_CONFIG_MANIFEST: &str = "cluster-network-02-config.yml";

/// Separator written before every CRD document in the combined manifest
const DOCUMENT_SEPARATOR: &[u8] = b"\n---\n";

/// The cluster network configuration and the CRDs it needs.
///
/// The CRDs are created by the installer rather than the cluster version
/// operator so the Network instance can be created alongside them.
#[derive(Debug, Clone, Default)]
pub struct Networking {
    config: Option<Network>,
    files: Vec<AssetFile>,
}

impl Networking {
    /// The generated Network resource
    pub fn network(&self) -> ClustergenResult<&Network> {
        self.config.as_ref().ok_or(ClustergenError::NotInitialized {
            accessor: "Network",
        })
    }

    /// Pod and service ranges for collaborators that only need those.
    pub fn cluster_network_ranges(&self) -> ClustergenResult<ClusterNetworkRanges> {
        self.config
            .as_ref()
            .map(Network::cluster_network_ranges)
            .ok_or(ClustergenError::NotInitialized {
                accessor: "ClusterNetwork",
            })
    }
}

impl Asset for Networking {
    fn name(&self) -> &'static str {
        "Network Config"
    }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        vec![
            Box::new(InstallConfigAsset::default()),
            Box::new(NetworkCrds::default()),
        ]
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        let install_config = parents.get::<InstallConfigAsset>()?.config()?;
        let crds = parents.get::<NetworkCrds>()?;

        let network = Network::from_networking(&install_config.networking)?;
        let config_data =
            serde_yaml_ng::to_string(&network).map_err(|source| ClustergenError::Serialize {
                what: format!("{} manifests from InstallConfig", self.name()),
                source,
            })?;

        let mut crd_data = Vec::new();
        for file in crds.files() {
            crd_data.extend_from_slice(DOCUMENT_SEPARATOR);
            crd_data.extend_from_slice(file.content());
        }

        self.files = vec![
            AssetFile::new(format!("{}/{}", MANIFEST_DIR, NETWORK_CRD_MANIFEST), crd_data),
            AssetFile::new(
                format!("{}/{}", MANIFEST_DIR, NETWORK_CONFIG_MANIFEST),
                config_data,
            ),
        ];
        self.config = Some(network);
        Ok(())
    }

    fn files(&self) -> &[AssetFile] {
        &self.files
    }
}
