use crate::asset::installconfig::InstallConfigAsset;
use crate::asset::{Asset, Parents};
use crate::domain::entities::{AssetFile, Cluster};
use crate::error::{ClustergenError, ClustergenResult};

use super::{Networking, OPENSHIFT_DIR};

pub const CLUSTER_MANIFEST: &str = "99_openshift-cluster-api_cluster.yaml";

/// The cluster-api `Cluster` object.
///
/// Reads the install config for the cluster name and only the network
/// ranges from [`Networking`].
#[derive(Debug, Clone, Default)]
pub struct ClusterK8sIo {
    cluster: Option<Cluster>,
    files: Vec<AssetFile>,
}

impl ClusterK8sIo {
    pub fn cluster(&self) -> ClustergenResult<&Cluster> {
        self.cluster
            .as_ref()
            .ok_or(ClustergenError::NotInitialized { accessor: "Cluster" })
    }
}

impl Asset for ClusterK8sIo {
    fn name(&self) -> &'static str {
        "Cluster.cluster.k8s.io/v1alpha1"
    }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        vec![
            Box::new(InstallConfigAsset::default()),
            Box::new(Networking::default()),
        ]
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        let install_config = parents.get::<InstallConfigAsset>()?.config()?;
        let ranges = parents.get::<Networking>()?.cluster_network_ranges()?;

        let cluster = Cluster::new(install_config.cluster_name(), ranges);
        let data =
            serde_yaml_ng::to_string(&cluster).map_err(|source| ClustergenError::Serialize {
                what: "Cluster".to_string(),
                source,
            })?;

        self.files = vec![AssetFile::new(
            format!("{}/{}", OPENSHIFT_DIR, CLUSTER_MANIFEST),
            data,
        )];
        self.cluster = Some(cluster);
        Ok(())
    }

    fn files(&self) -> &[AssetFile] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetState, AssetStore};
    use crate::config::{InstallInputs, PlatformKind};
    use crate::infrastructure::fs::MemoryFetcher;

    #[test]
    fn shares_install_config_with_networking() {
        let mut inputs = InstallInputs {
            cluster_name: Some("demo".to_string()),
            base_domain: Some("example.com".to_string()),
            pull_secret: Some(r#"{"auths":{}}"#.to_string()),
            ..InstallInputs::default()
        };
        inputs.platform.kind = Some(PlatformKind::None);
        let fetcher = MemoryFetcher::new();
        let mut store = AssetStore::new(&fetcher, &inputs);

        let asset = store.fetch::<ClusterK8sIo>().unwrap();
        let cluster = asset.cluster().unwrap();

        assert_eq!(cluster.metadata.name, "demo");
        assert_eq!(cluster.metadata.namespace, "openshift-cluster-api");
        assert_eq!(
            cluster.spec.cluster_network.pods.cidr_blocks,
            vec!["10.128.0.0/14"]
        );
        assert_eq!(
            asset.files()[0].path(),
            std::path::Path::new("openshift/99_openshift-cluster-api_cluster.yaml")
        );
        assert_eq!(
            store.state_of::<InstallConfigAsset>(),
            AssetState::Materialized { loaded: false }
        );
    }
}
