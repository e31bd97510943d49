use tracing::debug;

use crate::asset::{Asset, Parents};
use crate::domain::entities::AssetFile;
use crate::domain::ports::FileFetcher;
use crate::error::{ClustergenError, ClustergenResult};

pub const NETWORK_CRD_FILENAME: &str = "templates/cluster-network-crd.yaml";
pub const NETWORK_OPERATOR_CRD_FILENAME: &str = "templates/cluster-network-operator-crd.yaml";

const NETWORK_CRD: &str = include_str!("content/cluster-network-crd.yaml");
const NETWORK_OPERATOR_CRD: &str = include_str!("content/cluster-network-operator-crd.yaml");

/// The Network custom resource definitions, config first then operator.
///
/// Both ship with the binary. Placing both files under `templates/` in the
/// asset directory replaces them; a partial override is ignored.
#[derive(Debug, Clone, Default)]
pub struct NetworkCrds {
    files: Vec<AssetFile>,
}

impl Asset for NetworkCrds {
    fn name(&self) -> &'static str {
        "Network CRDs"
    }

    fn generate(&mut self, _parents: &Parents<'_>) -> ClustergenResult<()> {
        self.files = vec![
            AssetFile::new(NETWORK_CRD_FILENAME, NETWORK_CRD),
            AssetFile::new(NETWORK_OPERATOR_CRD_FILENAME, NETWORK_OPERATOR_CRD),
        ];
        Ok(())
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> ClustergenResult<bool> {
        let mut files = Vec::with_capacity(2);
        for name in [NETWORK_CRD_FILENAME, NETWORK_OPERATOR_CRD_FILENAME] {
            match fetcher.fetch_by_name(name) {
                Ok(file) => files.push(file),
                Err(err) if err.is_not_found() => {
                    debug!(file = name, "template not overridden, using built-in CRDs");
                    return Ok(false);
                }
                Err(source) => {
                    return Err(ClustergenError::Fetch {
                        name: name.to_string(),
                        source,
                    })
                }
            }
        }
        self.files = files;
        Ok(true)
    }

    fn files(&self) -> &[AssetFile] {
        &self.files
    }
}
