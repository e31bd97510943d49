use crate::asset::{Asset, Parents};
use crate::error::ClustergenResult;

use super::required;

#[derive(Debug, Clone, Default)]
pub struct ClusterName {
    pub cluster_name: String,
}

impl Asset for ClusterName {
    fn name(&self) -> &'static str {
        "Cluster Name"
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        self.cluster_name = required(parents.inputs().cluster_name.as_deref(), "metadata.name")?;
        Ok(())
    }
}
