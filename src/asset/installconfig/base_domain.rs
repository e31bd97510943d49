use crate::asset::{Asset, Parents};
use crate::error::ClustergenResult;

use super::required;

/// The DNS domain the cluster is created under
#[derive(Debug, Clone, Default)]
pub struct BaseDomain {
    pub base_domain: String,
}

impl Asset for BaseDomain {
    fn name(&self) -> &'static str {
        "Base Domain"
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        self.base_domain = required(parents.inputs().base_domain.as_deref(), "baseDomain")?;
        Ok(())
    }
}
