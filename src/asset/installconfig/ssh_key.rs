use tracing::debug;

use crate::asset::{Asset, Parents};
use crate::error::ClustergenResult;

/// The SSH public key authorized on cluster machines. Optional.
#[derive(Debug, Clone, Default)]
pub struct SshPublicKey {
    pub key: String,
}

impl Asset for SshPublicKey {
    fn name(&self) -> &'static str {
        "SSH Key"
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        self.key = parents
            .inputs()
            .ssh_key
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if self.key.is_empty() {
            debug!("no SSH key supplied, machines will not allow SSH access");
        }
        Ok(())
    }
}
