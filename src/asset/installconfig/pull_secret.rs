use crate::asset::{Asset, Parents};
use crate::error::ClustergenResult;

use super::required;

/// Registry credentials, as a JSON document with an `auths` object
#[derive(Clone, Default)]
pub struct PullSecret {
    pub pull_secret: String,
}

impl std::fmt::Debug for PullSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullSecret")
            .field("pull_secret", &"<redacted>")
            .finish()
    }
}

impl Asset for PullSecret {
    fn name(&self) -> &'static str {
        "Pull Secret"
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        self.pull_secret = required(parents.inputs().pull_secret.as_deref(), "pullSecret")?;
        Ok(())
    }
}
