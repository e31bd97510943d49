//! Create options

use std::fmt;
use std::path::PathBuf;

use crate::asset::installconfig::InstallConfigAsset;
use crate::asset::manifests::{ClusterK8sIo, Networking};
use crate::asset::Asset;
use crate::config::InstallInputs;

/// What `create` produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateTarget {
    /// `install-config.yaml`
    InstallConfig,
    /// Network and cluster-api manifests
    Manifests,
}

impl CreateTarget {
    /// Assets whose files make up this target, in write order
    pub fn assets(&self) -> Vec<Box<dyn Asset>> {
        match self {
            CreateTarget::InstallConfig => vec![Box::new(InstallConfigAsset::default())],
            CreateTarget::Manifests => vec![
                Box::new(Networking::default()),
                Box::new(ClusterK8sIo::default()),
            ],
        }
    }
}

impl fmt::Display for CreateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateTarget::InstallConfig => write!(f, "install-config"),
            CreateTarget::Manifests => write!(f, "manifests"),
        }
    }
}

/// Options for the create command
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Asset directory: persisted files are read from and output written here
    pub dir: PathBuf,
    pub target: CreateTarget,
    pub inputs: InstallInputs,
}

impl CreateOptions {
    pub fn new(dir: impl Into<PathBuf>, target: CreateTarget) -> Self {
        Self {
            dir: dir.into(),
            target,
            inputs: InstallInputs::default(),
        }
    }

    /// Set inputs
    pub fn with_inputs(mut self, inputs: InstallInputs) -> Self {
        self.inputs = inputs;
        self
    }
}
