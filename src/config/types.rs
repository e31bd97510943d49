//! Install input type definitions

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Values the user supplies for a fresh install config.
///
/// Everything is optional here; the input assets decide which values are
/// required and report the missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstallInputs {
    #[serde(default)]
    pub cluster_name: Option<String>,

    #[serde(default)]
    pub base_domain: Option<String>,

    #[serde(default)]
    pub pull_secret: Option<String>,

    /// Read into `pull_secret` by the loader when that is unset
    #[serde(default)]
    pub pull_secret_file: Option<PathBuf>,

    #[serde(default)]
    pub ssh_key: Option<String>,

    /// Read into `ssh_key` by the loader when that is unset
    #[serde(default)]
    pub ssh_key_file: Option<PathBuf>,

    #[serde(default)]
    pub platform: PlatformInputs,
}

impl InstallInputs {
    /// Load inputs from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> crate::error::ClustergenResult<Self> {
        super::loader::load_with_warnings(path).map(|(inputs, _)| inputs)
    }
}

/// Platform selection and its settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformInputs {
    #[serde(rename = "type", default)]
    pub kind: Option<PlatformKind>,

    /// AWS or OpenStack region
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub libvirt_uri: Option<String>,

    /// OpenStack cloud name from clouds.yaml
    #[serde(default)]
    pub cloud: Option<String>,

    #[serde(default)]
    pub external_network: Option<String>,

    #[serde(default)]
    pub compute_flavor: Option<String>,

    /// Extra tags applied to AWS resources
    #[serde(default)]
    pub user_tags: BTreeMap<String, String>,
}

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Aws,
    Libvirt,
    None,
    Openstack,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 4] = [
        PlatformKind::Aws,
        PlatformKind::Libvirt,
        PlatformKind::None,
        PlatformKind::Openstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Aws => "aws",
            PlatformKind::Libvirt => "libvirt",
            PlatformKind::None => "none",
            PlatformKind::Openstack => "openstack",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        PlatformKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "unknown platform '{}' (expected one of: aws, libvirt, none, openstack)",
                    s
                )
            })
    }
}
