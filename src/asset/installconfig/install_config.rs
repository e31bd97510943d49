//! The install config asset
//!
//! Produces `install-config.yaml`, either from user inputs or by loading a
//! file persisted by an earlier run. Both paths end the same way: defaults,
//! validation, then serialization. A record is never serialized until it
//! has validated.

use tracing::info;

use super::{BaseDomain, ClusterName, PlatformSelection, PullSecret, SshPublicKey};
use crate::asset::{Asset, Parents};
use crate::domain::entities::{AssetFile, InstallConfig};
use crate::domain::policies::{
    ConfigValidator, DefaultsPolicy, StandardDefaults, StandardValidator,
};
use crate::domain::ports::FileFetcher;
use crate::domain::services::upgrade_install_config;
use crate::error::{ClustergenError, ClustergenResult};

pub const INSTALL_CONFIG_FILENAME: &str = "install-config.yaml";

pub struct InstallConfigAsset {
    config: Option<InstallConfig>,
    file: Option<AssetFile>,
    defaults: Box<dyn DefaultsPolicy>,
    validator: Box<dyn ConfigValidator>,
}

impl Default for InstallConfigAsset {
    fn default() -> Self {
        Self::with_policies(StandardDefaults, StandardValidator)
    }
}

impl std::fmt::Debug for InstallConfigAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallConfigAsset")
            .field("config", &self.config.as_ref().map(|c| c.cluster_name()))
            .field("file", &self.file.as_ref().map(|f| f.path()))
            .finish_non_exhaustive()
    }
}

impl InstallConfigAsset {
    /// An asset that materializes with the given policies.
    ///
    /// Resolve it in a store before anything that depends on the install
    /// config, and dependents will see this instance.
    pub fn with_policies(
        defaults: impl DefaultsPolicy + 'static,
        validator: impl ConfigValidator + 'static,
    ) -> Self {
        Self {
            config: None,
            file: None,
            defaults: Box::new(defaults),
            validator: Box::new(validator),
        }
    }

    /// The materialized record
    pub fn config(&self) -> ClustergenResult<&InstallConfig> {
        self.config.as_ref().ok_or(ClustergenError::NotInitialized {
            accessor: "InstallConfig",
        })
    }

    /// Default, validate and serialize `config`, then keep it.
    fn finish(&mut self, mut config: InstallConfig, subject: String) -> ClustergenResult<()> {
        self.defaults.apply(&mut config).map_err(|err| match err {
            ClustergenError::Defaults { .. } => err,
            other => ClustergenError::Defaults {
                message: other.to_string(),
            },
        })?;

        let errors = self.validator.validate(&config);
        if !errors.is_empty() {
            return Err(ClustergenError::Validation { subject, errors });
        }

        let data = serde_yaml_ng::to_string(&config).map_err(|source| {
            ClustergenError::Serialize {
                what: "InstallConfig".to_string(),
                source,
            }
        })?;

        self.file = Some(AssetFile::new(INSTALL_CONFIG_FILENAME, data));
        self.config = Some(config);
        Ok(())
    }
}

impl Asset for InstallConfigAsset {
    fn name(&self) -> &'static str {
        "Install Config"
    }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        vec![
            Box::new(SshPublicKey::default()),
            Box::new(BaseDomain::default()),
            Box::new(ClusterName::default()),
            Box::new(PullSecret::default()),
            Box::new(PlatformSelection::default()),
        ]
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        let ssh_key = parents.get::<SshPublicKey>()?;
        let base_domain = parents.get::<BaseDomain>()?;
        let cluster_name = parents.get::<ClusterName>()?;
        let pull_secret = parents.get::<PullSecret>()?;
        let platform = parents.get::<PlatformSelection>()?;

        let mut config = InstallConfig::new(cluster_name.cluster_name.clone());
        config.ssh_key = ssh_key.key.clone();
        config.base_domain = base_domain.base_domain.clone();
        config.pull_secret = pull_secret.pull_secret.clone();
        config.platform = platform.platform.clone();

        self.finish(config, "install config".to_string())
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> ClustergenResult<bool> {
        let file = match fetcher.fetch_by_name(INSTALL_CONFIG_FILENAME) {
            Ok(file) => file,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(source) => {
                return Err(ClustergenError::Fetch {
                    name: INSTALL_CONFIG_FILENAME.to_string(),
                    source,
                })
            }
        };

        let mut config: InstallConfig =
            serde_yaml_ng::from_slice(file.content()).map_err(|source| {
                ClustergenError::Deserialize {
                    file: INSTALL_CONFIG_FILENAME.to_string(),
                    source,
                }
            })?;

        let migrated = upgrade_install_config(&mut config).map_err(ClustergenError::Upgrade)?;
        if !migrated.is_empty() {
            info!(fields = ?migrated, "upgraded deprecated install config fields");
        }

        self.finish(config, format!("{:?} file", INSTALL_CONFIG_FILENAME))?;
        Ok(true)
    }

    fn files(&self) -> &[AssetFile] {
        self.file.as_slice()
    }
}
