use crate::asset::{Asset, Parents};
use crate::config::{PlatformInputs, PlatformKind};
use crate::domain::entities::{
    AwsPlatform, LibvirtNetwork, LibvirtPlatform, NonePlatform, OpenStackPlatform, Platform,
};
use crate::error::{ClustergenError, ClustergenResult};

/// The selected platform and its settings; exactly one member is set
#[derive(Debug, Clone, Default)]
pub struct PlatformSelection {
    pub platform: Platform,
}

impl Asset for PlatformSelection {
    fn name(&self) -> &'static str {
        "Platform"
    }

    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()> {
        let inputs = &parents.inputs().platform;
        let kind = inputs.kind.ok_or_else(|| ClustergenError::MissingInput {
            field: "platform".to_string(),
        })?;
        self.platform = select(kind, inputs);
        Ok(())
    }
}

/// Unset settings stay empty; defaults and validation fill or reject them
fn select(kind: PlatformKind, inputs: &PlatformInputs) -> Platform {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut platform = Platform::default();
    match kind {
        PlatformKind::Aws => {
            platform.aws = Some(AwsPlatform {
                region: text(&inputs.region),
                user_tags: inputs.user_tags.clone(),
            })
        }
        PlatformKind::Libvirt => {
            platform.libvirt = Some(LibvirtPlatform {
                uri: text(&inputs.libvirt_uri),
                network: LibvirtNetwork::default(),
            })
        }
        PlatformKind::None => platform.none = Some(NonePlatform {}),
        PlatformKind::Openstack => {
            platform.openstack = Some(OpenStackPlatform {
                cloud: text(&inputs.cloud),
                compute_flavor: text(&inputs.compute_flavor),
                external_network: text(&inputs.external_network),
                region: text(&inputs.region),
            })
        }
    }
    platform
}
