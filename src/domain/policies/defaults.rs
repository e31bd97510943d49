//! Defaults Policy
//!
//! Fills unset fields of an install config. A field that already carries a
//! value is never overwritten, so applying defaults twice is a no-op.

use crate::domain::entities::{
    ClusterNetworkEntry, InstallConfig, LibvirtPlatform, MachinePool, COMPUTE_POOL,
    CONTROL_PLANE_POOL,
};
use crate::domain::value_objects::Cidr;
use crate::error::ClustergenResult;

pub const DEFAULT_NETWORK_TYPE: &str = "OpenShiftSDN";
pub const DEFAULT_MACHINE_CIDR: Cidr = Cidr::ipv4(10, 0, 0, 0, 16);
pub const DEFAULT_CLUSTER_NETWORK: Cidr = Cidr::ipv4(10, 128, 0, 0, 14);
pub const DEFAULT_HOST_PREFIX: u8 = 23;
pub const DEFAULT_SERVICE_NETWORK: Cidr = Cidr::ipv4(172, 30, 0, 0, 16);
pub const DEFAULT_REPLICAS: i64 = 3;
pub const DEFAULT_LIBVIRT_URI: &str = "qemu+tcp://192.168.122.1/system";
pub const DEFAULT_LIBVIRT_INTERFACE: &str = "tt0";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Defaults collaborator for the install config materializer
pub trait DefaultsPolicy {
    /// Populate unset fields in place
    fn apply(&self, config: &mut InstallConfig) -> ClustergenResult<()>;
}

/// The defaults shipped with clustergen
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDefaults;

impl DefaultsPolicy for StandardDefaults {
    fn apply(&self, config: &mut InstallConfig) -> ClustergenResult<()> {
        let net = &mut config.networking;
        if net.network_type.is_empty() {
            net.network_type = DEFAULT_NETWORK_TYPE.to_string();
        }
        if net.machine_cidr.is_none() {
            net.machine_cidr = Some(DEFAULT_MACHINE_CIDR);
        }
        if net.cluster_network.is_empty() {
            net.cluster_network.push(ClusterNetworkEntry {
                cidr: DEFAULT_CLUSTER_NETWORK,
                host_prefix: DEFAULT_HOST_PREFIX,
            });
        }
        if net.service_network.is_empty() {
            net.service_network.push(DEFAULT_SERVICE_NETWORK);
        }

        let control_plane = config
            .control_plane
            .get_or_insert_with(|| MachinePool::new(CONTROL_PLANE_POOL, DEFAULT_REPLICAS));
        if control_plane.name.is_empty() {
            control_plane.name = CONTROL_PLANE_POOL.to_string();
        }
        control_plane.replicas.get_or_insert(DEFAULT_REPLICAS);

        if config.compute.is_empty() {
            config
                .compute
                .push(MachinePool::new(COMPUTE_POOL, DEFAULT_REPLICAS));
        }
        for pool in &mut config.compute {
            pool.replicas.get_or_insert(DEFAULT_REPLICAS);
        }

        if let Some(libvirt) = &mut config.platform.libvirt {
            apply_libvirt(libvirt);
        }
        if let Some(aws) = &mut config.platform.aws {
            if aws.region.is_empty() {
                aws.region = DEFAULT_AWS_REGION.to_string();
            }
        }

        Ok(())
    }
}

fn apply_libvirt(libvirt: &mut LibvirtPlatform) {
    if libvirt.uri.is_empty() {
        libvirt.uri = DEFAULT_LIBVIRT_URI.to_string();
    }
    if libvirt.network.interface.is_empty() {
        libvirt.network.interface = DEFAULT_LIBVIRT_INTERFACE.to_string();
    }
}
