//! Install config upgrade
//!
//! Migrates records written by older releases to the current schema. The
//! migration is pure and idempotent: running it on an already current record
//! changes nothing and reports no migrated fields.

use crate::domain::entities::{
    ClusterNetworkEntry, InstallConfig, MachinePool, CONTROL_PLANE_POOL, INSTALL_CONFIG_VERSION,
    UPGRADABLE_VERSIONS,
};
use crate::domain::value_objects::Cidr;

/// Reasons a record cannot be migrated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeError {
    #[error("unsupported install-config version \"{version}\"")]
    UnsupportedVersion { version: String },

    #[error("hostSubnetLength {length} is larger than the address size of {cidr}")]
    HostSubnetLength { cidr: Cidr, length: u8 },

    #[error("machines lists {count} pools named \"master\", expected at most one")]
    MultipleControlPlanes { count: usize },
}

/// Upgrade `config` in place, returning the paths of the fields that moved.
///
/// The record is left untouched when an error is returned.
pub fn upgrade_install_config(config: &mut InstallConfig) -> Result<Vec<String>, UpgradeError> {
    let upgrade_version = match config.api_version.as_str() {
        "" | INSTALL_CONFIG_VERSION => false,
        v if UPGRADABLE_VERSIONS.contains(&v) => true,
        v => {
            return Err(UpgradeError::UnsupportedVersion {
                version: v.to_string(),
            })
        }
    };

    // Convert up front so a bad entry leaves the record as it was.
    let converted_networks = config
        .networking
        .deprecated_cluster_networks
        .iter()
        .map(|legacy| {
            let bits = legacy.cidr.address_bits();
            if legacy.host_subnet_length > bits {
                return Err(UpgradeError::HostSubnetLength {
                    cidr: legacy.cidr,
                    length: legacy.host_subnet_length,
                });
            }
            Ok(ClusterNetworkEntry {
                cidr: legacy.cidr,
                host_prefix: bits - legacy.host_subnet_length,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let masters = config
        .machines
        .iter()
        .filter(|pool| pool.name == CONTROL_PLANE_POOL)
        .count();
    if masters > 1 {
        return Err(UpgradeError::MultipleControlPlanes { count: masters });
    }

    let mut migrated = Vec::new();

    if upgrade_version {
        config.api_version = INSTALL_CONFIG_VERSION.to_string();
        migrated.push("apiVersion".to_string());
    }

    let net = &mut config.networking;

    if let Some(kind) = net.deprecated_type.take() {
        if net.network_type.is_empty() {
            net.network_type = kind;
        }
        migrated.push("networking.type".to_string());
    }

    if let Some(service) = net.deprecated_service_cidr.take() {
        if net.service_network.is_empty() {
            net.service_network.push(service);
        }
        migrated.push("networking.serviceCIDR".to_string());
    }

    if !net.deprecated_cluster_networks.is_empty() {
        net.deprecated_cluster_networks.clear();
        if net.cluster_network.is_empty() {
            net.cluster_network = converted_networks;
        }
        migrated.push("networking.clusterNetworks".to_string());
    }

    if !config.machines.is_empty() {
        let machines = std::mem::take(&mut config.machines);
        let (control, compute): (Vec<MachinePool>, Vec<MachinePool>) = machines
            .into_iter()
            .partition(|pool| pool.name == CONTROL_PLANE_POOL);
        if config.control_plane.is_none() {
            config.control_plane = control.into_iter().next();
        }
        if config.compute.is_empty() {
            config.compute = compute;
        }
        migrated.push("machines".to_string());
    }

    Ok(migrated)
}
