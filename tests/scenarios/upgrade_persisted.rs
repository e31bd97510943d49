//! Scenario: Upgrading a Persisted Install Config
//!
//! Journey: An operator kept an install config from an older release and
//! runs the current generator against it.
//!
//! Success Criteria:
//! - Deprecated fields are migrated and rewritten in the current format
//! - Manifests built from the legacy file match the migrated record
//! - Unknown versions are refused without touching the file

use std::fs;

use clustergen::application::{CreateOptions, CreateTarget, CreateUseCase};
use clustergen::domain::entities::InstallConfig;
use clustergen::error::ErrorKind;
use clustergen::infrastructure::LocalFs;
use tempfile::tempdir;

use crate::common::*;

#[test]
fn scenario_legacy_config_is_rewritten_current() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), LEGACY_CONFIG).unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::InstallConfig);
    CreateUseCase::new(LocalFs::new()).execute(&options).unwrap();

    let written = fs::read_to_string(dir.path().join("install-config.yaml")).unwrap();
    assert!(written.starts_with("apiVersion: v1beta4\n"));
    assert!(!written.contains("hostSubnetLength"));
    assert!(!written.contains("serviceCIDR"));
    assert!(!written.contains("machines:"));

    let config: InstallConfig = serde_yaml_ng::from_str(&written).unwrap();
    assert_eq!(config.networking.network_type, "OpenShiftSDN");
    assert_eq!(config.networking.cluster_network[0].host_prefix, 23);
    assert_eq!(
        config.networking.service_network[0].to_string(),
        "172.30.0.0/16"
    );
    assert_eq!(config.control_plane.unwrap().replicas, Some(3));
    assert_eq!(config.compute.len(), 1);
    assert_eq!(config.compute[0].replicas, Some(5));
}

#[test]
fn scenario_manifests_from_legacy_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), LEGACY_CONFIG).unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    CreateUseCase::new(LocalFs::new()).execute(&options).unwrap();

    let network =
        fs::read_to_string(dir.path().join("manifests/cluster-network-02-config.yml")).unwrap();
    assert!(network.contains("- cidr: 10.128.0.0/14\n    hostPrefix: 23\n"));

    // the manifests target writes only its own files
    let persisted = fs::read_to_string(dir.path().join("install-config.yaml")).unwrap();
    assert_eq!(persisted, LEGACY_CONFIG);
}

#[test]
fn scenario_unknown_version_is_refused() {
    let dir = tempdir().unwrap();
    let future = LEGACY_CONFIG.replace("apiVersion: v1beta3", "apiVersion: v2");
    fs::write(dir.path().join("install-config.yaml"), &future).unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::InstallConfig);
    let err = CreateUseCase::new(LocalFs::new())
        .execute(&options)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upgrade);
    let persisted = fs::read_to_string(dir.path().join("install-config.yaml")).unwrap();
    assert_eq!(persisted, future);
}
