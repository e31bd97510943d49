//! Scenario: Fresh Install
//!
//! Journey: An operator with nothing but inputs creates an install config,
//! then the manifests from it.
//!
//! Steps:
//! 1. Empty asset directory, inputs for an AWS cluster
//! 2. `create install-config` writes a defaulted, validated record
//! 3. `create manifests` picks the persisted record up
//! 4. Editing the persisted record changes the next manifests run

use std::fs;

use clustergen::application::{CreateOptions, CreateTarget, CreateUseCase};
use clustergen::config::InstallInputs;
use clustergen::domain::entities::InstallConfig;
use clustergen::infrastructure::LocalFs;
use tempfile::tempdir;

use crate::common::*;

/// SCENARIO: inputs to install config to manifests
#[test]
fn scenario_fresh_install_then_manifests() {
    let dir = tempdir().unwrap();
    let use_case = CreateUseCase::new(LocalFs::new());

    // Step 2
    let options =
        CreateOptions::new(dir.path(), CreateTarget::InstallConfig).with_inputs(aws_inputs());
    let result = use_case.execute(&options).unwrap();
    assert_eq!(result.written.len(), 1);

    let written = fs::read_to_string(dir.path().join("install-config.yaml")).unwrap();
    let config: InstallConfig = serde_yaml_ng::from_str(&written).unwrap();
    assert_eq!(config.api_version, "v1beta4");
    assert_eq!(config.cluster_name(), "demo");
    assert_eq!(config.platform.aws.as_ref().unwrap().region, "us-west-2");
    assert_eq!(config.control_plane.as_ref().unwrap().replicas, Some(3));
    assert_eq!(config.compute[0].name, "worker");
    assert_eq!(config.ssh_key, SSH_KEY);

    // Step 3: no inputs this time, the persisted record carries everything
    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests)
        .with_inputs(InstallInputs::default());
    let result = use_case.execute(&options).unwrap();
    assert_eq!(result.written.len(), 3);

    let cluster =
        fs::read_to_string(dir.path().join("openshift/99_openshift-cluster-api_cluster.yaml"))
            .unwrap();
    assert!(cluster.contains("name: demo\n"));
    assert!(cluster.contains("10.128.0.0/14"));

    // Step 4
    let edited = written.replace("10.128.0.0/14", "10.132.0.0/14");
    fs::write(dir.path().join("install-config.yaml"), edited).unwrap();
    use_case.execute(&options).unwrap();

    let network =
        fs::read_to_string(dir.path().join("manifests/cluster-network-02-config.yml")).unwrap();
    assert!(network.contains("- cidr: 10.132.0.0/14\n"));
}

/// SCENARIO: a missing input is reported and nothing is written
#[test]
fn scenario_missing_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut inputs = none_inputs();
    inputs.base_domain = None;

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests).with_inputs(inputs);
    let err = CreateUseCase::new(LocalFs::new())
        .execute(&options)
        .unwrap_err();

    assert_eq!(err.root().to_string(), "baseDomain must be specified");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// SCENARIO: every validation failure is reported at once
#[test]
fn scenario_invalid_inputs_list_every_field() {
    let dir = tempdir().unwrap();
    let mut inputs = none_inputs();
    inputs.cluster_name = Some("Not_A_Label".to_string());
    inputs.ssh_key = Some("ssh-foo AAAA".to_string());

    let options = CreateOptions::new(dir.path(), CreateTarget::InstallConfig).with_inputs(inputs);
    let err = CreateUseCase::new(LocalFs::new())
        .execute(&options)
        .unwrap_err();

    let message = err.root().to_string();
    assert!(message.starts_with("invalid install config: ["), "{message}");
    assert!(message.contains("metadata.name"), "{message}");
    assert!(message.contains("sshKey"), "{message}");
    assert!(!dir.path().join("install-config.yaml").exists());
}
