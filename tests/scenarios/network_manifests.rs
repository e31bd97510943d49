//! Scenario: Network Manifests
//!
//! Journey: An operator with a multi-network install config generates the
//! cluster network manifests, then swaps in their own CRD templates.

use std::fs;

use clustergen::application::{CreateOptions, CreateTarget, CreateUseCase};
use clustergen::asset::installconfig::InstallConfigAsset;
use clustergen::asset::Asset;
use clustergen::domain::entities::InstallConfig;
use clustergen::domain::policies::{ConfigValidator, DefaultsPolicy, ValidationErrors};
use clustergen::error::{ClustergenResult, ErrorKind};
use clustergen::infrastructure::LocalFs;
use insta::assert_snapshot;
use tempfile::tempdir;

use crate::common::*;

#[test]
fn scenario_two_cluster_networks_keep_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), TWO_NETWORKS_CONFIG).unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    CreateUseCase::new(LocalFs::new()).execute(&options).unwrap();

    let network =
        fs::read_to_string(dir.path().join("manifests/cluster-network-02-config.yml")).unwrap();
    assert_snapshot!(network.trim_end(), @r"
    apiVersion: config.openshift.io/v1
    kind: Network
    metadata:
      name: cluster
    spec:
      clusterNetwork:
      - cidr: 10.0.0.0/16
        hostPrefix: 23
      - cidr: 10.1.0.0/16
        hostPrefix: 24
      serviceNetwork:
      - 172.30.0.0/16
      networkType: OpenShiftSDN
    ");

    let cluster =
        fs::read_to_string(dir.path().join("openshift/99_openshift-cluster-api_cluster.yaml"))
            .unwrap();
    assert!(cluster.contains("name: twonet\n"));
    assert!(cluster.contains("- 10.0.0.0/16\n"));
    assert!(cluster.contains("- 10.1.0.0/16\n"));
}

#[test]
fn scenario_crd_manifest_bundles_both_crds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), TWO_NETWORKS_CONFIG).unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    CreateUseCase::new(LocalFs::new()).execute(&options).unwrap();

    let crds = fs::read_to_string(dir.path().join("manifests/cluster-network-01-crd.yml")).unwrap();
    assert!(crds.starts_with("\n---\n"));
    assert!(crds.contains("name: networks.config.openshift.io\n"));
    assert!(crds.contains("name: networks.operator.openshift.io\n"));
    assert!(
        crds.find("networks.config.openshift.io").unwrap()
            < crds.find("networks.operator.openshift.io").unwrap()
    );
}

#[test]
fn scenario_empty_cluster_network_is_refused() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("install-config.yaml"),
        NO_CLUSTER_NETWORK_CONFIG,
    )
    .unwrap();

    // Bypass the standard defaults so the empty list reaches the network asset
    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    let seeds: Vec<Box<dyn Asset>> =
        vec![Box::new(InstallConfigAsset::with_policies(KeepAsIs, AcceptAll))];
    let err = CreateUseCase::new(LocalFs::new())
        .execute_with(&options, seeds)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingInput);
    assert!(!dir.path().join("manifests").exists());
    assert!(!dir.path().join("openshift").exists());
}

#[test]
fn scenario_persisted_templates_replace_builtin_crds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), TWO_NETWORKS_CONFIG).unwrap();
    fs::create_dir_all(dir.path().join("templates")).unwrap();
    fs::write(
        dir.path().join("templates/cluster-network-crd.yaml"),
        "kind: CustomResourceDefinition\nmetadata:\n  name: custom-config\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("templates/cluster-network-operator-crd.yaml"),
        "kind: CustomResourceDefinition\nmetadata:\n  name: custom-operator\n",
    )
    .unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    CreateUseCase::new(LocalFs::new()).execute(&options).unwrap();

    let crds = fs::read_to_string(dir.path().join("manifests/cluster-network-01-crd.yml")).unwrap();
    assert_eq!(
        crds,
        "\n---\nkind: CustomResourceDefinition\nmetadata:\n  name: custom-config\n\
         \n---\nkind: CustomResourceDefinition\nmetadata:\n  name: custom-operator\n"
    );
}

struct KeepAsIs;

impl DefaultsPolicy for KeepAsIs {
    fn apply(&self, _config: &mut InstallConfig) -> ClustergenResult<()> {
        Ok(())
    }
}

struct AcceptAll;

impl ConfigValidator for AcceptAll {
    fn validate(&self, _config: &InstallConfig) -> ValidationErrors {
        ValidationErrors::new()
    }
}

#[test]
fn scenario_blocked_output_leaves_nothing_behind() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("install-config.yaml"), TWO_NETWORKS_CONFIG).unwrap();
    // a regular file where the cluster-api manifest's directory should go
    fs::write(dir.path().join("openshift"), "not a directory").unwrap();

    let options = CreateOptions::new(dir.path(), CreateTarget::Manifests);
    let err = CreateUseCase::new(LocalFs::new())
        .execute(&options)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!dir.path().join("manifests/cluster-network-01-crd.yml").exists());
    assert!(!dir.path().join("manifests/cluster-network-02-config.yml").exists());
    assert!(!dir.path().join("manifests").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("openshift")).unwrap(),
        "not a directory"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("install-config.yaml")).unwrap(),
        TWO_NETWORKS_CONFIG
    );
}
