//! Common test utilities for clustergen integration tests.
//!
//! - Input builders for each platform
//! - Fixtures: persisted install configs in current and legacy formats

#![allow(dead_code)]

use clustergen::config::{InstallInputs, PlatformKind};

pub const PULL_SECRET: &str = r#"{"auths":{"quay.io":{"auth":"c2VjcmV0"}}}"#;

pub const SSH_KEY: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIJx user@host";

/// Inputs for a `none` platform cluster named `demo`
pub fn none_inputs() -> InstallInputs {
    let mut inputs = InstallInputs {
        cluster_name: Some("demo".to_string()),
        base_domain: Some("example.com".to_string()),
        pull_secret: Some(PULL_SECRET.to_string()),
        ssh_key: Some(SSH_KEY.to_string()),
        ..InstallInputs::default()
    };
    inputs.platform.kind = Some(PlatformKind::None);
    inputs
}

/// Inputs for an AWS cluster in `us-west-2`
pub fn aws_inputs() -> InstallInputs {
    let mut inputs = none_inputs();
    inputs.platform.kind = Some(PlatformKind::Aws);
    inputs.platform.region = Some("us-west-2".to_string());
    inputs
}

/// A current-version install config with two cluster networks
pub const TWO_NETWORKS_CONFIG: &str = r#"apiVersion: v1beta4
baseDomain: example.com
metadata:
  name: twonet
networking:
  networkType: OpenShiftSDN
  machineCIDR: 192.168.126.0/24
  clusterNetwork:
  - cidr: 10.0.0.0/16
    hostPrefix: 23
  - cidr: 10.1.0.0/16
    hostPrefix: 24
  serviceNetwork:
  - 172.30.0.0/16
controlPlane:
  name: master
  replicas: 3
compute:
- name: worker
  replicas: 2
platform:
  none: {}
pullSecret: '{"auths":{"quay.io":{"auth":"c2VjcmV0"}}}'
"#;

/// A v1beta3 install config using every deprecated field
pub const LEGACY_CONFIG: &str = r#"apiVersion: v1beta3
baseDomain: example.com
metadata:
  name: legacy
networking:
  type: OpenShiftSDN
  serviceCIDR: 172.30.0.0/16
  clusterNetworks:
  - cidr: 10.128.0.0/14
    hostSubnetLength: 9
machines:
- name: master
  replicas: 3
- name: worker
  replicas: 5
platform:
  none: {}
pullSecret: '{"auths":{}}'
"#;

/// A current-version install config whose cluster network list is empty
pub const NO_CLUSTER_NETWORK_CONFIG: &str = r#"apiVersion: v1beta4
baseDomain: example.com
metadata:
  name: nonet
platform:
  none: {}
pullSecret: '{"auths":{}}'
"#;
