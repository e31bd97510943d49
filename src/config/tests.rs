//! Tests for the config module

use super::loader::{levenshtein, with_overrides_from};
use super::*;
use crate::error::{ClustergenError, ErrorKind};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_inputs_default_is_empty() {
    let inputs = InstallInputs::default();

    assert!(inputs.cluster_name.is_none());
    assert!(inputs.base_domain.is_none());
    assert!(inputs.platform.kind.is_none());
}

#[test]
fn test_inputs_parse_toml() {
    let toml = r#"
cluster_name = "demo"
base_domain = "example.com"
pull_secret = '{"auths":{}}'

[platform]
type = "aws"
region = "us-west-2"

[platform.user_tags]
team = "infra"
"#;

    let inputs: InstallInputs = toml::from_str(toml).unwrap();

    assert_eq!(inputs.cluster_name.as_deref(), Some("demo"));
    assert_eq!(inputs.base_domain.as_deref(), Some("example.com"));
    assert_eq!(inputs.platform.kind, Some(PlatformKind::Aws));
    assert_eq!(inputs.platform.region.as_deref(), Some("us-west-2"));
    assert_eq!(inputs.platform.user_tags.get("team").unwrap(), "infra");
}

#[test]
fn test_platform_kind_from_str() {
    assert_eq!("AWS".parse::<PlatformKind>().unwrap(), PlatformKind::Aws);
    assert_eq!(
        " libvirt ".parse::<PlatformKind>().unwrap(),
        PlatformKind::Libvirt
    );
    assert!("azure".parse::<PlatformKind>().is_err());
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clustergen.toml");
    fs::write(
        &path,
        "cluster_name = \"demo\"\nbase_domian = \"example.com\"\n",
    )
    .unwrap();

    let (inputs, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(inputs.cluster_name.as_deref(), Some("demo"));
    assert!(inputs.base_domain.is_none());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "base_domian");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("base_domain"));
}

#[test]
fn test_load_with_warnings_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clustergen.toml");
    fs::write(&path, "cluster_name = \n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();

    assert!(matches!(err, ClustergenError::InvalidInputs { .. }));
    assert_eq!(err.kind(), ErrorKind::Inputs);
}

#[test]
fn test_load_or_default_without_file_is_empty() {
    let dir = tempdir().unwrap();

    let (inputs, warnings) = load_or_default(dir.path(), None).unwrap();

    assert!(warnings.is_empty());
    assert!(inputs.platform.user_tags.is_empty());
}

#[test]
fn test_load_or_default_reads_default_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_INPUTS_FILE),
        "base_domain = \"from-file.example.com\"\n",
    )
    .unwrap();

    let (inputs, _) = load_or_default(dir.path(), None).unwrap();

    if std::env::var("CLUSTERGEN_BASE_DOMAIN").is_err() {
        assert_eq!(inputs.base_domain.as_deref(), Some("from-file.example.com"));
    }
}

#[test]
fn test_load_or_default_explicit_file_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_or_default(dir.path(), Some(&missing)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_env_overrides_win() {
    let mut inputs = InstallInputs::default();
    inputs.cluster_name = Some("from-file".to_string());

    let inputs = with_overrides_from(
        inputs,
        env(&[
            ("CLUSTERGEN_CLUSTER_NAME", "from-env"),
            ("CLUSTERGEN_PLATFORM", "openstack"),
            ("CLUSTERGEN_REGION", "regionOne"),
        ]),
    )
    .unwrap();

    assert_eq!(inputs.cluster_name.as_deref(), Some("from-env"));
    assert_eq!(inputs.platform.kind, Some(PlatformKind::Openstack));
    assert_eq!(inputs.platform.region.as_deref(), Some("regionOne"));
}

#[test]
fn test_env_overrides_ignore_blank_values() {
    let mut inputs = InstallInputs::default();
    inputs.base_domain = Some("example.com".to_string());

    let inputs = with_overrides_from(inputs, env(&[("CLUSTERGEN_BASE_DOMAIN", "  ")])).unwrap();

    assert_eq!(inputs.base_domain.as_deref(), Some("example.com"));
}

#[test]
fn test_env_override_unknown_platform_is_an_error() {
    let err = with_overrides_from(
        InstallInputs::default(),
        env(&[("CLUSTERGEN_PLATFORM", "azure")]),
    )
    .unwrap_err();

    assert!(err.to_string().contains("unknown platform 'azure'"));
}

#[test]
fn test_resolve_files_reads_when_inline_unset() {
    let dir = tempdir().unwrap();
    let key_path = dir.path().join("id.pub");
    fs::write(&key_path, "ssh-ed25519 AAAA user@host\n").unwrap();

    let mut inputs = InstallInputs::default();
    inputs.ssh_key_file = Some(key_path);

    let inputs = resolve_files(inputs).unwrap();

    assert_eq!(inputs.ssh_key.as_deref(), Some("ssh-ed25519 AAAA user@host"));
}

#[test]
fn test_resolve_files_inline_wins() {
    let mut inputs = InstallInputs::default();
    inputs.pull_secret = Some("{\"auths\":{}}".to_string());
    inputs.pull_secret_file = Some("/definitely/not/here.json".into());

    let inputs = resolve_files(inputs).unwrap();

    assert_eq!(inputs.pull_secret.as_deref(), Some("{\"auths\":{}}"));
}

#[test]
fn test_resolve_files_missing_file_is_an_error() {
    let mut inputs = InstallInputs::default();
    inputs.pull_secret_file = Some("/definitely/not/here.json".into());

    let err = resolve_files(inputs).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Inputs);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("region", "region"), 0);
    assert_eq!(levenshtein("regoin", "region"), 2);
    assert_eq!(levenshtein("", "abc"), 3);
}
