//! Property tests for loading persisted install configs.

use proptest::prelude::*;

use clustergen::asset::installconfig::{InstallConfigAsset, INSTALL_CONFIG_FILENAME};
use clustergen::asset::Asset;
use clustergen::domain::entities::{
    ClusterNetworkEntry, InstallConfig, MachinePool, NonePlatform,
};
use clustergen::domain::policies::{DefaultsPolicy, StandardDefaults};
use clustergen::domain::value_objects::Cidr;
use clustergen::infrastructure::MemoryFetcher;

fn cluster_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,14}").unwrap()
}

fn install_config() -> impl Strategy<Value = InstallConfig> {
    (
        cluster_name(),
        1i64..=5,
        proptest::collection::vec(("[a-z]{1,8}", 0i64..=10), 0..=3),
        1u8..=200,
        20u8..=26,
    )
        .prop_map(|(name, masters, pools, octet, host_prefix)| {
            let mut config = InstallConfig::new(name);
            config.base_domain = "example.com".to_string();
            config.pull_secret = r#"{"auths":{}}"#.to_string();
            config.platform.none = Some(NonePlatform {});
            config.control_plane = Some(MachinePool::new("master", masters));
            config.compute = pools
                .into_iter()
                .map(|(name, replicas)| MachinePool::new(name, replicas))
                .collect();
            config.networking.cluster_network.push(ClusterNetworkEntry {
                cidr: Cidr::ipv4(10, octet, 0, 0, 16),
                host_prefix,
            });
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a file the generator writes loads back to identical bytes.
    #[test]
    fn property_persisted_config_loads_unchanged(config in install_config()) {
        let mut config = config;
        StandardDefaults.apply(&mut config).unwrap();
        let yaml = serde_yaml_ng::to_string(&config).unwrap();

        let fetcher = MemoryFetcher::new().with_file(INSTALL_CONFIG_FILENAME, yaml.clone());
        let mut asset = InstallConfigAsset::default();

        prop_assert!(asset.load(&fetcher).unwrap());
        prop_assert_eq!(asset.config().unwrap(), &config);
        prop_assert_eq!(asset.files()[0].content_str().unwrap(), yaml.as_str());
    }

    /// PROPERTY: loading arbitrary text never panics.
    #[test]
    fn property_load_never_panics(text in "(?s).{0,256}") {
        let fetcher = MemoryFetcher::new().with_file(INSTALL_CONFIG_FILENAME, text);
        let mut asset = InstallConfigAsset::default();
        let _ = asset.load(&fetcher);
    }
}
