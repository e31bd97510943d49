//! Property tests for the cluster network entries of the Network manifest.

use proptest::prelude::*;

use clustergen::domain::entities::{ClusterNetworkEntry, Network, NetworkingConfig};
use clustergen::domain::value_objects::Cidr;

/// Between one and four distinct `10.N.0.0/16` blocks in random order
fn cluster_networks() -> impl Strategy<Value = Vec<ClusterNetworkEntry>> {
    let octets: Vec<u8> = (0..=255).collect();
    (Just(octets).prop_shuffle(), 1usize..=4, 16u8..=28).prop_map(|(octets, count, prefix)| {
        octets
            .into_iter()
            .take(count)
            .map(|octet| ClusterNetworkEntry {
                cidr: Cidr::ipv4(10, octet, 0, 0, 16),
                host_prefix: prefix,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every install config entry appears once, in input order.
    #[test]
    fn property_cluster_network_order_is_kept(entries in cluster_networks()) {
        let networking = NetworkingConfig {
            cluster_network: entries.clone(),
            service_network: vec![Cidr::ipv4(172, 30, 0, 0, 16)],
            network_type: "OpenShiftSDN".to_string(),
            ..NetworkingConfig::default()
        };

        let network = Network::from_networking(&networking).unwrap();

        prop_assert_eq!(network.spec.cluster_network.len(), entries.len());
        for (out, input) in network.spec.cluster_network.iter().zip(&entries) {
            prop_assert_eq!(&out.cidr, &input.cidr.to_string());
            prop_assert_eq!(out.host_prefix, u32::from(input.host_prefix));
        }

        let ranges = network.cluster_network_ranges();
        prop_assert_eq!(ranges.pods.len(), entries.len());
        prop_assert_eq!(ranges.services, vec!["172.30.0.0/16".to_string()]);
    }

    /// PROPERTY: `Cidr` parsing never panics on arbitrary short input.
    #[test]
    fn property_cidr_parse_never_panics(input in "(?s).{0,48}") {
        let _ = input.parse::<Cidr>();
    }
}
