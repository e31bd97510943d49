//! Static templates shipped with the binary

mod network_crds;

pub use network_crds::{NetworkCrds, NETWORK_CRD_FILENAME, NETWORK_OPERATOR_CRD_FILENAME};
