//! Domain Policies
//!
//! Pluggable rules applied to an install config before it is persisted:
//! which unset fields receive defaults, and what makes a record valid.

mod defaults;
mod validation;

pub use defaults::{
    DefaultsPolicy, StandardDefaults, DEFAULT_AWS_REGION, DEFAULT_CLUSTER_NETWORK,
    DEFAULT_HOST_PREFIX, DEFAULT_LIBVIRT_INTERFACE, DEFAULT_LIBVIRT_URI, DEFAULT_MACHINE_CIDR,
    DEFAULT_NETWORK_TYPE, DEFAULT_REPLICAS, DEFAULT_SERVICE_NETWORK,
};
pub use validation::{ConfigValidator, FieldError, StandardValidator, ValidationErrors};
