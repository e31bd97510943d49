//! Install config validation
//!
//! Every rule runs; violations are collected rather than returned on the
//! first failure, so a user sees everything wrong with a file at once.

use std::fmt;

use crate::domain::entities::{
    InstallConfig, MachinePool, NetworkingConfig, Platform, CONTROL_PLANE_POOL,
    INSTALL_CONFIG_VERSION,
};
use crate::domain::value_objects::Cidr;

/// One violated rule, addressed by its field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn required(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: "Required value".to_string(),
        }
    }

    pub fn required_with(path: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: format!("Required value: {}", detail),
        }
    }

    pub fn invalid(path: impl Into<String>, value: impl fmt::Display, detail: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            message: format!("Invalid value: \"{}\": {}", value, detail),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Aggregate of violated rules
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// True when some violation is reported for `path`
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "no errors"),
            [only] => write!(f, "{}", only),
            many => {
                write!(f, "[")?;
                for (i, err) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validation collaborator for the install config materializer
pub trait ConfigValidator {
    /// Return every violated rule; empty means valid
    fn validate(&self, config: &InstallConfig) -> ValidationErrors;
}

/// The rule set shipped with clustergen
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValidator;

const SSH_KEY_PREFIXES: &[&str] = &[
    "ssh-rsa",
    "ssh-ed25519",
    "ssh-dss",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "sk-ssh-ed25519@openssh.com",
    "sk-ecdsa-sha2-nistp256@openssh.com",
];

impl ConfigValidator for StandardValidator {
    fn validate(&self, config: &InstallConfig) -> ValidationErrors {
        let mut errs = ValidationErrors::new();

        if config.api_version.is_empty() {
            errs.push(FieldError::required("apiVersion"));
        } else if config.api_version != INSTALL_CONFIG_VERSION {
            errs.push(FieldError::invalid(
                "apiVersion",
                &config.api_version,
                format!("install-config version must be \"{}\"", INSTALL_CONFIG_VERSION),
            ));
        }

        if config.metadata.name.is_empty() {
            errs.push(FieldError::required("metadata.name"));
        } else if let Err(detail) = validate_dns1123_label(&config.metadata.name) {
            errs.push(FieldError::invalid("metadata.name", &config.metadata.name, detail));
        }

        if config.base_domain.is_empty() {
            errs.push(FieldError::required("baseDomain"));
        } else if let Err(detail) = validate_domain_name(&config.base_domain) {
            errs.push(FieldError::invalid("baseDomain", &config.base_domain, detail));
        }

        validate_pull_secret(&config.pull_secret, &mut errs);

        if !config.ssh_key.is_empty() {
            if let Err(detail) = validate_ssh_key(&config.ssh_key) {
                errs.push(FieldError::invalid("sshKey", &config.ssh_key, detail));
            }
        }

        validate_networking(&config.networking, &mut errs);
        validate_machine_pools(config, &mut errs);
        validate_platform(&config.platform, &mut errs);

        errs
    }
}

fn validate_dns1123_label(value: &str) -> Result<(), String> {
    if value.len() > 63 {
        return Err("must be no more than 63 characters".to_string());
    }
    let valid_chars = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let starts_ok = value.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
    let ends_ok = value.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    if valid_chars && starts_ok && ends_ok {
        Ok(())
    } else {
        Err("a DNS-1123 label must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character"
            .to_string())
    }
}

fn validate_domain_name(value: &str) -> Result<(), String> {
    let trimmed = value.strip_suffix('.').unwrap_or(value);
    if trimmed.len() > 253 {
        return Err("must be no more than 253 characters".to_string());
    }
    for label in trimmed.split('.') {
        validate_dns1123_label(label)
            .map_err(|_| "a DNS-1123 subdomain must consist of valid DNS-1123 labels".to_string())?;
    }
    Ok(())
}

fn validate_pull_secret(secret: &str, errs: &mut ValidationErrors) {
    if secret.is_empty() {
        errs.push(FieldError::required("pullSecret"));
        return;
    }
    match serde_json::from_str::<serde_json::Value>(secret) {
        Ok(serde_json::Value::Object(map)) if map.contains_key("auths") => {}
        Ok(_) => errs.push(FieldError::invalid(
            "pullSecret",
            "<redacted>",
            "auths required",
        )),
        Err(e) => errs.push(FieldError::invalid("pullSecret", "<redacted>", e)),
    }
}

fn validate_ssh_key(key: &str) -> Result<(), String> {
    let mut fields = key.split_whitespace();
    let kind = fields.next().unwrap_or_default();
    if !SSH_KEY_PREFIXES.contains(&kind) {
        return Err(format!("unrecognized SSH key type \"{}\"", kind));
    }
    if fields.next().is_none() {
        return Err("SSH key is missing its key data".to_string());
    }
    Ok(())
}

fn validate_network_address(path: &str, cidr: &Cidr, errs: &mut ValidationErrors) {
    if !cidr.is_network_address() {
        errs.push(FieldError::invalid(
            path,
            cidr,
            format!(
                "invalid network address. got {}, expecting {}/{}",
                cidr,
                cidr.network(),
                cidr.prefix()
            ),
        ));
    }
}

fn validate_networking(networking: &NetworkingConfig, errs: &mut ValidationErrors) {
    if networking.network_type.is_empty() {
        errs.push(FieldError::required("networking.networkType"));
    }

    if let Some(machine_cidr) = &networking.machine_cidr {
        validate_network_address("networking.machineCIDR", machine_cidr, errs);
    }

    for (i, entry) in networking.cluster_network.iter().enumerate() {
        let path = format!("networking.clusterNetwork[{}]", i);
        validate_network_address(&format!("{}.cidr", path), &entry.cidr, errs);
        if entry.host_prefix < entry.cidr.prefix() || entry.host_prefix > entry.cidr.address_bits() {
            errs.push(FieldError::invalid(
                format!("{}.hostPrefix", path),
                entry.host_prefix,
                format!(
                    "must be between {} and {}",
                    entry.cidr.prefix(),
                    entry.cidr.address_bits()
                ),
            ));
        }
    }

    for (i, service) in networking.service_network.iter().enumerate() {
        let path = format!("networking.serviceNetwork[{}]", i);
        validate_network_address(&path, service, errs);
        for (j, entry) in networking.cluster_network.iter().enumerate() {
            if service.overlaps(&entry.cidr) {
                errs.push(FieldError::invalid(
                    path.clone(),
                    service,
                    format!("service network overlaps with clusterNetwork[{}]", j),
                ));
            }
        }
    }
}

fn validate_machine_pools(config: &InstallConfig, errs: &mut ValidationErrors) {
    let selected = config.platform.name();
    let check_pool_platform = |path: String, pool: &MachinePool, errs: &mut ValidationErrors| {
        for name in pool.platform.configured() {
            if Some(name) != selected {
                errs.push(FieldError::invalid(
                    format!("{}.platform.{}", path, name),
                    name,
                    "machine pool platform must match the cluster platform",
                ));
            }
        }
    };

    match &config.control_plane {
        None => errs.push(FieldError::required("controlPlane")),
        Some(pool) => {
            check_pool_platform("controlPlane".to_string(), pool, errs);
            if pool.name != CONTROL_PLANE_POOL {
                errs.push(FieldError::invalid(
                    "controlPlane.name",
                    &pool.name,
                    format!("name must be \"{}\"", CONTROL_PLANE_POOL),
                ));
            }
            if pool.replicas.is_some_and(|r| r < 1) {
                errs.push(FieldError::invalid(
                    "controlPlane.replicas",
                    pool.replicas.unwrap_or_default(),
                    "number of control plane replicas must be positive",
                ));
            }
        }
    }

    for (i, pool) in config.compute.iter().enumerate() {
        check_pool_platform(format!("compute[{}]", i), pool, errs);
        if pool.name.is_empty() {
            errs.push(FieldError::required(format!("compute[{}].name", i)));
        }
        if pool.replicas.is_some_and(|r| r < 0) {
            errs.push(FieldError::invalid(
                format!("compute[{}].replicas", i),
                pool.replicas.unwrap_or_default(),
                "number of replicas must not be negative",
            ));
        }
    }
}

fn validate_platform(platform: &Platform, errs: &mut ValidationErrors) {
    let configured = platform.configured();
    match configured.as_slice() {
        [] => {
            errs.push(FieldError::required_with(
                "platform",
                "must specify one of the platforms (aws, libvirt, none, openstack)",
            ));
            return;
        }
        [_] => {}
        [first, second, ..] => errs.push(FieldError::invalid(
            "platform",
            configured.join(", "),
            format!(
                "must only specify a single type of platform; cannot use both \"{}\" and \"{}\"",
                first, second
            ),
        )),
    }

    if let Some(aws) = &platform.aws {
        if aws.region.is_empty() {
            errs.push(FieldError::required("platform.aws.region"));
        }
    }
    if let Some(libvirt) = &platform.libvirt {
        if libvirt.uri.is_empty() {
            errs.push(FieldError::required("platform.libvirt.URI"));
        }
        if libvirt.network.interface.is_empty() {
            errs.push(FieldError::required("platform.libvirt.network.if"));
        }
    }
    if let Some(openstack) = &platform.openstack {
        if openstack.region.is_empty() {
            errs.push(FieldError::required("platform.openstack.region"));
        }
        if openstack.cloud.is_empty() {
            errs.push(FieldError::required("platform.openstack.cloud"));
        }
        if openstack.external_network.is_empty() {
            errs.push(FieldError::required("platform.openstack.externalNetwork"));
        }
    }
}
