//! Inputs loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::InputWarning;
use crate::error::{ClustergenError, ClustergenResult};

use super::types::{InstallInputs, PlatformKind};

/// Inputs file looked up in the target directory when none is given
pub const DEFAULT_INPUTS_FILE: &str = "clustergen.toml";

/// Load inputs and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ClustergenResult<(InstallInputs, Vec<InputWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let inputs: InstallInputs = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ClustergenError::InvalidInputs {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            InputWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((inputs, warnings))
}

/// Load inputs for a run in `dir`.
///
/// An explicit file must exist. Otherwise `dir/clustergen.toml` is used when
/// present, and empty inputs when not. Environment overrides and `*_file`
/// indirections are applied last.
pub fn load_or_default(
    dir: &Path,
    explicit: Option<&Path>,
) -> ClustergenResult<(InstallInputs, Vec<InputWarning>)> {
    let (inputs, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let default_path = dir.join(DEFAULT_INPUTS_FILE);
            if default_path.exists() {
                load_with_warnings(&default_path)?
            } else {
                debug!(dir = %dir.display(), "no inputs file, starting from empty inputs");
                (InstallInputs::default(), Vec::new())
            }
        }
    };

    let inputs = with_env_overrides(inputs)?;
    let inputs = resolve_files(inputs)?;
    Ok((inputs, warnings))
}

/// Apply environment variable overrides (CLUSTERGEN_* prefix)
pub fn with_env_overrides(inputs: InstallInputs) -> ClustergenResult<InstallInputs> {
    with_overrides_from(inputs, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from(
    mut inputs: InstallInputs,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClustergenResult<InstallInputs> {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(name) = non_empty("CLUSTERGEN_CLUSTER_NAME") {
        inputs.cluster_name = Some(name);
    }
    if let Some(domain) = non_empty("CLUSTERGEN_BASE_DOMAIN") {
        inputs.base_domain = Some(domain);
    }
    if let Some(secret) = non_empty("CLUSTERGEN_PULL_SECRET") {
        inputs.pull_secret = Some(secret);
    }
    if let Some(key) = non_empty("CLUSTERGEN_SSH_KEY") {
        inputs.ssh_key = Some(key);
    }
    if let Some(platform) = non_empty("CLUSTERGEN_PLATFORM") {
        let kind: PlatformKind =
            platform
                .parse()
                .map_err(|message| ClustergenError::InvalidInputs {
                    file: PathBuf::from("CLUSTERGEN_PLATFORM"),
                    message,
                })?;
        inputs.platform.kind = Some(kind);
    }
    if let Some(region) = non_empty("CLUSTERGEN_REGION") {
        inputs.platform.region = Some(region);
    }

    Ok(inputs)
}

/// Read `pull_secret_file` and `ssh_key_file` into their inline fields
/// when the inline value is unset.
pub fn resolve_files(mut inputs: InstallInputs) -> ClustergenResult<InstallInputs> {
    if inputs.pull_secret.is_none() {
        if let Some(path) = &inputs.pull_secret_file {
            inputs.pull_secret = Some(read_input_file(path)?);
        }
    }
    if inputs.ssh_key.is_none() {
        if let Some(path) = &inputs.ssh_key_file {
            inputs.ssh_key = Some(read_input_file(path)?);
        }
    }
    Ok(inputs)
}

fn read_input_file(path: &Path) -> ClustergenResult<String> {
    let expanded = expand_home(path);
    fs::read_to_string(&expanded)
        .map(|content| content.trim().to_string())
        .map_err(|e| ClustergenError::InvalidInputs {
            file: expanded.clone(),
            message: e.to_string(),
        })
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cluster_name",
        "base_domain",
        "pull_secret",
        "pull_secret_file",
        "ssh_key",
        "ssh_key_file",
        "platform",
        "type",
        "region",
        "libvirt_uri",
        "cloud",
        "external_network",
        "compute_flavor",
        "user_tags",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
