//! Error types for clustergen
//!
//! Uses `thiserror` for library errors. The binary wraps them in `anyhow`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::policies::ValidationErrors;
use crate::domain::ports::FsError;
use crate::domain::services::UpgradeError;

/// Result type alias for clustergen operations
pub type ClustergenResult<T> = Result<T, ClustergenError>;

/// The step of a resolution pass an asset failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reconstituting the asset from persisted state
    Load,
    /// Resolving the assets it depends on
    Dependencies,
    /// Generating the asset from its resolved dependencies
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => write!(f, "load"),
            Stage::Dependencies => write!(f, "fetch dependency of"),
            Stage::Generate => write!(f, "generate"),
        }
    }
}

/// Coarse classification of a failure, independent of how deeply it is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotInitialized,
    MissingInput,
    Upgrade,
    Defaults,
    Validation,
    Serialization,
    Fetch,
    Inputs,
    Cycle,
    Io,
}

/// Main error type for clustergen operations
#[derive(Error, Debug)]
pub enum ClustergenError {
    /// A derived value or file list was requested before materialization
    #[error("{accessor} called before initialization")]
    NotInitialized { accessor: &'static str },

    /// A required user input or record section is absent
    #[error("{field} must be specified")]
    MissingInput { field: String },

    /// Deprecated fields could not be migrated to the current schema
    #[error("failed to upconvert install config")]
    Upgrade(#[source] UpgradeError),

    /// The defaults policy could not complete
    #[error("failed to set defaults for install config: {message}")]
    Defaults { message: String },

    /// Every violated validation rule, reported together
    #[error("invalid {subject}: {errors}")]
    Validation {
        subject: String,
        errors: ValidationErrors,
    },

    /// Malformed structured data in a persisted file
    #[error("failed to unmarshal {file}")]
    Deserialize {
        file: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A record could not be rendered to YAML
    #[error("failed to marshal {what}")]
    Serialize {
        what: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Reading persisted state failed for a reason other than absence
    #[error("failed to fetch {name}")]
    Fetch {
        name: String,
        #[source]
        source: FsError,
    },

    /// A generated file could not be written to the output directory
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The user inputs file could not be parsed
    #[error("invalid inputs file {file}: {message}")]
    InvalidInputs { file: PathBuf, message: String },

    /// Stage-identifying wrapper added by the resolver
    #[error("failed to {stage} \"{asset}\"")]
    Asset {
        asset: &'static str,
        stage: Stage,
        #[source]
        source: Box<ClustergenError>,
    },

    /// The asset already failed earlier in the same resolution pass;
    /// `kind` is the kind of that first failure
    #[error("asset \"{asset}\" failed earlier in this resolution pass")]
    PreviouslyFailed { asset: &'static str, kind: ErrorKind },

    /// Dependency declarations do not form a DAG
    #[error("dependency cycle detected: {}", .chain.join(" -> "))]
    DependencyCycle { chain: Vec<&'static str> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClustergenError {
    /// Wrap an error with the asset and stage it surfaced in
    pub fn in_asset(asset: &'static str, stage: Stage, source: ClustergenError) -> Self {
        ClustergenError::Asset {
            asset,
            stage,
            source: Box::new(source),
        }
    }

    /// The innermost error beneath any resolver wrappers
    pub fn root(&self) -> &ClustergenError {
        let mut current = self;
        while let ClustergenError::Asset { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            ClustergenError::NotInitialized { .. } => ErrorKind::NotInitialized,
            ClustergenError::MissingInput { .. } => ErrorKind::MissingInput,
            ClustergenError::Upgrade(_) => ErrorKind::Upgrade,
            ClustergenError::Defaults { .. } => ErrorKind::Defaults,
            ClustergenError::Validation { .. } => ErrorKind::Validation,
            ClustergenError::Deserialize { .. } | ClustergenError::Serialize { .. } => {
                ErrorKind::Serialization
            }
            ClustergenError::Fetch { .. } => ErrorKind::Fetch,
            ClustergenError::InvalidInputs { .. } => ErrorKind::Inputs,
            ClustergenError::PreviouslyFailed { kind, .. } => *kind,
            ClustergenError::DependencyCycle { .. } => ErrorKind::Cycle,
            ClustergenError::Write { .. } | ClustergenError::Io(_) => ErrorKind::Io,
            ClustergenError::Asset { .. } => unreachable!("root() strips asset wrappers"),
        }
    }
}
