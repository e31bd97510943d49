use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// clustergen - materialize cluster install assets from a dependency graph
#[derive(Parser, Debug)]
#[command(name = "clustergen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit machine-readable JSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an asset and everything it depends on
    Create {
        #[command(subcommand)]
        target: CreateCommand,
    },

    /// Print the dependency tree of the manifests target
    Graph,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CreateCommand {
    /// Write install-config.yaml
    InstallConfig {
        #[command(flatten)]
        args: CreateArgs,
    },

    /// Write the network and cluster-api manifests
    Manifests {
        #[command(flatten)]
        args: CreateArgs,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// Asset directory; persisted assets are read from here and output written here
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Inputs file (defaults to clustergen.toml in the asset directory)
    #[arg(long)]
    pub inputs: Option<PathBuf>,
}
