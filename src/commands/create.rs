use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use clustergen::application::{CreateOptions, CreateTarget, CreateUseCase};
use clustergen::config;
use clustergen::infrastructure::LocalFs;

use crate::cli::CreateCommand;

pub fn cmd_create(command: &CreateCommand, json: bool) -> Result<()> {
    let (target, args) = match command {
        CreateCommand::InstallConfig { args } => (CreateTarget::InstallConfig, args),
        CreateCommand::Manifests { args } => (CreateTarget::Manifests, args),
    };

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "create",
            "target": target.to_string(),
            "dir": args.dir.display().to_string(),
        }))?;
    }

    let (inputs, warnings) = config::load_or_default(&args.dir, args.inputs.as_deref())
        .context("failed to load install inputs")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let options = CreateOptions::new(args.dir.clone(), target).with_inputs(inputs);
    let result = CreateUseCase::new(LocalFs::new())
        .execute(&options)
        .with_context(|| format!("failed to create {}", target))?;

    if json {
        let written: Vec<_> = result
            .written
            .iter()
            .map(|file| {
                serde_json::json!({
                    "path": file.path.display().to_string(),
                    "hash": file.hash.as_str(),
                    "size": file.size,
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "create",
            "target": target.to_string(),
            "written": written,
        }))?;
        return Ok(());
    }

    for file in &result.written {
        println!("wrote {}", display_relative(&file.path, &args.dir));
    }
    Ok(())
}

fn display_relative(path: &Path, dir: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
