//! Render command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::{resolve_settings, SourceArgs};
use crate::dotenv;
use crate::env::Environment;
use crate::substitute::{substitute_with_stats, unresolved};
use crate::utils::encoding::read_text_file;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail if a referenced variable has neither a value nor a default
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: RenderArgs, config: Option<&Path>) -> Result<()> {
    let settings = resolve_settings(config, args.source.into_overrides(None))?;

    let mut env = Environment::from_process();
    let outcome = dotenv::load(&settings.env_file, &mut env, settings.parser)?;
    if !outcome.is_loaded() {
        eprintln!("{} not found or couldn't be loaded", settings.env_file.display());
        return Ok(());
    }

    if !settings.yaml_file.exists() {
        eprintln!("File {} not found!", settings.yaml_file.display());
        return Ok(());
    }
    let content = read_text_file(&settings.yaml_file)?;

    if args.strict {
        let missing = unresolved(&content, &env);
        if !missing.is_empty() {
            bail!("Unresolved variables without defaults: {}", missing.join(", "));
        }
    }

    let (rendered, stats) = substitute_with_stats(&content, &env);
    tracing::info!(
        placeholders = stats.total(),
        from_env = stats.from_env,
        from_default = stats.from_default,
        empty = stats.empty,
        "rendered {}",
        settings.yaml_file.display()
    );

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
