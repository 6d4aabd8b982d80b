//! Command-line interface for envyaml
//!
//! Provides `check` and `render` subcommands sharing one settings layer.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_settings, merge_cli_with_settings, CliOverrides, Settings};
use crate::dotenv::ParserKind;

mod check;
mod render;
mod utils;

/// Substitute ${VAR} placeholders in YAML configuration from .env files
#[derive(Parser)]
#[command(name = "envyaml")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML or YAML); auto-discovered when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load .env, substitute the YAML file and print a masked summary
    Check(check::CheckArgs),

    /// Print or write the YAML file with placeholders substituted
    Render(render::RenderArgs),
}

/// Input locations shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the .env file
    #[arg(long, value_name = "FILE", env = "ENVYAML_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Path to the YAML file to substitute
    #[arg(short = 'y', long = "yaml", value_name = "FILE", env = "ENVYAML_YAML_FILE")]
    pub yaml_file: Option<PathBuf>,

    /// Parser used for the .env file
    #[arg(long, value_enum)]
    pub parser: Option<ParserKind>,
}

impl SourceArgs {
    fn into_overrides(self, watched_vars: Option<Vec<String>>) -> CliOverrides {
        CliOverrides {
            env_file: self.env_file,
            yaml_file: self.yaml_file,
            parser: self.parser,
            watched_vars,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Check(args) => check::run(args, config),
        Commands::Render(args) => render::run(args, config),
    }
}

/// Settings file, then CLI/env overrides on top.
fn resolve_settings(config: Option<&Path>, overrides: CliOverrides) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let settings = load_settings(&cwd, config)?;
    let settings = merge_cli_with_settings(settings, overrides);
    tracing::debug!(
        env_file = %settings.env_file.display(),
        yaml_file = %settings.yaml_file.display(),
        parser = %settings.parser,
        "resolved settings"
    );
    Ok(settings)
}
