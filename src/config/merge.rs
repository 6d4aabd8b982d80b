//! Merge CLI overrides onto loaded settings

use crate::config::Settings;
use crate::dotenv::ParserKind;
use std::path::PathBuf;

/// Values supplied on the command line (or through their `ENVYAML_*`
/// environment fallbacks, which clap resolves before we get here).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub env_file: Option<PathBuf>,
    pub yaml_file: Option<PathBuf>,
    pub parser: Option<ParserKind>,
    pub watched_vars: Option<Vec<String>>,
}

pub fn merge_cli_with_settings(mut settings: Settings, cli: CliOverrides) -> Settings {
    if let Some(env_file) = cli.env_file {
        settings.env_file = env_file;
    }
    if let Some(yaml_file) = cli.yaml_file {
        settings.yaml_file = yaml_file;
    }
    if let Some(parser) = cli.parser {
        settings.parser = parser;
    }
    if let Some(vars) = cli.watched_vars {
        settings.watched_vars = vars;
    }
    settings
}
