//! Settings file loading

use crate::config::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Section name settings may be nested under in a shared file.
const SECTION: &str = "envyaml";

const CANDIDATES: &[&str] = &[
    "envyaml.toml",
    ".envyaml.toml",
    "envyaml.yaml",
    ".envyaml.yaml",
    "envyaml.yml",
    ".envyaml.yml",
];

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed reading settings file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported settings extension '.{ext}' for file {path}")]
    UnsupportedExtension { path: PathBuf, ext: String },
}

/// Load settings from `settings_path`, or from the first candidate found in
/// `dir` when no path is given.
///
/// An explicitly named file that cannot be read or parsed is an error. An
/// auto-discovered one only logs a warning and yields defaults.
pub fn load_settings(dir: &Path, settings_path: Option<&Path>) -> Result<Settings, SettingsError> {
    let explicit = settings_path.is_some();

    let discovered = match settings_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(dir),
    };

    let Some(settings_file) = discovered else {
        return Ok(Settings::default());
    };

    match read_settings(&settings_file) {
        Ok(settings) => {
            tracing::debug!("loaded settings from {}", settings_file.display());
            Ok(settings)
        }
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!("Ignoring auto-discovered settings file: {}", e);
            Ok(Settings::default())
        }
    }
}

fn read_settings(settings_file: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(settings_file)
        .map_err(|source| SettingsError::Read { path: settings_file.to_path_buf(), source })?;

    let ext = settings_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_settings(&content, settings_file),
        "yaml" | "yml" => parse_yaml_settings(&content, settings_file),
        other => Err(SettingsError::UnsupportedExtension {
            path: settings_file.to_path_buf(),
            ext: other.to_string(),
        }),
    }
}

/// Parse TOML settings, supporting a nested `[envyaml]` section.
fn parse_toml_settings(content: &str, settings_file: &Path) -> Result<Settings, SettingsError> {
    let parse_err = |message: String| SettingsError::Parse {
        path: settings_file.to_path_buf(),
        message,
    };

    let raw: toml::Value = toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
    let value = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    value.try_into().map_err(|e: toml::de::Error| parse_err(e.to_string()))
}

/// Parse YAML settings, supporting a nested `envyaml:` mapping.
fn parse_yaml_settings(content: &str, settings_file: &Path) -> Result<Settings, SettingsError> {
    let parse_err = |message: String| SettingsError::Parse {
        path: settings_file.to_path_buf(),
        message,
    };

    let raw: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
    // An empty file parses as null; treat it as "all defaults".
    if raw.is_null() {
        return Ok(Settings::default());
    }
    let value = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(value).map_err(|e| parse_err(e.to_string()))
}

fn discover_settings(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
