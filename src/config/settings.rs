//! Tool settings with defaults

use crate::dotenv::ParserKind;
use crate::mask::DEFAULT_SENSITIVE_MARKERS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_YAML_FILE: &str = "02-configuration-file.yaml";

pub const DEFAULT_WATCHED_VARS: &[&str] = &[
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "STRIPE_API_KEY",
    "JWT_SECRET",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub env_file: PathBuf,
    pub yaml_file: PathBuf,
    pub watched_vars: Vec<String>,
    /// Extra markers are added to, not substituted for, the defaults.
    #[serde(deserialize_with = "deserialize_markers")]
    pub sensitive_markers: Vec<String>,
    pub parser: ParserKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            yaml_file: PathBuf::from(DEFAULT_YAML_FILE),
            watched_vars: DEFAULT_WATCHED_VARS.iter().map(|s| s.to_string()).collect(),
            sensitive_markers: default_markers(),
            parser: ParserKind::default(),
        }
    }
}

fn default_markers() -> Vec<String> {
    DEFAULT_SENSITIVE_MARKERS.iter().map(|s| s.to_string()).collect()
}

fn deserialize_markers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let extra = Vec::<String>::deserialize(deserializer)?;
    let mut markers = default_markers();
    for marker in extra.into_iter().map(|m| m.trim().to_string()) {
        if !marker.is_empty() && !markers.contains(&marker) {
            markers.push(marker);
        }
    }
    Ok(markers)
}
