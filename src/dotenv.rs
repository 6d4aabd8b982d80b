//! `.env` file loading into an explicit [`Environment`]
//!
//! Two parsers share one entry point:
//! - `Dotenvy` delegates to the `dotenvy` crate (quotes, `export`, escapes) and
//!   never overrides a name that is already present.
//! - `Manual` is the plain `KEY=VALUE` reader and always overwrites.
//!
//! Errors never carry raw `.env` line contents.

use crate::env::Environment;
use crate::utils::encoding::read_text_file;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    #[default]
    Dotenvy,
    Manual,
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserKind::Dotenvy => f.write_str("dotenvy"),
            ParserKind::Manual => f.write_str("manual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; nothing was loaded.
    NotFound,
    Loaded { path: PathBuf, variables: usize, parser: ParserKind },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

#[derive(Error, Debug)]
pub enum EnvFileError {
    /// Only the byte index is kept so secrets on the offending line stay out of logs.
    #[error("Failed to parse {path} at position {index}")]
    Parse { path: PathBuf, index: usize },

    #[error("Failed to read {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },

    #[error("Failed to load {path}")]
    Unknown { path: PathBuf },
}

/// Load `path` into `env` with the chosen parser.
///
/// A missing file is `Ok(LoadOutcome::NotFound)`. If the `dotenvy` parser
/// rejects the file's syntax, the manual parser is used instead.
pub fn load(
    path: &Path,
    env: &mut Environment,
    parser: ParserKind,
) -> Result<LoadOutcome, EnvFileError> {
    if !path.exists() {
        tracing::debug!("env file not found: {}", path.display());
        return Ok(LoadOutcome::NotFound);
    }

    let content = read_text_file(path)
        .map_err(|e| EnvFileError::Io { path: path.to_path_buf(), kind: io_kind(&e) })?;

    let (variables, parser) = match parser {
        ParserKind::Manual => (apply_manual(&content, env), ParserKind::Manual),
        ParserKind::Dotenvy => match apply_dotenvy(path, &content, env) {
            Ok(n) => (n, ParserKind::Dotenvy),
            Err(EnvFileError::Parse { index, .. }) => {
                tracing::warn!(
                    "dotenvy could not parse {} at position {}; falling back to the manual parser",
                    path.display(),
                    index
                );
                (apply_manual(&content, env), ParserKind::Manual)
            }
            Err(e) => return Err(e),
        },
    };

    tracing::info!(variables, %parser, "loaded {}", path.display());
    Ok(LoadOutcome::Loaded { path: path.to_path_buf(), variables, parser })
}

/// Parse `KEY=VALUE` lines. Blank lines, `#` comments and lines without `=`
/// are skipped; key and value are trimmed; the split is on the first `=`.
pub fn parse_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

fn apply_manual(content: &str, env: &mut Environment) -> usize {
    let pairs = parse_lines(content);
    let count = pairs.len();
    for (key, value) in pairs {
        env.set(key, value);
    }
    count
}

fn apply_dotenvy(
    path: &Path,
    content: &str,
    env: &mut Environment,
) -> Result<usize, EnvFileError> {
    // Collect first so a parse error leaves `env` untouched for the fallback.
    let pairs = dotenvy::from_read_iter(content.as_bytes())
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(|e| map_dotenvy_error(path, e))?;

    let literals = literal_values(content);
    let mut applied = 0;
    for (key, value) in pairs {
        // dotenvy expands `$NAME` against the process environment; values
        // are taken verbatim instead.
        let value = literals.get(&key).cloned().unwrap_or(value);
        if env.set_if_absent(key.as_str(), value) {
            applied += 1;
        } else {
            tracing::debug!(name = %key, "keeping existing value");
        }
    }
    Ok(applied)
}

/// Verbatim values for lines whose value holds a `$` outside single quotes,
/// with surrounding double quotes removed.
fn literal_values(content: &str) -> HashMap<String, String> {
    parse_lines(content)
        .into_iter()
        .filter(|(_, value)| value.contains('$') && !value.starts_with('\''))
        .map(|(key, value)| {
            let key = key.strip_prefix("export ").map_or(key.as_str(), str::trim).to_string();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .map_or(value.as_str(), |v| v)
                .to_string();
            (key, value)
        })
        .collect()
}

fn map_dotenvy_error(path: &Path, error: dotenvy::Error) -> EnvFileError {
    let path = path.to_path_buf();
    match error {
        dotenvy::Error::LineParse(_, index) => EnvFileError::Parse { path, index },
        dotenvy::Error::Io(io_err) => EnvFileError::Io { path, kind: io_err.kind() },
        _ => EnvFileError::Unknown { path },
    }
}

fn io_kind(error: &anyhow::Error) -> ErrorKind {
    error.downcast_ref::<std::io::Error>().map_or(ErrorKind::Other, std::io::Error::kind)
}
