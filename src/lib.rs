//! envyaml: `${VAR}` substitution for YAML configuration files
//!
//! Loads a `.env` file into an explicit [`env::Environment`], replaces
//! `${NAME}` / `${NAME:-default}` placeholders in a single pass and reports
//! the result with sensitive values masked.

pub mod cli;
pub mod config;
pub mod dotenv;
pub mod env;
pub mod mask;
pub mod references;
pub mod report;
pub mod substitute;
pub mod utils;

pub use env::{Environment, Lookup};
pub use substitute::substitute;
