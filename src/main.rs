//! envyaml: substitute `${VAR}` placeholders in YAML from `.env` files
//!
//! Loads a `.env` file, resolves placeholders in a YAML configuration file and
//! prints either a masked summary or the substituted document.

use anyhow::Result;

fn main() -> Result<()> {
    envyaml::cli::run()
}
