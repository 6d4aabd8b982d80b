//! Check command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::utils::parse_csv;
use super::{resolve_settings, SourceArgs};
use crate::env::Environment;
use crate::report::{self, build_check_report};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Variables to list in the environment section (comma-separated)
    #[arg(short = 'w', long, value_name = "NAMES")]
    pub watch: Option<String>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs, config: Option<&Path>) -> Result<()> {
    let watched = parse_csv(args.watch.as_deref());
    let settings = resolve_settings(config, args.source.into_overrides(watched))?;

    let mut env = Environment::from_process();
    let report = build_check_report(&settings, &mut env)?;

    if args.json {
        println!("{}", report::json::render(&report)?);
    } else {
        print!("{}", report::text::render(&report));
    }
    Ok(())
}
