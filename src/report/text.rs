//! Human-readable check report.

use super::{CheckReport, Halt, NOT_AVAILABLE};
use crate::dotenv::LoadOutcome;
use crate::mask::NOT_SET;
use console::style;
use std::fmt::Write;

const RULE_WIDTH: usize = 70;
const NAME_WIDTH: usize = 20;

/// Render `report` as console text. Styling is dropped automatically when the
/// output is not a terminal.
pub fn render(report: &CheckReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &CheckReport) -> std::fmt::Result {
    section(out, "Environment Variable Check for YAML")?;

    writeln!(out, "\nLoading {}...", report.env_file.display())?;
    match &report.env_outcome {
        LoadOutcome::Loaded { variables, parser, .. } => writeln!(
            out,
            "{} {} loaded ({} variables, {} parser)",
            style("✓").green(),
            report.env_file.display(),
            variables,
            parser
        )?,
        LoadOutcome::NotFound => {
            writeln!(
                out,
                "{} {} not found or couldn't be loaded",
                style("✗").red(),
                report.env_file.display()
            )?;
            return Ok(());
        }
    }

    section(out, &format!("Environment Variables from {}", report.env_file.display()))?;
    for row in &report.env_vars {
        let value = if row.is_set {
            style(row.display.clone())
        } else {
            style(NOT_SET.to_string()).red()
        };
        writeln!(out, "  {:<width$} = {}", row.name, value, width = NAME_WIDTH)?;
    }

    section(out, &format!("Processing YAML File: {}", report.yaml_file.display()))?;
    if report.halt == Some(Halt::YamlNotFound) {
        writeln!(out, "{} File {} not found!", style("✗").red(), report.yaml_file.display())?;
        return Ok(());
    }

    writeln!(out, "Reading {}...", report.yaml_file.display())?;
    writeln!(out, "\nFound environment variable references:")?;
    for row in &report.references {
        writeln!(out, "  ${} → {}", row.name, row.display)?;
    }

    writeln!(out, "\nReplacing environment variables...")?;
    if let Some(Halt::YamlInvalid(message)) = &report.halt {
        writeln!(out, "{} Error parsing YAML: {}", style("✗").red(), message)?;
        return Ok(());
    }
    writeln!(out, "{} YAML parsed successfully", style("✓").green())?;

    let Some(config) = &report.config else {
        return Ok(());
    };

    section(out, "Database Configuration (from YAML)")?;
    match &config.database {
        Some(db) => {
            writeln!(out, "  Type:        {}", db.kind)?;
            writeln!(out, "  Host:        {}", db.host)?;
            writeln!(out, "  Port:        {}", db.port)?;
            writeln!(out, "  Name:        {}", db.name)?;
            writeln!(out, "  Username:    {}", db.username)?;
            writeln!(out, "  Password:    {}", db.password)?;
            if let Some(pool) = &db.pool {
                writeln!(out, "\n  Connection Pool:")?;
                writeln!(out, "    Min:       {}", pool.min)?;
                writeln!(out, "    Max:       {}", pool.max)?;
            }
        }
        None => writeln!(out, "  {}", NOT_AVAILABLE)?,
    }

    section(out, "Other Configurations with Environment Variables")?;
    if let Some(secret) = &config.jwt_secret {
        writeln!(out, "  JWT Secret:  {}", secret)?;
    }
    if let Some(api_key) = &config.payment_api_key {
        writeln!(out, "  Stripe API Key: {}", api_key)?;
    }

    section(out, "Example: Constructed Connection String")?;
    match (&config.database, &config.connection_string) {
        (_, Some(conn)) => writeln!(out, "  {}", conn)?,
        (Some(_), None) => writeln!(
            out,
            "  {} Cannot construct - missing required values",
            style("!").yellow()
        )?,
        (None, None) => writeln!(out, "  {}", NOT_AVAILABLE)?,
    }

    if let Some(summary) = &report.summary {
        section(out, "Summary")?;
        writeln!(out, "  Total variables in YAML: {}", summary.total)?;
        writeln!(out, "  Variables set in .env: {}", summary.set)?;
        writeln!(out, "  Variables missing: {}", summary.missing)?;
        if summary.all_set() {
            writeln!(out, "\n  {} All environment variables are set!", style("✓").green())?;
        } else {
            writeln!(
                out,
                "\n  {} {} environment variable(s) are missing",
                style("!").yellow(),
                summary.missing
            )?;
        }
    }

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "  Check completed!")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "  {}", style(title).bold())?;
    writeln!(out, "{}", rule)
}
