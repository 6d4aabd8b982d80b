//! JSON check report.

use super::CheckReport;
use crate::dotenv::LoadOutcome;
use anyhow::Result;
use serde_json::{json, Value};

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub fn to_value(report: &CheckReport) -> Result<Value> {
    let mut value = serde_json::to_value(report)?;
    if let Value::Object(map) = &mut value {
        map.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.into()));
        let env_load = match &report.env_outcome {
            LoadOutcome::NotFound => json!({ "loaded": false }),
            LoadOutcome::Loaded { variables, parser, .. } => json!({
                "loaded": true,
                "variables": variables,
                "parser": parser,
            }),
        };
        map.insert("env_load".to_string(), env_load);
        map.insert(
            "substitution".to_string(),
            json!({
                "from_env": report.substitution.from_env,
                "from_default": report.substitution.from_default,
                "empty": report.substitution.empty,
            }),
        );
    }
    Ok(value)
}

pub fn render(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(report)?)?)
}
