//! Placeholder reference discovery for reporting
//!
//! Uses a broader pattern than the substitution engine (anything between
//! `${` and `}`) so that odd-looking references still show up in the report.

use crate::env::Lookup;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid reference regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub name: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    pub name: String,
    pub default: Option<String>,
    #[serde(skip)]
    pub value: Option<String>,
    pub is_set: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub set: usize,
    pub missing: usize,
}

impl Summary {
    pub fn all_set(&self) -> bool {
        self.missing == 0
    }
}

/// Distinct references in `text`, in first-seen order.
///
/// Identity is the full text between the braces, so `${A}` and `${A:-1}` are
/// two references to the same name.
pub fn scan(text: &str) -> Vec<Reference> {
    let mut seen = HashSet::new();
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| seen.insert(*inner))
        .map(split_reference)
        .collect()
}

fn split_reference(inner: &str) -> Reference {
    let (name, default) = if let Some((name, default)) = inner.split_once(":-") {
        (name, Some(default))
    } else if let Some((name, default)) = inner.split_once(':') {
        (name, Some(default))
    } else {
        (inner, None)
    };
    Reference { name: name.to_string(), default: default.map(str::to_string) }
}

/// Attach environment values. A reference counts as set only when its value
/// is present and non-empty.
pub fn resolve<L: Lookup + ?Sized>(refs: &[Reference], env: &L) -> Vec<ResolvedReference> {
    refs.iter()
        .map(|r| {
            let value = env.lookup(&r.name).map(str::to_string);
            let is_set = value.as_deref().is_some_and(|v| !v.is_empty());
            ResolvedReference {
                name: r.name.clone(),
                default: r.default.clone(),
                value,
                is_set,
            }
        })
        .collect()
}

pub fn summarize(resolved: &[ResolvedReference]) -> Summary {
    let total = resolved.len();
    let set = resolved.iter().filter(|r| r.is_set).count();
    Summary { total, set, missing: total - set }
}
