//! `${NAME}` / `${NAME:-default}` placeholder substitution
//!
//! Single left-to-right pass over the input. Resolved values and defaults are
//! never rescanned, so a value containing `${...}` is emitted verbatim.

use crate::env::Lookup;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Name: one or more chars other than `}` and `:`. Default: `:` with an
/// optional `-`, then anything up to the closing brace.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::-?([^}]*))?\}").expect("valid placeholder regex"));

/// A single parsed placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    pub default: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        Self {
            name: caps.get(1).map_or("", |m| m.as_str()),
            default: caps.get(2).map(|m| m.as_str()),
        }
    }

    /// Environment value first, then the default, then the empty string.
    pub fn resolve<'e, L: Lookup + ?Sized>(&self, env: &'e L) -> (&'e str, Source)
    where
        'a: 'e,
    {
        if let Some(value) = env.lookup(self.name) {
            (value, Source::Environment)
        } else if let Some(default) = self.default {
            (default, Source::Default)
        } else {
            ("", Source::Empty)
        }
    }
}

/// Where a placeholder's replacement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    Default,
    Empty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionStats {
    pub from_env: usize,
    pub from_default: usize,
    pub empty: usize,
}

impl SubstitutionStats {
    pub fn total(&self) -> usize {
        self.from_env + self.from_default + self.empty
    }
}

/// Replace every placeholder in `text` against `env`.
pub fn substitute<L: Lookup + ?Sized>(text: &str, env: &L) -> String {
    substitute_with_stats(text, env).0
}

/// Like [`substitute`], also counting how each placeholder was resolved.
pub fn substitute_with_stats<L: Lookup + ?Sized>(
    text: &str,
    env: &L,
) -> (String, SubstitutionStats) {
    let mut stats = SubstitutionStats::default();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let Some(span) = caps.get(0) else { continue };
        out.push_str(&text[last..span.start()]);

        let placeholder = Placeholder::from_captures(&caps);
        let (value, source) = placeholder.resolve(env);
        match source {
            Source::Environment => stats.from_env += 1,
            Source::Default => stats.from_default += 1,
            Source::Empty => {
                tracing::debug!(name = placeholder.name, "placeholder resolved to empty string");
                stats.empty += 1;
            }
        }
        out.push_str(value);
        last = span.end();
    }
    out.push_str(&text[last..]);

    (out, stats)
}

/// Parse every placeholder occurrence in `text`, in order.
pub fn placeholders(text: &str) -> impl Iterator<Item = Placeholder<'_>> {
    PLACEHOLDER.captures_iter(text).map(|caps| Placeholder::from_captures(&caps))
}

/// Names of placeholders that would render to the empty string because they
/// have neither a value nor a default. Every occurrence is checked; each name
/// is reported once, in first-seen order.
pub fn unresolved<'t, L: Lookup + ?Sized>(text: &'t str, env: &L) -> Vec<&'t str> {
    let mut names: Vec<&str> = Vec::new();
    for p in placeholders(text) {
        if p.default.is_none() && env.lookup(p.name).is_none() && !names.contains(&p.name) {
            names.push(p.name);
        }
    }
    names
}
