//! Display masking for sensitive-looking variables

/// Name fragments that mark a variable as sensitive.
pub const DEFAULT_SENSITIVE_MARKERS: &[&str] = &["PASSWORD", "SECRET", "KEY"];

/// Shown in place of a value that is unset or empty.
pub const NOT_SET: &str = "NOT SET";

/// True when `name` contains any of `markers` (case-sensitive).
pub fn is_sensitive<S: AsRef<str>>(name: &str, markers: &[S]) -> bool {
    markers.iter().any(|m| !m.as_ref().is_empty() && name.contains(m.as_ref()))
}

/// One `*` per character of `value`.
pub fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Masked value for sensitive names, the value itself otherwise, and
/// [`NOT_SET`] when there is nothing to show.
pub fn display_value<S: AsRef<str>>(name: &str, value: Option<&str>, markers: &[S]) -> String {
    match value {
        None | Some("") => NOT_SET.to_string(),
        Some(v) if is_sensitive(name, markers) => mask(v),
        Some(v) => v.to_string(),
    }
}

/// Like [`display_value`], but a present empty value is shown as-is;
/// [`NOT_SET`] is reserved for names that are absent.
pub fn display_reference<S: AsRef<str>>(name: &str, value: Option<&str>, markers: &[S]) -> String {
    match value {
        None => NOT_SET.to_string(),
        Some(v) if is_sensitive(name, markers) => mask(v),
        Some(v) => v.to_string(),
    }
}

/// Mask a value that is known to be secret, or [`NOT_SET`] when empty.
pub fn mask_or_not_set(value: Option<&str>) -> String {
    match value {
        None | Some("") => NOT_SET.to_string(),
        Some(v) => mask(v),
    }
}
