//! Shared CLI utilities.

/// Split a comma-separated list, trimming whitespace and dropping empty
/// segments. `None` stays `None`.
pub fn parse_csv(value: Option<&str>) -> Option<Vec<String>> {
    value.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    })
}
