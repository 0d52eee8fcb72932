//! Rendering scan results.

use std::fmt::Write as _;

use wordgrid_scanner::ResultSet;

/// Renders `results` as one block per direction with one line per grid line.
///
/// ```text
/// RIGHT
///   line 0: CAT
///   line 1: -
/// ```
#[must_use]
pub fn render_text(results: &ResultSet) -> String {
    let mut out = String::new();
    for (direction, found) in results.iter() {
        let _ = writeln!(out, "{direction}");
        for (index, words) in found.iter() {
            if words.is_empty() {
                let _ = writeln!(out, "  line {index}: -");
            } else {
                let _ = writeln!(out, "  line {index}: {}", words.join(", "));
            }
        }
    }
    out
}

/// Renders `results` as pretty-printed JSON keyed by direction, then line index.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
