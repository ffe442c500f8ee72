//! Identifier case normalization for script-facing names.

use once_cell::sync::Lazy;
use regex::Regex;

/// One leading segment of a native identifier: optional underscores, then the
/// literal acronym token `IDs`, a capitalized word, or an acronym/digit run.
///
/// The original grammar guards the acronym run with a `(?![a-z])` lookahead so
/// a run does not swallow the capital that starts the next word. The `regex`
/// crate has no lookahead, so the run is matched greedily here and
/// `to_snake_case` gives back its last character when a lowercase letter
/// follows the run.
static SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^_*(IDs|[A-Z][a-z]+|[A-Z0-9]+)").unwrap());

/// Segment a mixed-case identifier and join the lowercased segments with
/// underscores. Scanning stops at the first position where no segment
/// matches; trailing unmatched characters are silently dropped (known edge,
/// kept as-is — see the truncation tests).
pub fn to_snake_case(identifier: &str) -> String {
    let mut components: Vec<String> = Vec::new();
    let mut remaining = identifier;
    while let Some(caps) = SEGMENT.captures(remaining) {
        let mut consumed = caps.get(0).unwrap().end();
        let mut segment = caps.get(1).unwrap().as_str();
        let next_is_lower = remaining[consumed..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase());
        // Acronym/digit run followed by a lowercase letter: the final capital
        // belongs to the next word. An emptied run is no match at all.
        if next_is_lower && !segment.chars().any(|c| c.is_ascii_lowercase()) {
            segment = &segment[..segment.len() - 1];
            consumed -= 1;
            if segment.is_empty() {
                break;
            }
        }
        components.push(segment.to_lowercase());
        remaining = &remaining[consumed..];
    }
    components.join("_")
}

// ------------------------------- Tests ------------------------------------ //
