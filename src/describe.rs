//! Human-readable descriptions for well-known parameter names.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Fixed vocabulary of parameter descriptions.
///
/// Definition order is part of the contract: the substring fallback in
/// `param_description` scans keys in this order and the first hit wins, so a
/// name matching two overlapping keys resolves to the earlier one.
static PARAM_DESCRIPTIONS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("system", "FMOD system handle"),
        ("sound", "Sound handle"),
        ("channel", "Channel handle"),
        ("name", "Name or path"),
        ("filename", "Name or path"),
        ("length", "Length or size value"),
        ("size", "Length or size value"),
        ("mode", "Mode flags"),
        ("volume", "Volume level (0.0 to 1.0)"),
        ("position", "Position value"),
        ("paused", "Paused state"),
        ("index", "Index value"),
    ])
});

/// Look up a description for a parameter: exact match on the lowercased name,
/// then first defined key occurring as a substring of it, then the name
/// itself. Never fails.
///
/// `_function_name` is reserved for per-function disambiguation; nothing
/// consults it yet.
pub fn param_description(param_name: &str, _function_name: &str) -> String {
    let param_lower = param_name.to_lowercase();

    if let Some(description) = PARAM_DESCRIPTIONS.get(param_lower.as_str()) {
        return (*description).to_string();
    }

    for (key, description) in PARAM_DESCRIPTIONS.iter() {
        if param_lower.contains(key) {
            return (*description).to_string();
        }
    }

    param_name.to_string()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(param_description("volume", "setVolume"), "Volume level (0.0 to 1.0)");
        assert_eq!(param_description("filename", "createSound"), "Name or path");
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(param_description("Volume", "setVolume"), "Volume level (0.0 to 1.0)");
    }

    #[test]
    fn substring_fallback_finds_embedded_keys() {
        assert_eq!(param_description("initialvolume", "init"), "Volume level (0.0 to 1.0)");
        assert_eq!(param_description("channelcount", ""), "Channel handle");
    }

    #[test]
    fn substring_scan_respects_definition_order() {
        // contains both "size" and "index"; "size" is defined first
        assert_eq!(param_description("sizeindex", ""), "Length or size value");
    }

    #[test]
    fn unknown_names_fall_back_to_identity() {
        assert_eq!(param_description("xyz", "anything"), "xyz");
        // identity keeps the original casing, not the lowered probe
        assert_eq!(param_description("Xyz", ""), "Xyz");
    }
}
