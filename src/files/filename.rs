//! Sanitization for report directory names.
//!
//! Report output directories are derived from the rocket name on the
//! flight card, which is free-form text. This turns it into a
//! filesystem-safe path component.

use deunicode::deunicode;

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback when sanitization produces an empty result.
const FALLBACK_NAME: &str = "flight";

/// Maximum length of a generated component.
const MAX_COMPONENT_LENGTH: usize = 64;

/// Sanitize free-form text into a filesystem-safe path component.
///
/// Transliterates unicode to ASCII, lower-cases, turns whitespace runs
/// into single hyphens, drops invalid filesystem characters, and trims
/// leading/trailing separators. Empty results fall back to `"flight"`.
pub fn sanitize_component(input: &str) -> String {
    let ascii = deunicode(input).to_lowercase();

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = true; // Swallow leading separators

    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) || c == '.' {
            continue;
        } else {
            result.push(c);
            last_was_hyphen = false;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    result.truncate(MAX_COMPONENT_LENGTH);

    if result.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_simple_names() {
        assert_eq!(sanitize_component("falcon"), "falcon");
    }

    #[test]
    fn lowercases_and_hyphenates_spaces() {
        assert_eq!(sanitize_component("AeroSentinel X1"), "aerosentinel-x1");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(sanitize_component("big   red -- rocket"), "big-red-rocket");
    }

    #[test]
    fn strips_invalid_filesystem_characters() {
        assert_eq!(sanitize_component("a/b\\c:d*e"), "abcde");
    }

    #[test]
    fn transliterates_unicode() {
        assert_eq!(sanitize_component("Fusée Éclair"), "fusee-eclair");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(sanitize_component("  rocket  "), "rocket");
        assert_eq!(sanitize_component("--rocket--"), "rocket");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize_component(""), "flight");
        assert_eq!(sanitize_component("///"), "flight");
    }

    #[test]
    fn caps_the_length() {
        let long = "x".repeat(200);
        assert_eq!(sanitize_component(&long).len(), MAX_COMPONENT_LENGTH);
    }
}
