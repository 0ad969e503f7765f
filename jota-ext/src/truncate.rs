//! Word-boundary-aware truncation
//!
//! All bounds are measured in codepoints, never storage units. The word-break
//! search runs over a normalized copy of the candidate prefix in which every
//! codepoint outside the BMP is replaced by a single placeholder, so regexes
//! written against one-character-per-codepoint text cannot misalign on wide
//! characters. Normalization preserves codepoint count, so indices found in
//! the normalized prefix map directly onto the raw prefix.

use crate::helpers::{self, optional_object, require_str};
use jota_core::{codepoint, type_name, ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};

const DEFAULT_LENGTH: i64 = 30;
const DEFAULT_OMISSION: &str = "...";

/// Placeholder for codepoints that would occupy two UTF-16 units
const WIDE_PLACEHOLDER: char = '\u{FFFD}';

/// Resolved truncation options: caller fields merged over defaults
#[derive(Debug, Clone)]
pub struct TruncateOptions {
    pub length: i64,
    pub omission: String,
    pub wordbreak: Option<String>,
    pub wordbreakregex: Option<String>,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            omission: DEFAULT_OMISSION.to_string(),
            wordbreak: None,
            wordbreakregex: None,
        }
    }
}

impl TruncateOptions {
    /// Merge a caller-supplied options object over the defaults, validating
    /// every supplied field before any truncation work happens.
    pub fn resolve(options: Option<&Json>) -> Result<Self, ExtError> {
        let mut resolved = Self::default();
        let Some(options) = options else {
            return Ok(resolved);
        };

        let map = match options {
            Json::Object(m) => m,
            other => {
                return Err(ExtError::arg_type("truncate", "options", "Object", type_name(other)))
            }
        };

        if let Some(v) = map.get("length") {
            match v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)) {
                Some(n) => resolved.length = n,
                None => return Err(ExtError::option_type("length", v, type_name(v))),
            }
        }
        if let Some(v) = map.get("omission") {
            match v.as_str() {
                Some(s) => resolved.omission = s.to_string(),
                None => return Err(ExtError::option_type("omission", v, type_name(v))),
            }
        }
        if let Some(v) = map.get("wordbreak") {
            match v.as_str() {
                Some(s) => resolved.wordbreak = Some(s.to_string()),
                None => return Err(ExtError::option_type("wordbreak", v, type_name(v))),
            }
        }
        if let Some(v) = map.get("wordbreakregex") {
            match v.as_str() {
                Some(s) => resolved.wordbreakregex = Some(s.to_string()),
                None => return Err(ExtError::option_type("wordbreakregex", v, type_name(v))),
            }
        }

        Ok(resolved)
    }
}

/// Truncate `value` to at most `length` codepoints, appending the omission
/// marker and honoring an optional word-break rule.
pub fn truncate(value: &str, options: Option<&Json>) -> Result<String, ExtError> {
    let opts = TruncateOptions::resolve(options)?;

    let total = codepoint::count(value) as i64;
    if total <= opts.length {
        // Idempotence boundary: short enough, no marker appended
        return Ok(value.to_string());
    }

    // A marker longer than the target length clamps to an empty prefix
    let end_slice = opts.length - codepoint::count(&opts.omission) as i64;
    let prefix = codepoint::take(value, end_slice.max(0) as usize);

    let normalized: String = prefix
        .chars()
        .map(|c| if codepoint::is_wide(c) { WIDE_PLACEHOLDER } else { c })
        .collect();

    let mut break_at: Option<usize> = None;

    if let Some(pattern) = &opts.wordbreakregex {
        let re = helpers::get_regex(pattern).map_err(|_| ExtError::regex_error())?;
        // Keep the start of the *last* match, iterating to exhaustion
        if let Some(m) = re.find_iter(&normalized).last() {
            break_at = Some(codepoint::index_of_byte(&normalized, m.start()));
        }
    }

    // The literal separator only applies when the regex found nothing
    if break_at.is_none() {
        if let Some(sep) = &opts.wordbreak {
            if let Some(byte) = normalized.rfind(sep.as_str()) {
                break_at = Some(codepoint::index_of_byte(&normalized, byte));
            }
        }
    }

    // Cut at the break (separator and tail discarded); indices computed on
    // the normalized prefix are valid on the raw prefix since codepoint
    // counts are preserved.
    let kept = match break_at {
        Some(idx) => codepoint::take(&prefix, idx),
        None => prefix,
    };

    Ok(kept + &opts.omission)
}

// ============ Truncate plugin ============

pub struct Truncate;

static TRUNCATE_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("text", ParamType::String, "Text to truncate"),
    ParamSpec::optional(
        "options",
        ParamType::Object,
        "length (default 30), omission (default \"...\"), wordbreak, wordbreakregex",
    ),
];

static TRUNCATE_EXAMPLES: [&str; 2] = [
    "truncate(\"1234567890123456789012345678901234567890\", {\"length\": 13}) → \"1234567890...\"",
    "truncate(text, {\"length\": 20, \"wordbreak\": \" \"}) → cut at the last space",
];

impl ExtensionFunction for Truncate {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "truncate",
            description: "Truncate text to a codepoint length, word-break aware",
            params: &TRUNCATE_PARAMS,
            returns: ParamType::String,
            examples: &TRUNCATE_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let text = require_str(args, 0, "truncate", "text")?;
        // Re-borrow the raw options value: resolve() wants the whole object
        let options = match optional_object(args, 1, "truncate", "options")? {
            Some(_) => args[1].as_ref(),
            None => None,
        };
        truncate(text, options).map(|s| Some(Json::String(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let opts = TruncateOptions::resolve(None).unwrap();
        assert_eq!(opts.length, 30);
        assert_eq!(opts.omission, "...");
        assert!(opts.wordbreak.is_none());
        assert!(opts.wordbreakregex.is_none());
    }

    #[test]
    fn test_caller_fields_override_defaults() {
        let o = json!({"length": 10, "omission": "…"});
        let opts = TruncateOptions::resolve(Some(&o)).unwrap();
        assert_eq!(opts.length, 10);
        assert_eq!(opts.omission, "…");
    }

    #[test]
    fn test_length_must_be_numeric() {
        let o = json!({"length": "13"});
        let err = TruncateOptions::resolve(Some(&o)).unwrap_err();
        assert_eq!(err.code, jota_core::codes::TYPE_ERROR);
        assert!(err.message.contains("length"));
        assert!(err.message.contains("String"));
    }

    #[test]
    fn test_wordbreak_must_be_string() {
        let o = json!({"wordbreak": 3});
        let err = TruncateOptions::resolve(Some(&o)).unwrap_err();
        assert!(err.message.contains("wordbreak"));
    }

    #[test]
    fn test_short_input_returned_unchanged() {
        let o = json!({"length": 13});
        assert_eq!(truncate("hello", Some(&o)).unwrap(), "hello");
        // Exactly at the boundary: still unchanged, no marker
        assert_eq!(truncate("1234567890123", Some(&o)).unwrap(), "1234567890123");
    }

    #[test]
    fn test_plain_truncation() {
        let o = json!({"length": 13, "omission": "..."});
        assert_eq!(
            truncate("1234567890123456789012345678901234567890", Some(&o)).unwrap(),
            "1234567890..."
        );
    }

    #[test]
    fn test_literal_wordbreak() {
        let o = json!({"length": 20, "omission": "...", "wordbreak": " "});
        assert_eq!(
            truncate("1234567890123456 789012345678901234567890", Some(&o)).unwrap(),
            "1234567890123456..."
        );
    }

    #[test]
    fn test_regex_wordbreak_uses_last_match() {
        let o = json!({"length": 20, "omission": "...", "wordbreakregex": r"\d "});
        // Prefix window is "12 45 789012345678"; the last "digit space" match
        // starts at index 3
        assert_eq!(
            truncate("12 45 789012345678901234567890", Some(&o)).unwrap(),
            "12 4..."
        );
    }

    #[test]
    fn test_regex_precedence_over_literal() {
        let o = json!({
            "length": 20,
            "omission": "...",
            "wordbreak": " ",
            "wordbreakregex": "-"
        });
        // Both present and the regex matches: its index wins even though the
        // literal separator appears later in the prefix
        assert_eq!(
            truncate("12-456 89012345678901234567890", Some(&o)).unwrap(),
            "12..."
        );
    }

    #[test]
    fn test_literal_fallback_when_regex_misses() {
        let o = json!({
            "length": 20,
            "omission": "...",
            "wordbreak": " ",
            "wordbreakregex": "ZZZ"
        });
        assert_eq!(
            truncate("1234567890123456 789012345678901234567890", Some(&o)).unwrap(),
            "1234567890123456..."
        );
    }

    #[test]
    fn test_invalid_regex_fails_generically() {
        let o = json!({"length": 10, "wordbreakregex": "[unclosed"});
        let err = truncate("abcdefghijklmnopqrstuvwxyz", Some(&o)).unwrap_err();
        assert_eq!(err.code, jota_core::codes::REGEX_ERROR);
        assert_eq!(err.message, "Error processing wordbreakregex");
    }

    #[test]
    fn test_omission_counted_in_codepoints() {
        // "……" is 2 codepoints (6 UTF-8 bytes); end slice must be 8 - 2 = 6
        let o = json!({"length": 8, "omission": "……"});
        assert_eq!(truncate("abcdefghijklmnop", Some(&o)).unwrap(), "abcdef……");
    }

    #[test]
    fn test_omission_longer_than_length_clamps_to_empty_prefix() {
        let o = json!({"length": 2, "omission": "....."});
        assert_eq!(truncate("abcdefghij", Some(&o)).unwrap(), ".....");
    }

    #[test]
    fn test_surrogate_pairs_not_split() {
        // 10 emoji = 10 codepoints (20 UTF-16 units); length 6, omission 3
        let input = "😀😀😀😀😀😀😀😀😀😀";
        let o = json!({"length": 6, "omission": "..."});
        let out = truncate(input, Some(&o)).unwrap();
        assert_eq!(out, "😀😀😀...");
        assert_eq!(out.chars().count(), 6);
    }

    #[test]
    fn test_wide_chars_do_not_misalign_regex() {
        // Each emoji is one codepoint; a one-char-per-codepoint regex over
        // the normalized prefix must find the space at codepoint index 2
        let input = "😀😀 😀😀😀😀😀😀😀😀";
        let o = json!({"length": 6, "omission": "...", "wordbreakregex": r"\s"});
        assert_eq!(truncate(input, Some(&o)).unwrap(), "😀😀...");
    }

    #[test]
    fn test_result_never_longer_than_length_without_wordbreak() {
        let o = json!({"length": 13});
        let out = truncate("1234567890123456789012345678901234567890", Some(&o)).unwrap();
        assert!(out.chars().count() <= 13);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_plugin_rejects_non_string_input() {
        let f = Truncate;
        let err = f.call(&[Some(json!(5))]).unwrap_err();
        assert_eq!(err.code, jota_core::codes::TYPE_ERROR);
    }

    #[test]
    fn test_plugin_rejects_non_object_options() {
        let f = Truncate;
        let err = f
            .call(&[Some(json!("some long text here")), Some(json!("nope"))])
            .unwrap_err();
        assert_eq!(err.code, jota_core::codes::TYPE_ERROR);
    }
}
