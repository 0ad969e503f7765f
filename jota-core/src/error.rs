//! Structured errors for host-engine consumption
//!
//! Delegate libraries fail with their own error types; none of those escape
//! this crate's boundary. Every failure is re-raised as an `ExtError` with a
//! stable, human-readable message so the host engine surfaces errors
//! consistently regardless of which delegate raised them.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_HOST: &str = "INVALID_HOST";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const INVALID_UUID: &str = "INVALID_UUID";
    pub const INVALID_BASE: &str = "INVALID_BASE";
    pub const INVALID_URL: &str = "INVALID_URL";
    pub const INVALID_TAG: &str = "INVALID_TAG";
    pub const UNKNOWN_LANGUAGE: &str = "UNKNOWN_LANGUAGE";
    pub const DATE_PARSE_ERROR: &str = "DATE_PARSE_ERROR";
    pub const DURATION_PARSE_ERROR: &str = "DURATION_PARSE_ERROR";
    pub const TEMPLATE_ERROR: &str = "TEMPLATE_ERROR";
    pub const REGEX_ERROR: &str = "REGEX_ERROR";
}

/// Structured error raised to the host engine's invocation machinery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ExtError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    /// Registration target is missing or cannot bind functions
    pub fn invalid_host() -> Self {
        Self::new(
            codes::INVALID_HOST,
            "Host engine does not support function registration",
        )
        .with_suggestion("Pass an engine instance exposing register_function")
    }

    /// A caller-supplied argument has the wrong type
    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            codes::TYPE_ERROR,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got),
        )
    }

    /// An option field failed its type check. Names the field, the received
    /// value, and the received type.
    pub fn option_type(field: &str, value: impl std::fmt::Display, got: &str) -> Self {
        Self::new(
            codes::TYPE_ERROR,
            format!("Invalid option '{}': received {} ({})", field, value, got),
        )
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(
            codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got),
        )
    }

    pub fn invalid_uuid() -> Self {
        Self::new(codes::INVALID_UUID, "Invalid UUID")
            .with_suggestion("Pass a canonical UUID (8-4-4-4-12 hex digits)")
    }

    pub fn invalid_encoded_uuid() -> Self {
        Self::new(codes::INVALID_UUID, "Invalid encoded UUID")
    }

    pub fn unsupported_base(base: &str) -> Self {
        Self::new(codes::INVALID_BASE, format!("Unsupported base: {}", base))
            .with_suggestion("Use one of base2, base10, base16, base32, base36, base58, base62, base64, base64url")
    }

    pub fn invalid_url() -> Self {
        Self::new(codes::INVALID_URL, "Invalid URL")
    }

    pub fn invalid_tag() -> Self {
        Self::new(codes::INVALID_TAG, "Invalid RFC5646 Tag")
            .with_suggestion("Use a language[-REGION] tag such as 'en' or 'en-GB'")
    }

    pub fn unknown_language(code: &str) -> Self {
        Self::new(codes::UNKNOWN_LANGUAGE, format!("Unknown language: {}", code))
    }

    pub fn date_parse_error(input: &str) -> Self {
        Self::new(codes::DATE_PARSE_ERROR, format!("Invalid date-time: {}", input))
            .with_suggestion("Use ISO 8601 (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS) or pass a format")
    }

    pub fn duration_parse_error(input: &str) -> Self {
        Self::new(
            codes::DURATION_PARSE_ERROR,
            format!("Invalid ISO8601 duration: {}", input),
        )
        .with_suggestion("Use PnYnMnWnDTnHnMnS, e.g. P1DT2H30M")
    }

    pub fn template_error(details: impl Into<String>) -> Self {
        Self::new(
            codes::TEMPLATE_ERROR,
            format!("Template rendering failed: {}", details.into()),
        )
    }

    pub fn regex_error() -> Self {
        Self::new(codes::REGEX_ERROR, "Error processing wordbreakregex")
    }
}

impl std::fmt::Display for ExtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExtError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let e = ExtError::invalid_uuid();
        let s = format!("{}", e);
        assert!(s.contains("INVALID_UUID"));
        assert!(s.contains("Invalid UUID"));
    }

    #[test]
    fn test_invalid_host_message_is_stable() {
        assert_eq!(
            ExtError::invalid_host().message,
            "Host engine does not support function registration"
        );
    }

    #[test]
    fn test_option_type_names_field_value_and_type() {
        let e = ExtError::option_type("length", "\"30\"", "String");
        assert!(e.message.contains("length"));
        assert!(e.message.contains("\"30\""));
        assert!(e.message.contains("String"));
    }
}
