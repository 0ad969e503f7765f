//! Unicode-to-ASCII folding

use crate::helpers::{optional_str, require_str};
use deunicode::{deunicode, deunicode_with_tofu};
use jota_core::{ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};

pub struct ToAscii;

static TO_ASCII_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("text", ParamType::String, "Text to transliterate"),
    ParamSpec::optional(
        "replacement",
        ParamType::String,
        "Substitute for characters with no ASCII equivalent",
    ),
];

static TO_ASCII_EXAMPLES: [&str; 2] = [
    "toAscii(\"Æneid déjà vu\") → \"AEneid deja vu\"",
    "toAscii(\"北京\", \"?\") → transliterated, unknowns replaced by \"?\"",
];

impl ExtensionFunction for ToAscii {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "toAscii",
            description: "Fold non-ASCII letters and symbols to ASCII equivalents",
            params: &TO_ASCII_PARAMS,
            returns: ParamType::String,
            examples: &TO_ASCII_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let text = require_str(args, 0, "toAscii", "text")?;
        let folded = match optional_str(args, 1, "toAscii", "replacement")? {
            Some(replacement) => deunicode_with_tofu(text, replacement),
            None => deunicode(text),
        };
        Ok(Some(Json::String(folded)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_folds_accents() {
        let out = ToAscii.call(&[Some(json!("déjà vu"))]).unwrap();
        assert_eq!(out, Some(json!("deja vu")));
    }

    #[test]
    fn test_folds_ligatures_and_symbols() {
        let out = ToAscii.call(&[Some(json!("Æneid — cœur"))]).unwrap().unwrap();
        let s = out.as_str().unwrap();
        assert!(s.is_ascii());
        assert!(s.starts_with("AEneid"));
    }

    #[test]
    fn test_ascii_passes_through() {
        let out = ToAscii.call(&[Some(json!("plain ascii"))]).unwrap();
        assert_eq!(out, Some(json!("plain ascii")));
    }

    #[test]
    fn test_rejects_non_string_replacement() {
        let err = ToAscii.call(&[Some(json!("x")), Some(json!(1))]).unwrap_err();
        assert_eq!(err.code, jota_core::codes::TYPE_ERROR);
    }
}
