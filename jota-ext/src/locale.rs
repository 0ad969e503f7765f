//! Language / region metadata lookup
//!
//! Parses an RFC 5646 `language[-REGION]` tag and reshapes the embedded
//! locale tables into the object shape expression authors consume. Only the
//! primary-subtag + optional region form is accepted; script and variant
//! subtags are out of scope for the lookup.

use crate::helpers::{self, require_str};
use crate::locale_data::{flag, LOCALES};
use jota_core::{ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};
use serde_json::json;

const TAG_PATTERN: &str = r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{2}|\d{3}))?$";

/// Parsed tag: lowercase language, uppercase region
fn parse_tag(tag: &str) -> Result<(String, Option<String>), ExtError> {
    let re = helpers::get_regex(TAG_PATTERN)?;
    let caps = re.captures(tag).ok_or_else(ExtError::invalid_tag)?;
    let language = caps[1].to_lowercase();
    let region = caps.get(2).map(|m| m.as_str().to_uppercase());
    Ok((language, region))
}

/// Resolve a tag to `{rfc5646, language: {name, native}, region}`
pub fn language_info(tag: &str) -> Result<Json, ExtError> {
    let (lang_code, region_code) = parse_tag(tag)?;

    let lang = LOCALES
        .language(&lang_code)
        .ok_or_else(|| ExtError::unknown_language(&lang_code))?;

    let region = match &region_code {
        Some(code) => match LOCALES.region(code) {
            Some(r) => json!({
                "code": r.code,
                "name": r.name,
                "native": r.native,
                "phone": r.phone,
                "continent": r.continent,
                "capital": r.capital,
                "currencies": r.currencies,
                "languages": r.languages,
                "flag": flag(r.code),
            }),
            // Syntactically valid but unknown regions resolve to null rather
            // than failing the whole lookup
            None => Json::Null,
        },
        None => Json::Null,
    };

    let rfc5646 = match &region_code {
        Some(code) => format!("{}-{}", lang_code, code),
        None => lang_code.clone(),
    };

    Ok(json!({
        "rfc5646": rfc5646,
        "language": { "name": lang.name, "native": lang.native },
        "region": region,
    }))
}

// ============ LanguageInfo ============

pub struct LanguageInfo;

static LANGUAGE_INFO_PARAMS: [ParamSpec; 1] = [ParamSpec::required(
    "tag",
    ParamType::String,
    "RFC 5646 language[-REGION] tag",
)];

static LANGUAGE_INFO_EXAMPLES: [&str; 2] = [
    "languageInfo(\"es\") → {rfc5646: \"es\", language: {name: \"Spanish\", native: \"Español\"}, region: null}",
    "languageInfo(\"en-GB\") → language plus United Kingdom region metadata",
];

impl ExtensionFunction for LanguageInfo {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "languageInfo",
            description: "Language and region metadata for an RFC 5646 tag",
            params: &LANGUAGE_INFO_PARAMS,
            returns: ParamType::Object,
            examples: &LANGUAGE_INFO_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let tag = require_str(args, 0, "languageInfo", "tag")?;
        language_info(tag).map(Some)
    }
}
