//! Helper functions for extension implementations
//!
//! Common utilities for pulling typed values out of argument slots, and a
//! process-wide cache of compiled regex patterns.

use jota_core::{slot_type_name, type_name, ExtError, Json, Slot};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tracing::trace;

/// Extract a required string argument
pub fn require_str<'a>(
    args: &'a [Slot],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<&'a str, ExtError> {
    match args.get(index) {
        Some(Some(Json::String(s))) => Ok(s.as_str()),
        Some(other) => Err(ExtError::arg_type(func, arg, "String", slot_type_name(other))),
        None => Err(ExtError::arg_count(func, index + 1, args.len())),
    }
}

/// Extract an optional string argument. Absent, undefined, and null all mean
/// "not supplied"; any other non-string type is an error.
pub fn optional_str<'a>(
    args: &'a [Slot],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<Option<&'a str>, ExtError> {
    match args.get(index) {
        Some(Some(Json::String(s))) => Ok(Some(s.as_str())),
        Some(Some(Json::Null)) | Some(None) | None => Ok(None),
        Some(Some(other)) => Err(ExtError::arg_type(func, arg, "String", type_name(other))),
    }
}

/// Extract an optional object argument
pub fn optional_object<'a>(
    args: &'a [Slot],
    index: usize,
    func: &str,
    arg: &str,
) -> Result<Option<&'a serde_json::Map<String, Json>>, ExtError> {
    match args.get(index) {
        Some(Some(Json::Object(o))) => Ok(Some(o)),
        Some(Some(Json::Null)) | Some(None) | None => Ok(None),
        Some(Some(other)) => Err(ExtError::arg_type(func, arg, "Object", type_name(other))),
    }
}

/// Regex cache for compiled patterns
static REGEX_CACHE: OnceLock<RwLock<HashMap<String, Regex>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, Regex>> {
    REGEX_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get or compile a regex pattern with caching. Compile failures surface as
/// the generic regex-processing error; the underlying detail is not part of
/// the contract.
pub fn get_regex(pattern: &str) -> Result<Regex, ExtError> {
    let cache = get_cache();

    {
        let read_guard = cache
            .read()
            .map_err(|_| ExtError::new(jota_core::codes::REGEX_ERROR, "Regex cache poisoned"))?;
        if let Some(re) = read_guard.get(pattern) {
            return Ok(re.clone());
        }
    }

    trace!(pattern, "compiling regex");
    let re = Regex::new(pattern).map_err(|_| ExtError::regex_error())?;

    // Cache best-effort; a poisoned lock only costs recompilation
    if let Ok(mut write_guard) = cache.write() {
        write_guard.insert(pattern.to_string(), re.clone());
    }

    Ok(re)
}
