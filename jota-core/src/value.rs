//! Value domain shared with the host engine
//!
//! The host is a JSON query/transform language, so its runtime values are
//! plain JSON. One extra state exists on top of JSON: *undefined*, produced
//! when an expression selects a missing field. `Slot` models one argument or
//! return position, with `None` standing for undefined (distinct from JSON
//! `null`, which is a real value).

/// A JSON value as the host engine sees it
pub type Json = serde_json::Value;

/// One argument or return position: `None` is the engine's *undefined*
pub type Slot = Option<Json>;

/// Type name of a JSON value, for error messages
pub fn type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "Null",
        Json::Bool(_) => "Boolean",
        Json::Number(_) => "Number",
        Json::String(_) => "String",
        Json::Array(_) => "Array",
        Json::Object(_) => "Object",
    }
}

/// Type name of a slot, treating absence as its own kind
pub fn slot_type_name(slot: &Slot) -> &'static str {
    match slot {
        Some(v) => type_name(v),
        None => "Undefined",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!(null)), "Null");
        assert_eq!(type_name(&json!(1.5)), "Number");
        assert_eq!(type_name(&json!("x")), "String");
        assert_eq!(type_name(&json!({})), "Object");
    }

    #[test]
    fn test_slot_type_name_undefined() {
        assert_eq!(slot_type_name(&None), "Undefined");
        assert_eq!(slot_type_name(&Some(json!(null))), "Null");
    }
}
