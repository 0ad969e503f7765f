//! Signature mini-language
//!
//! The host engine accepts a compact signature string per registered function
//! and uses it for argument coercion and validation: one character per
//! parameter, `?` for optional positions, then `:` and the return type, the
//! whole wrapped in angle brackets. `truncate(string, object?) -> string`
//! encodes as `<so?:s>`.
//!
//! Signatures are never written by hand; they are derived from the
//! `FunctionMeta` parameter table so the declared convention always matches
//! the declaration the implementation was written against.

use crate::traits::{FunctionMeta, ParamType};

impl ParamType {
    /// Single-character code in the host's signature alphabet
    pub fn code(self) -> char {
        match self {
            ParamType::String => 's',
            ParamType::Number => 'n',
            ParamType::Boolean => 'b',
            ParamType::Array => 'a',
            ParamType::Object => 'o',
            ParamType::Any => 'j',
        }
    }
}

/// Encode the calling convention declared by `meta`
pub fn encode(meta: &FunctionMeta) -> String {
    let mut out = String::with_capacity(meta.params.len() * 2 + 4);
    out.push('<');
    for p in meta.params {
        out.push(p.typ.code());
        if p.optional {
            out.push('?');
        }
    }
    out.push(':');
    out.push(meta.returns.code());
    out.push('>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ParamSpec;

    static TWO_ARG: [ParamSpec; 2] = [
        ParamSpec::required("text", ParamType::String, "input"),
        ParamSpec::optional("options", ParamType::Object, "settings"),
    ];

    fn meta(params: &'static [ParamSpec], returns: ParamType) -> FunctionMeta {
        FunctionMeta {
            name: "f",
            description: "",
            params,
            returns,
            examples: &[],
        }
    }

    #[test]
    fn test_encode_required_and_optional() {
        assert_eq!(encode(&meta(&TWO_ARG, ParamType::String)), "<so?:s>");
    }

    #[test]
    fn test_encode_no_params() {
        assert_eq!(encode(&meta(&[], ParamType::Object)), "<:o>");
    }

    #[test]
    fn test_codes_cover_all_types() {
        let codes: Vec<char> = [
            ParamType::String,
            ParamType::Number,
            ParamType::Boolean,
            ParamType::Array,
            ParamType::Object,
            ParamType::Any,
        ]
        .iter()
        .map(|t| t.code())
        .collect();
        assert_eq!(codes, vec!['s', 'n', 'b', 'a', 'o', 'j']);
    }
}
