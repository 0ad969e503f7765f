//! HTML to plain text conversion

use crate::helpers::{optional_object, require_str};
use jota_core::{type_name, ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};

const DEFAULT_WRAP_WIDTH: usize = 80;

/// Convert HTML markup to plain text, wrapping at `width` columns
pub fn html_to_text(html: &str, width: usize) -> String {
    html2text::from_read(html.as_bytes(), width)
}

pub struct HtmlToText;

static HTML_TO_TEXT_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("html", ParamType::String, "HTML markup"),
    ParamSpec::optional("options", ParamType::Object, "wordwrap: wrap width (default 80)"),
];

static HTML_TO_TEXT_EXAMPLES: [&str; 1] =
    ["htmlToText(\"<p>Hello <b>world</b></p>\") → \"Hello world\""];

impl ExtensionFunction for HtmlToText {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "htmlToText",
            description: "Convert HTML markup to plain text",
            params: &HTML_TO_TEXT_PARAMS,
            returns: ParamType::String,
            examples: &HTML_TO_TEXT_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        let html = require_str(args, 0, "htmlToText", "html")?;
        let mut width = DEFAULT_WRAP_WIDTH;
        if let Some(options) = optional_object(args, 1, "htmlToText", "options")? {
            if let Some(v) = options.get("wordwrap") {
                width = v
                    .as_u64()
                    .map(|n| n as usize)
                    .ok_or_else(|| ExtError::option_type("wordwrap", v, type_name(v)))?;
            }
        }
        Ok(Some(Json::String(html_to_text(html, width))))
    }
}
