//! Logic-less template rendering

use crate::helpers::optional_str;
use handlebars::Handlebars;
use jota_core::{ExtError, Json, Slot};
use jota_plugin::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};

/// Render `template` against `value`
pub fn render(value: &Json, template: &str) -> Result<String, ExtError> {
    let registry = Handlebars::new();
    registry
        .render_template(template, value)
        .map_err(|e| ExtError::template_error(e.to_string()))
}

// ============ RenderTemplate ============

pub struct RenderTemplate;

static RENDER_TEMPLATE_PARAMS: [ParamSpec; 2] = [
    ParamSpec::required("value", ParamType::Object, "Data to render against"),
    ParamSpec::optional("template", ParamType::String, "Logic-less template string"),
];

static RENDER_TEMPLATE_EXAMPLES: [&str; 1] =
    ["renderTemplate({\"name\": \"Ada\"}, \"Hello {{name}}\") → \"Hello Ada\""];

impl ExtensionFunction for RenderTemplate {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "renderTemplate",
            description: "Render a logic-less template against a data object",
            params: &RENDER_TEMPLATE_PARAMS,
            returns: ParamType::String,
            examples: &RENDER_TEMPLATE_EXAMPLES,
        }
    }

    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError> {
        // The registry wrapper already handled an undefined value; an absent
        // template is the documented exception to the convention: the value
        // passes through unchanged rather than becoming undefined.
        let Some(template) = optional_str(args, 1, "renderTemplate", "template")? else {
            return Ok(args[0].clone());
        };
        let value = match args.first() {
            Some(Some(v)) => v,
            _ => return Ok(None),
        };
        render(value, template).map(|s| Some(Json::String(s)))
    }
}
