//! Extension function traits

use jota_core::{ExtError, Slot};
use serde::Serialize;

/// Parameter and return types in the host's calling convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Any,
}

/// Metadata about one positional parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub typ: ParamType,
    pub description: &'static str,
    pub optional: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, typ: ParamType, description: &'static str) -> Self {
        Self { name, typ, description, optional: false }
    }

    pub const fn optional(name: &'static str, typ: ParamType, description: &'static str) -> Self {
        Self { name, typ, description, optional: true }
    }
}

/// Metadata for an extension function
///
/// The parameter table is the single source of truth for the declared calling
/// convention: the encoded signature handed to the host is derived from it,
/// so declaration and implementation cannot drift apart silently.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub returns: ParamType,
    pub examples: &'static [&'static str],
}

/// Pure extension function
///
/// `call` receives one `Slot` per declared parameter; trailing optional
/// parameters may be absent from the slice. The undefined-propagation
/// convention (first slot undefined means return undefined) is applied by the
/// registry wrapper, not inside implementations.
pub trait ExtensionFunction: Send + Sync {
    fn meta(&self) -> FunctionMeta;
    fn call(&self, args: &[Slot]) -> Result<Slot, ExtError>;
}
