//! jota Plugin System
//!
//! The contract between a set of extension functions and a host expression
//! engine:
//! - `ExtensionFunction`: a named, pure function with a declared calling
//!   convention
//! - `signature`: the compact per-parameter/return encoding the host consumes
//! - `HostEngine` / `ExtensionSet`: the registration protocol

mod registry;
pub mod signature;
mod traits;

pub use registry::{ExtensionSet, HostEngine, NativeFn};
pub use traits::{ExtensionFunction, FunctionMeta, ParamSpec, ParamType};

/// Re-export core types for function authors
pub mod prelude {
    pub use crate::{
        ExtensionFunction, ExtensionSet, FunctionMeta, HostEngine, NativeFn, ParamSpec, ParamType,
    };
    pub use jota_core::prelude::*;
}
