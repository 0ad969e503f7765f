//! jota Core - Fundamental types
//!
//! This crate provides the core types used throughout jota:
//! - `Json` / `Slot`: the host engine's value domain, undefined-aware
//! - `ExtError`: structured errors with machine-readable codes
//! - `codepoint`: helpers for codepoint-based string bounding

mod error;
mod value;

pub mod codepoint;

pub use error::{codes, ExtError};
pub use value::{slot_type_name, type_name, Json, Slot};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{slot_type_name, type_name, ExtError, Json, Slot};
}
