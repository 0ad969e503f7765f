//! Extension registration
//!
//! An `ExtensionSet` holds the fixed, enumerable set of functions and binds
//! them into any host implementing `HostEngine`. Binding wraps each function
//! once with the undefined-propagation adapter, so the convention lives in
//! one place instead of being duplicated across function bodies.

use crate::signature;
use crate::traits::ExtensionFunction;
use jota_core::{ExtError, Slot};
use std::sync::Arc;
use tracing::debug;

/// Native calling form handed to the host: one slot per argument in, one out
pub type NativeFn = Arc<dyn Fn(&[Slot]) -> Result<Slot, ExtError> + Send + Sync>;

/// Registration capability a host expression engine must expose
///
/// The trait itself is the capability: a typed host cannot "lack"
/// `register_function` the way a dynamic host object could. Re-registering a
/// name replaces the previous binding or not, per host semantics; the set
/// does not deduplicate.
pub trait HostEngine {
    fn register_function(
        &mut self,
        name: &str,
        implementation: NativeFn,
        signature: &str,
    ) -> Result<(), ExtError>;
}

/// Fixed set of extension functions awaiting a host to bind into
pub struct ExtensionSet {
    functions: Vec<Arc<dyn ExtensionFunction>>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self { functions: Vec::new() }
    }

    pub fn with_function<F: ExtensionFunction + 'static>(mut self, f: F) -> Self {
        self.functions.push(Arc::new(f));
        self
    }

    /// Names of the functions this set will bind, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.iter().map(|f| f.meta().name).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bind every function into `host`, one registration call each.
    ///
    /// `None` means the caller had no engine to hand over; that fails with
    /// the stable invalid-host error before any binding happens. A failure
    /// from the host mid-way aborts the loop; no partial registration is
    /// guaranteed or rolled back.
    pub fn register_into(&self, host: Option<&mut dyn HostEngine>) -> Result<(), ExtError> {
        let host = host.ok_or_else(ExtError::invalid_host)?;

        for f in &self.functions {
            let meta = f.meta();
            let sig = signature::encode(&meta);
            let inner = Arc::clone(f);
            let wrapped: NativeFn = Arc::new(move |args: &[Slot]| {
                // Undefined primary input short-circuits to undefined; the
                // implementation and its delegate are never invoked.
                match args.first() {
                    None | Some(None) => Ok(None),
                    Some(Some(_)) => inner.call(args),
                }
            });
            debug!(name = meta.name, signature = %sig, "registering extension function");
            host.register_function(meta.name, wrapped, &sig)?;
        }
        Ok(())
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new()
    }
}
