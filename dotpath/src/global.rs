//! Process-wide default accessor.
//!
//! The default is initialized lazily on first use and never changes
//! afterwards. Applications that want different global behavior call
//! [`install_default`] once at startup, before any access goes through
//! [`get`] or [`set`].

use std::sync::OnceLock;

use serde_json::Value;

use crate::core::accessor::Accessor;
use crate::core::error::AccessError;
use crate::core::target::{Node, Slot};

static DEFAULT: OnceLock<Accessor> = OnceLock::new();

/// The shared accessor, initialized with [`Accessor::new`] if nothing was
/// installed.
pub fn default_accessor() -> &'static Accessor {
    DEFAULT.get_or_init(Accessor::new)
}

/// Install `accessor` as the process-wide default.
///
/// Returns the accessor back if a default was already installed or already
/// used.
pub fn install_default(accessor: Accessor) -> Result<(), Accessor> {
    DEFAULT.set(accessor)
}

/// Read `key` from `target` with the default accessor.
pub fn get<'a>(target: impl Into<Node<'a>>, key: &str) -> Result<&'a Value, AccessError> {
    default_accessor().get(target, key)
}

/// Write `value` at `key` in `target` with the default accessor.
pub fn set<'a>(target: impl Into<Slot<'a>>, key: &str, value: Value) -> Result<(), AccessError> {
    default_accessor().set(target, key, value)
}
