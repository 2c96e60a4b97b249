//! Pluggable strategies composed by [`Accessor`](crate::Accessor).
//!
//! Each strategy handles one concern: turning a key into segments, resolving
//! one segment against a container, and writing one segment into a container.
//! Implementations must be deterministic for a given input, since `get` and
//! `set` of the same key rely on producing the same segments.

use serde_json::Value;

use crate::core::error::AccessError;
use crate::core::target::{Node, Slot};

/// Splits a key into the ordered segments to traverse.
pub trait Splitter: Send + Sync {
    fn split(&self, key: &str) -> Vec<String>;
}

/// Resolves a single segment against a container.
///
/// `read_mut` is used while descending for a write; it must follow the same
/// rules as `read` and must not mutate.
pub trait Reader: Send + Sync {
    fn read<'a>(&self, node: Node<'a>, property: &str) -> Result<&'a Value, AccessError>;

    fn read_mut<'a>(&self, slot: Slot<'a>, property: &str) -> Result<&'a mut Value, AccessError>;
}

/// Writes a single segment into a container.
pub trait Writer: Send + Sync {
    fn write(&self, slot: Slot<'_>, property: &str, value: Value) -> Result<(), AccessError>;
}

impl<F> Splitter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split(&self, key: &str) -> Vec<String> {
        self(key)
    }
}

impl<F> Writer for F
where
    F: Fn(Slot<'_>, &str, Value) -> Result<(), AccessError> + Send + Sync,
{
    fn write(&self, slot: Slot<'_>, property: &str, value: Value) -> Result<(), AccessError> {
        self(slot, property, value)
    }
}
