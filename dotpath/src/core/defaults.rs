//! Baseline strategies over `serde_json` arrays and objects.
//!
//! Both readers and writers unwrap exactly one level of indirection: a
//! [`Slot::Value`] holding an array is treated as a growable sequence, one
//! holding an object as a mapping. None of these strategies mutate on failure.

use serde_json::Value;

use crate::core::error::{AccessError, Op};
use crate::core::strategy::{Reader, Splitter, Writer};
use crate::core::target::{Node, Slot, kind_name};

/// Separator used by [`DefaultSplitter`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// Splits on `.` with no escaping. `""` yields a single empty segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSplitter;

impl Splitter for DefaultSplitter {
    fn split(&self, key: &str) -> Vec<String> {
        key.split(DEFAULT_SEPARATOR).map(str::to_string).collect()
    }
}

/// Splits on an arbitrary non-empty delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSplitter {
    delimiter: String,
}

impl DelimiterSplitter {
    /// Returns `None` for an empty delimiter.
    pub fn new(delimiter: impl Into<String>) -> Option<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return None;
        }
        Some(Self { delimiter })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Splitter for DelimiterSplitter {
    fn split(&self, key: &str) -> Vec<String> {
        key.split(self.delimiter.as_str())
            .map(str::to_string)
            .collect()
    }
}

/// Reads array elements by integer index and object entries by key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultReader;

impl Reader for DefaultReader {
    fn read<'a>(&self, node: Node<'a>, property: &str) -> Result<&'a Value, AccessError> {
        match node.resolve() {
            Node::Seq(items) => {
                let index = parse_index(Op::Get, property, items.len(), Bound::Existing)?;
                Ok(&items[index])
            }
            Node::Map(map) => map
                .get(property)
                .ok_or_else(|| AccessError::missing_key(Op::Get, property)),
            Node::Value(value) => Err(AccessError::unsupported(
                Op::Get,
                property,
                kind_name(value),
            )),
        }
    }

    fn read_mut<'a>(&self, slot: Slot<'a>, property: &str) -> Result<&'a mut Value, AccessError> {
        match slot.resolve() {
            Slot::Seq(items) => {
                let index = parse_index(Op::Get, property, items.len(), Bound::Existing)?;
                Ok(&mut items[index])
            }
            Slot::Slice(items) => {
                let index = parse_index(Op::Get, property, items.len(), Bound::Existing)?;
                Ok(&mut items[index])
            }
            Slot::Map(map) => map
                .get_mut(property)
                .ok_or_else(|| AccessError::missing_key(Op::Get, property)),
            Slot::Value(value) => Err(AccessError::unsupported(
                Op::Get,
                property,
                kind_name(value),
            )),
        }
    }
}

/// Overwrites array slots, appends through growable sequences, and
/// inserts or overwrites object entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultWriter;

impl Writer for DefaultWriter {
    fn write(&self, slot: Slot<'_>, property: &str, value: Value) -> Result<(), AccessError> {
        match slot.resolve() {
            Slot::Slice(items) => {
                let index = parse_index(Op::Set, property, items.len(), Bound::Existing)?;
                items[index] = value;
                Ok(())
            }
            Slot::Seq(items) => {
                let index = parse_index(Op::Set, property, items.len(), Bound::Append)?;
                if index == items.len() {
                    items.push(value);
                } else {
                    items[index] = value;
                }
                Ok(())
            }
            Slot::Map(map) => {
                map.insert(property.to_string(), value);
                Ok(())
            }
            Slot::Value(target) => Err(AccessError::unsupported(
                Op::Set,
                property,
                kind_name(target),
            )),
        }
    }
}

/// Upper bound accepted by [`parse_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// `index < len`
    Existing,
    /// `index <= len`
    Append,
}

/// Parse `property` as a signed base-10 index and check it against `len`.
fn parse_index(op: Op, property: &str, len: usize, bound: Bound) -> Result<usize, AccessError> {
    let raw: i64 = property
        .parse()
        .map_err(|_| AccessError::non_integer(op, property))?;
    let index = usize::try_from(raw).map_err(|_| AccessError::out_of_range(op, property, len))?;
    let in_range = match bound {
        Bound::Existing => index < len,
        Bound::Append => index <= len,
    };
    if !in_range {
        return Err(AccessError::out_of_range(op, property, len));
    }
    Ok(index)
}
