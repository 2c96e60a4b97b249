//! Container handles passed to the read and write strategies.
//!
//! A handle says both *what* container is being addressed and *how* the
//! caller holds it. The distinction matters only for sequences: a
//! [`Slot::Slice`] is a sequence handed over by value and can never change
//! length, while [`Slot::Seq`] (or an array behind [`Slot::Value`]) is held by
//! reference and may grow by one element at its end.

use serde_json::{Map, Value};

/// Read-only handle to a container.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Any value, unwrapped one level by [`Node::resolve`].
    Value(&'a Value),
    Seq(&'a [Value]),
    Map(&'a Map<String, Value>),
}

impl<'a> Node<'a> {
    /// Unwrap a `Value` holding an array or object into the matching handle.
    pub fn resolve(self) -> Node<'a> {
        match self {
            Node::Value(Value::Array(items)) => Node::Seq(items),
            Node::Value(Value::Object(map)) => Node::Map(map),
            other => other,
        }
    }

    /// Name of the concrete shape behind this handle, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Value(value) => kind_name(value),
            Node::Seq(_) => "array",
            Node::Map(_) => "object",
        }
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        Node::Value(value)
    }
}

impl<'a> From<&'a [Value]> for Node<'a> {
    fn from(items: &'a [Value]) -> Self {
        Node::Seq(items)
    }
}

impl<'a> From<&'a Vec<Value>> for Node<'a> {
    fn from(items: &'a Vec<Value>) -> Self {
        Node::Seq(items.as_slice())
    }
}

impl<'a> From<&'a Map<String, Value>> for Node<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Node::Map(map)
    }
}

/// Mutable handle to a container.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Reference to any value. Arrays behind it may grow.
    Value(&'a mut Value),
    /// Sequence held by reference; writes may append at `len`.
    Seq(&'a mut Vec<Value>),
    /// Sequence held by value; writes must land on an existing index.
    Slice(&'a mut [Value]),
    Map(&'a mut Map<String, Value>),
}

impl<'a> Slot<'a> {
    /// Unwrap a `Value` holding an array or object into the matching handle.
    ///
    /// An array reached this way resolves to [`Slot::Seq`], never
    /// [`Slot::Slice`].
    pub fn resolve(self) -> Slot<'a> {
        match self {
            Slot::Value(value) => match value {
                Value::Array(items) => Slot::Seq(items),
                Value::Object(map) => Slot::Map(map),
                other => Slot::Value(other),
            },
            other => other,
        }
    }

    /// Handle for a value the read strategy handed back during descent.
    ///
    /// The reader returns the element itself, not the slot owning it, so an
    /// array reached this way is fixed-length: [`Slot::Slice`].
    pub fn descended(value: &'a mut Value) -> Slot<'a> {
        match value {
            Value::Array(items) => Slot::Slice(items.as_mut_slice()),
            other => Slot::Value(other),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Slot::Value(value) => kind_name(value),
            Slot::Seq(_) | Slot::Slice(_) => "array",
            Slot::Map(_) => "object",
        }
    }
}

impl<'a> From<&'a mut Value> for Slot<'a> {
    fn from(value: &'a mut Value) -> Self {
        Slot::Value(value)
    }
}

impl<'a> From<&'a mut Vec<Value>> for Slot<'a> {
    fn from(items: &'a mut Vec<Value>) -> Self {
        Slot::Seq(items)
    }
}

impl<'a> From<&'a mut [Value]> for Slot<'a> {
    fn from(items: &'a mut [Value]) -> Self {
        Slot::Slice(items)
    }
}

impl<'a> From<&'a mut Map<String, Value>> for Slot<'a> {
    fn from(map: &'a mut Map<String, Value>) -> Self {
        Slot::Map(map)
    }
}

/// JSON type name of `value`.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
