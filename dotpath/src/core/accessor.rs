//! Multi-segment traversal over configurable strategies.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::defaults::{DefaultReader, DefaultSplitter, DefaultWriter};
use crate::core::error::AccessError;
use crate::core::strategy::{Reader, Splitter, Writer};
use crate::core::target::{Node, Slot};

/// Reads and writes values at dot-notation keys.
///
/// Unset strategy slots fall back to [`DefaultSplitter`], [`DefaultReader`]
/// and [`DefaultWriter`]. The accessor holds no other state and can be cloned
/// and shared freely.
///
/// ```
/// use dotpath::Accessor;
/// use serde_json::json;
///
/// let mut doc = json!({"lvl1": {"lvl2": {"one": 1, "two": 2}}});
/// let accessor = Accessor::new();
///
/// accessor.set(&mut doc, "lvl1.lvl2.one", json!(3)).unwrap();
/// assert_eq!(accessor.get(&doc, "lvl1.lvl2.one").unwrap(), &json!(3));
/// ```
#[derive(Clone, Default)]
pub struct Accessor {
    splitter: Option<Arc<dyn Splitter>>,
    reader: Option<Arc<dyn Reader>>,
    writer: Option<Arc<dyn Writer>>,
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("custom_splitter", &self.splitter.is_some())
            .field("custom_reader", &self.reader.is_some())
            .field("custom_writer", &self.writer.is_some())
            .finish()
    }
}

impl Accessor {
    /// Accessor using the default strategies for every slot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_splitter(mut self, splitter: impl Splitter + 'static) -> Self {
        self.splitter = Some(Arc::new(splitter));
        self
    }

    pub fn with_reader(mut self, reader: impl Reader + 'static) -> Self {
        self.reader = Some(Arc::new(reader));
        self
    }

    pub fn with_writer(mut self, writer: impl Writer + 'static) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    /// Segments the configured splitter produces for `key`.
    pub fn split(&self, key: &str) -> Vec<String> {
        match &self.splitter {
            Some(splitter) => splitter.split(key),
            None => DefaultSplitter.split(key),
        }
    }

    /// Resolve `key` against `target` and return a reference to the value.
    ///
    /// Fails on the first segment that cannot be resolved.
    pub fn get<'a>(
        &self,
        target: impl Into<Node<'a>>,
        key: &str,
    ) -> Result<&'a Value, AccessError> {
        let segments = self.segments(key)?;
        let mut node = target.into();
        let last = segments.len() - 1;

        for (depth, segment) in segments[..last].iter().enumerate() {
            trace!(key, depth, segment = %segment, container = node.kind_name(), "descending");
            let next = self
                .read(node, segment)
                .inspect_err(|err| debug!(key, depth, error = %err, "get failed"))?;
            node = Node::Value(next);
        }

        self.read(node, &segments[last])
            .inspect_err(|err| debug!(key, depth = last, error = %err, "get failed"))
    }

    /// Resolve `key` and deserialize a copy of the value into `T`.
    pub fn get_as<'a, T: DeserializeOwned>(
        &self,
        target: impl Into<Node<'a>>,
        key: &str,
    ) -> Result<T, AccessError> {
        let value = self.get(target, key)?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Write `value` at `key`.
    ///
    /// Every intermediate container must already exist; only the terminal
    /// segment is ever created. Arrays reached by descent are fixed-length,
    /// so only a root `&mut Vec<Value>` or `&mut Value` array can be appended
    /// to. Nothing is mutated when an error is returned
    /// by the default strategies.
    pub fn set<'a>(
        &self,
        target: impl Into<Slot<'a>>,
        key: &str,
        value: Value,
    ) -> Result<(), AccessError> {
        let segments = self.segments(key)?;
        let mut slot = target.into();
        let last = segments.len() - 1;

        for (depth, segment) in segments[..last].iter().enumerate() {
            trace!(key, depth, segment = %segment, container = slot.kind_name(), "descending");
            let next = self
                .read_mut(slot, segment)
                .inspect_err(|err| debug!(key, depth, error = %err, "set failed"))?;
            slot = Slot::descended(next);
        }

        self.write(slot, &segments[last], value)
            .inspect_err(|err| debug!(key, depth = last, error = %err, "set failed"))
    }

    fn segments(&self, key: &str) -> Result<Vec<String>, AccessError> {
        let segments = self.split(key);
        if segments.is_empty() {
            debug!(key, "splitter produced no segments");
            return Err(AccessError::EmptyPath {
                key: key.to_string(),
            });
        }
        Ok(segments)
    }

    fn read<'a>(&self, node: Node<'a>, property: &str) -> Result<&'a Value, AccessError> {
        match &self.reader {
            Some(reader) => reader.read(node, property),
            None => DefaultReader.read(node, property),
        }
    }

    fn read_mut<'a>(&self, slot: Slot<'a>, property: &str) -> Result<&'a mut Value, AccessError> {
        match &self.reader {
            Some(reader) => reader.read_mut(slot, property),
            None => DefaultReader.read_mut(slot, property),
        }
    }

    fn write(&self, slot: Slot<'_>, property: &str, value: Value) -> Result<(), AccessError> {
        match &self.writer {
            Some(writer) => writer.write(slot, property, value),
            None => DefaultWriter.write(slot, property, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ErrorKind, Op};
    use crate::test_support::nested_fixture;
    use serde_json::json;

    struct Case {
        name: &'static str,
        key: &'static str,
        target: Value,
        before: Option<Value>,
        after: Value,
        set_fails: bool,
        outcome: Value,
    }

    fn cases() -> Vec<Case> {
        vec![
            Case {
                name: "empty map",
                key: "one",
                target: json!({}),
                before: None,
                after: json!(1),
                set_fails: false,
                outcome: json!({"one": 1}),
            },
            Case {
                name: "empty map nested set failure",
                key: "one.two",
                target: json!({}),
                before: None,
                after: json!(1),
                set_fails: true,
                outcome: json!({}),
            },
            Case {
                name: "existing map set collision",
                key: "one",
                target: json!({"one": 1, "two": 2}),
                before: Some(json!(1)),
                after: json!(3),
                set_fails: false,
                outcome: json!({"one": 3, "two": 2}),
            },
            Case {
                name: "existing map set miss",
                key: "three",
                target: json!({"one": 1, "two": 2}),
                before: None,
                after: json!(3),
                set_fails: false,
                outcome: json!({"one": 1, "two": 2, "three": 3}),
            },
            Case {
                name: "existing map set collision on null value",
                key: "three",
                target: json!({"one": 1, "two": 2, "three": null}),
                before: Some(Value::Null),
                after: json!(3),
                set_fails: false,
                outcome: json!({"one": 1, "two": 2, "three": 3}),
            },
            Case {
                name: "existing map set collision nested",
                key: "lvl1.lvl2.one",
                target: nested_fixture(),
                before: Some(json!(1)),
                after: json!(3),
                set_fails: false,
                outcome: json!({"lvl1": {"lvl2": {"one": 3, "two": 2}}}),
            },
        ]
    }

    fn explicit_defaults() -> Accessor {
        Accessor::new()
            .with_splitter(DefaultSplitter)
            .with_reader(DefaultReader)
            .with_writer(DefaultWriter)
    }

    #[test]
    fn get_then_set_then_get() {
        for accessor in [Accessor::new(), explicit_defaults()] {
            for mut case in cases() {
                let before = accessor.get(&case.target, case.key).ok().cloned();
                assert_eq!(before, case.before, "{}: before", case.name);

                let result = accessor.set(&mut case.target, case.key, case.after.clone());
                assert_eq!(result.is_err(), case.set_fails, "{}: set", case.name);

                let after = accessor.get(&case.target, case.key).ok().cloned();
                let expected = if case.set_fails {
                    case.before.clone()
                } else {
                    Some(case.after.clone())
                };
                assert_eq!(after, expected, "{}: after", case.name);
                assert_eq!(case.target, case.outcome, "{}: outcome", case.name);
            }
        }
    }

    #[test]
    fn empty_split_is_an_error() {
        let accessor = Accessor::new().with_splitter(|_: &str| Vec::<String>::new());

        let err = accessor.get(&Value::Null, "key").expect_err("empty path");
        assert_eq!(err.to_string(), "no properties parsed from key: key");

        let mut target = Value::Null;
        let err = accessor
            .set(&mut target, "key", Value::Null)
            .expect_err("empty path");
        assert_eq!(err.kind(), ErrorKind::EmptyPath);
    }

    #[test]
    fn intermediate_failures_short_circuit() {
        let mut doc = json!({"a": 1});
        let err = Accessor::new()
            .set(&mut doc, "a.b.c", json!(2))
            .expect_err("scalar intermediate");
        assert!(matches!(
            err,
            AccessError::UnsupportedType {
                op: Op::Get,
                found: "number",
                ..
            }
        ));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn nested_arrays_reached_by_descent_cannot_grow() {
        let mut doc = json!({"list": [1, 2]});
        let err = Accessor::new()
            .set(&mut doc, "list.2", json!(3))
            .expect_err("nested append");
        assert!(matches!(
            err,
            AccessError::IndexOutOfRange {
                op: Op::Set,
                len: 2,
                ..
            }
        ));
        assert_eq!(doc, json!({"list": [1, 2]}));

        Accessor::new()
            .set(&mut doc, "list.1", json!(3))
            .expect("in place");
        assert_eq!(doc, json!({"list": [1, 3]}));
    }

    #[test]
    fn root_value_arrays_can_grow() {
        let mut doc = json!([1, 2]);
        Accessor::new().set(&mut doc, "2", json!(3)).expect("append");
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn custom_writer_replaces_terminal_step() {
        fn wrapping_writer(slot: Slot<'_>, property: &str, value: Value) -> Result<(), AccessError> {
            DefaultWriter.write(slot, property, json!({ "wrapped": value }))
        }

        let accessor = Accessor::new().with_writer(wrapping_writer);
        let mut doc = json!({"a": {}});
        accessor.set(&mut doc, "a.b", json!(1)).expect("set");
        assert_eq!(doc, json!({"a": {"b": {"wrapped": 1}}}));
    }

    #[test]
    fn custom_splitter_is_used_for_both_directions() {
        let accessor = Accessor::new().with_splitter(|key: &str| {
            key.split('/').map(str::to_string).collect::<Vec<_>>()
        });
        let mut doc = json!({"a.b": {"c": 1}});
        accessor.set(&mut doc, "a.b/c", json!(2)).expect("set");
        assert_eq!(accessor.get(&doc, "a.b/c").expect("get"), &json!(2));
    }

    #[test]
    fn get_as_deserializes_a_copy() {
        let doc = nested_fixture();
        let accessor = Accessor::new();
        let value: u32 = accessor.get_as(&doc, "lvl1.lvl2.two").expect("u32");
        assert_eq!(value, 2);

        let err = accessor
            .get_as::<String>(&doc, "lvl1.lvl2.two")
            .expect_err("not a string");
        assert_eq!(err.kind(), ErrorKind::Deserialize);
    }
}
