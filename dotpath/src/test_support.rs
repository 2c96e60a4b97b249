//! Test-only helpers for constructing documents.

use serde_json::{Value, json};

/// `{"lvl1": {"lvl2": {"one": 1, "two": 2}}}`
pub fn nested_fixture() -> Value {
    json!({
        "lvl1": {
            "lvl2": {
                "one": 1,
                "two": 2
            }
        }
    })
}

/// A sequence of integer values, e.g. `seq(&[1, 2])` is `[1, 2]`.
pub fn seq(items: &[i64]) -> Vec<Value> {
    items.iter().map(|item| json!(item)).collect()
}
