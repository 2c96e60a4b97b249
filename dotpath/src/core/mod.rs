//! Deterministic, pure traversal logic.
//!
//! Core modules are free of I/O. They operate on in-memory `serde_json`
//! values and return deterministic outputs suitable for tests.

pub mod accessor;
pub mod defaults;
pub mod error;
pub mod strategy;
pub mod target;
