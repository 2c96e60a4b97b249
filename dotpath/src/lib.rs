//! Dot-notation access into untyped JSON documents.
//!
//! Given a `serde_json::Value` and a key such as `"a.b.2.c"`, [`get`] reads
//! and [`set`] writes the value at that path. The crate is split the same way
//! as its binary uses it:
//!
//! - **[`core`]**: Pure traversal logic. [`Accessor`] composes a
//!   [`Splitter`], a [`Reader`] and a [`Writer`], defaulting each to the
//!   built-in strategy.
//! - **[`io`]**: Side-effecting helpers used by the `dotpath` CLI (config and
//!   document files).
//!
//! [`global`] owns the process-wide default accessor the free functions
//! delegate to.

pub mod command;
pub mod core;
pub mod exit_codes;
pub mod global;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::accessor::Accessor;
pub use crate::core::defaults::{
    DEFAULT_SEPARATOR, DefaultReader, DefaultSplitter, DefaultWriter, DelimiterSplitter,
};
pub use crate::core::error::{AccessError, ErrorKind, Op};
pub use crate::core::strategy::{Reader, Splitter, Writer};
pub use crate::core::target::{Node, Slot};
pub use crate::global::{default_accessor, get, install_default, set};
