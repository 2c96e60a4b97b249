//! I/O helpers for the `dotpath` CLI.

pub mod config;
pub mod document;
