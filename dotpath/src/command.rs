//! Orchestration for `dotpath get`, `dotpath set` and `dotpath split`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::core::error::AccessError;
use crate::io::config::DotpathConfig;
use crate::io::document::{load_document, store_document};

/// Structured outcome of a document access.
#[derive(Debug)]
pub enum AccessOutcome {
    /// The key resolved to this value.
    Found(Value),
    /// The value was written and the document saved.
    Written,
    /// The key could not be resolved; the document was left untouched.
    Unresolved(AccessError),
}

/// Read `key` from the document at `path`.
pub fn get_from_file(path: &Path, key: &str, config: &DotpathConfig) -> Result<AccessOutcome> {
    let accessor = config.accessor()?;
    let doc = load_document(path, config.format_for(path))?;
    match accessor.get(&doc, key) {
        Ok(value) => Ok(AccessOutcome::Found(value.clone())),
        Err(err) => Ok(AccessOutcome::Unresolved(err)),
    }
}

/// Write `value` at `key` into the document at `path`, saving it in place.
pub fn set_in_file(
    path: &Path,
    key: &str,
    value: Value,
    config: &DotpathConfig,
) -> Result<AccessOutcome> {
    let accessor = config.accessor()?;
    let format = config.format_for(path);
    let mut doc = load_document(path, format)?;
    if let Err(err) = accessor.set(&mut doc, key, value) {
        debug!(path = %path.display(), key, "set rejected, document left untouched");
        return Ok(AccessOutcome::Unresolved(err));
    }
    store_document(path, format, &doc, config.pretty)
        .with_context(|| format!("save {}", path.display()))?;
    info!(path = %path.display(), key, "value written");
    Ok(AccessOutcome::Written)
}

/// Segments `key` splits into under `config`.
pub fn split_key(key: &str, config: &DotpathConfig) -> Result<Vec<String>> {
    Ok(config.accessor()?.split(key))
}

/// Interpret a CLI value argument: JSON when it parses, otherwise a string.
pub fn parse_value(raw: &str, force_string: bool) -> Value {
    if force_string {
        return Value::String(raw.to_string());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Render a value for stdout. Strings print raw, everything else as JSON.
pub fn render_value(value: &Value, pretty: bool) -> Result<String> {
    if let Value::String(text) = value {
        return Ok(text.clone());
    }
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("serialize value")
}
