//! Load and store JSON or TOML documents as untyped values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infer from extension: `.toml` is TOML, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Read and parse a document from disk.
pub fn load_document(path: &Path, format: Format) -> Result<Value> {
    debug!(path = %path.display(), ?format, "loading document");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read document {}", path.display()))?;
    let value = match format {
        Format::Json => serde_json::from_str(&contents)
            .with_context(|| format!("parse json {}", path.display()))?,
        Format::Toml => toml::from_str::<Value>(&contents)
            .with_context(|| format!("parse toml {}", path.display()))?,
    };
    Ok(value)
}

/// Atomically write `value` to disk (temp file + rename).
pub fn store_document(path: &Path, format: Format, value: &Value, pretty: bool) -> Result<()> {
    debug!(path = %path.display(), ?format, pretty, "writing document");
    let buf = render_document(format, value, pretty)?;
    write_atomic(path, &buf)
}

fn render_document(format: Format, value: &Value, pretty: bool) -> Result<String> {
    match format {
        Format::Json => {
            let mut buf = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            }
            .context("serialize json")?;
            buf.push('\n');
            Ok(buf)
        }
        Format::Toml => {
            if !value.is_object() {
                bail!("toml documents must have a table at the root");
            }
            let buf = if pretty {
                toml::to_string_pretty(value)
            } else {
                toml::to_string(value)
            }
            .context("serialize toml")?;
            Ok(buf)
        }
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("document path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp document {}", Path::new(&tmp_path).display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace document {}", path.display()))?;
    Ok(())
}
