//! CLI configuration stored in `dotpath.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::accessor::Accessor;
use crate::core::defaults::{DEFAULT_SEPARATOR, DelimiterSplitter};
use crate::io::document::Format;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "dotpath.toml";

/// CLI configuration (TOML).
///
/// Missing fields default to the library's default behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DotpathConfig {
    /// Segment separator for keys.
    pub separator: String,

    /// Pretty-print JSON output and written JSON documents.
    pub pretty: bool,

    /// Force a document format instead of inferring it from the extension.
    pub format: Option<Format>,
}

impl Default for DotpathConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            pretty: true,
            format: None,
        }
    }
}

impl DotpathConfig {
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(anyhow!("separator must be a non-empty string"));
        }
        Ok(())
    }

    /// Accessor honoring the configured separator.
    pub fn accessor(&self) -> Result<Accessor> {
        if self.separator == DEFAULT_SEPARATOR {
            return Ok(Accessor::new());
        }
        let splitter = DelimiterSplitter::new(self.separator.as_str())
            .ok_or_else(|| anyhow!("separator must be a non-empty string"))?;
        Ok(Accessor::new().with_splitter(splitter))
    }

    /// Format for `path`, honoring the `format` override.
    pub fn format_for(&self, path: &Path) -> Format {
        self.format.unwrap_or_else(|| Format::from_path(path))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DotpathConfig::default()`.
pub fn load_config(path: &Path) -> Result<DotpathConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DotpathConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DotpathConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config for a CLI invocation.
///
/// An explicit path must exist; otherwise `dotpath.toml` in `cwd` is used
/// when present.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<DotpathConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow!("config file not found: {}", path.display()));
            }
            load_config(path)
        }
        None => load_config(&default_config_path(cwd)),
    }
}

pub fn default_config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE_NAME)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DotpathConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
