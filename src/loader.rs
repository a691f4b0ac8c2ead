//! Config loading and dumping.
//!
//! The loader runs a fixed pipeline over a TOML file:
//!
//! 1. read the file
//! 2. parse it into a `toml::Value` tree
//! 3. record which key paths were present ([`ConfigPresence`])
//! 4. deserialize the caller's struct, collecting unknown keys
//! 5. apply the unknown-key policy
//! 6. walk the struct's field descriptors, enforcing `required` markers
//!
//! Dumping is the reverse rendering only: no validation, 4-space
//! indentation for nested table blocks.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::field::ConfigFields;
use crate::presence::ConfigPresence;
use crate::validate::validate_required;

// ============================================================================
// Loader
// ============================================================================

/// What to do with config keys that no struct field maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Ignore silently.
    Allow,
    /// Log each unknown key path via `tracing::warn` and continue.
    #[default]
    Warn,
    /// Fail the load with [`ConfigError::UnknownFields`].
    Deny,
}

/// Configuration loader.
///
/// # Example
///
/// ```ignore
/// let config: AppConfig = Loader::new()
///     .unknown_keys(UnknownKeys::Deny)
///     .load("app.toml")?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    unknown_keys: UnknownKeys,
}

impl Loader {
    /// Create a loader with the default policy (warn on unknown keys).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-key policy.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Load a config file into `T`, then enforce its required fields.
    pub fn load<T>(&self, path: impl AsRef<Path>) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + ConfigFields,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading config file");
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        self.from_str(&content)
    }

    /// Decode and validate `T` from TOML text.
    pub fn from_str<T>(&self, content: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + ConfigFields,
    {
        let value: toml::Value = toml::from_str(content)?;
        let presence = ConfigPresence::from_value(&value);

        let mut ignored = Vec::new();
        let config: T = serde_ignored::deserialize(value, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;

        if !ignored.is_empty() {
            match self.unknown_keys {
                UnknownKeys::Allow => {}
                UnknownKeys::Warn => {
                    for key in &ignored {
                        warn!(key = %key, "unknown config field ignored");
                    }
                }
                UnknownKeys::Deny => return Err(ConfigError::UnknownFields(ignored)),
            }
        }

        validate_required::<T>(&presence)?;
        debug!("configuration loaded and validated");
        Ok(config)
    }
}

// ============================================================================
// dump
// ============================================================================

/// Serialize a config struct back to TOML text.
///
/// Rendering only - no validation. Nested table blocks are indented by
/// 4 spaces per level. Scalar codecs run through each value's `Serialize`
/// impl; a value that cannot be encoded fails with [`ConfigError::Dump`].
pub fn dump<T: Serialize>(config: &T) -> Result<String, ConfigError> {
    let rendered = toml::to_string_pretty(config)?;
    Ok(indent_tables(&rendered))
}

/// Re-indent pretty TOML so nested tables step in by 4 spaces.
///
/// A `[a.b]` header sits at depth = number of dots; the keys under it one
/// level deeper. Lines inside multi-line strings pass through untouched.
fn indent_tables(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len() + rendered.len() / 4);
    let mut key_indent = 0usize;
    let mut in_multiline = false;

    for line in rendered.lines() {
        if in_multiline {
            out.push_str(line);
            out.push('\n');
            in_multiline = line.matches("\"\"\"").count() % 2 == 0;
            continue;
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            out.push('\n');
            continue;
        }

        let indent = if trimmed.starts_with('[') {
            let name = trimmed.trim_start_matches('[').trim_end_matches(']');
            let depth = name.matches('.').count();
            key_indent = depth + 1;
            depth
        } else {
            key_indent
        };

        for _ in 0..indent {
            out.push_str("    ");
        }
        out.push_str(trimmed);
        out.push('\n');

        if trimmed.matches("\"\"\"").count() % 2 == 1 {
            in_multiline = true;
        }
    }
    out
}
