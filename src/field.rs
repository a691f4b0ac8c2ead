//! Field descriptors and type-safe config field paths.
//!
//! | Type           | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `FieldPath`    | Typed dot path for diagnostic messages           |
//! | `FieldSpec`    | One declared field of a config struct            |
//! | `FieldKind`    | Scalar vs. nested-table field                    |
//! | `ConfigFields` | Access to a struct's generated descriptor table  |

use owo_colors::OwoColorize;
use std::fmt;

// ============================================================================
// FieldPath
// ============================================================================

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config, Deserialize)]
/// #[config(section = "server")]
/// pub struct ServerConfig {
///     pub port: u16,
/// }
///
/// // Generated:
/// impl ServerConfig {
///     pub const FIELDS: ServerConfigFields = ...;
/// }
///
/// // Usage:
/// eprintln!("bad value for {}", ServerConfig::FIELDS.port);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// A single declared field of a config struct.
///
/// Tables of these are generated by `#[derive(Config)]`, one entry per
/// named field in declaration order. The required-field validator walks
/// them against the decode [`ConfigPresence`](crate::ConfigPresence) set.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Config key, or `None` for fields that do not participate in
    /// configuration (`#[config(skip)]`).
    pub key: Option<&'static str>,
    /// Whether the key must be present in the config file.
    pub required: bool,
    /// Scalar value or nested table.
    pub kind: FieldKind,
}

/// Value kind of a declared field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Plain value; presence is checked, nothing is descended into.
    Scalar,
    /// Nested table. Holds the accessor for the nested struct's own
    /// descriptor table, so the validator can recurse.
    Table(fn() -> &'static [FieldSpec]),
}

/// Access to the generated field-descriptor table of a config struct.
///
/// Implemented by `#[derive(Config)]`; not meant to be written by hand.
pub trait ConfigFields {
    /// The struct's field descriptors, in declaration order.
    fn field_specs() -> &'static [FieldSpec];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        let path = FieldPath::new("server.port");
        assert_eq!(path.as_str(), "server.port");
        assert_eq!(path.as_ref(), "server.port");
    }

    #[test]
    fn test_field_path_display_contains_path() {
        let path = FieldPath::new("deploy.provider");
        let rendered = format!("{path}");
        assert!(rendered.contains("deploy.provider"));
    }
}
