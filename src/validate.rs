//! Required-field validation walk.
//!
//! Walks a struct's generated field descriptors against the decode
//! presence set, descending into nested tables. Fails on the first
//! required key that was absent from the source text.

use crate::error::ConfigError;
use crate::field::{FieldKind, FieldSpec};
use crate::presence::ConfigPresence;

/// Check every required field described by `specs`, recursively.
///
/// `path` is the key-path stack built up so far; one slot is pushed on
/// entry and reused for each sibling, so the walk allocates nothing per
/// field. Nested tables are descended into whether or not the table field
/// itself is required: if an optional block is absent, lookups for its
/// children miss too, so a required child of an absent block still fails
/// with its full dot path.
pub(crate) fn check_required(
    presence: &ConfigPresence,
    specs: &[FieldSpec],
    path: &mut Vec<&'static str>,
) -> Result<(), ConfigError> {
    path.push("");
    for spec in specs {
        let Some(key) = spec.key else {
            // No config key: the field does not participate.
            continue;
        };
        if let Some(last) = path.last_mut() {
            *last = key;
        }
        if spec.required && !presence.is_defined(path) {
            let joined = path.join(".");
            path.pop();
            return Err(ConfigError::MissingField { path: joined });
        }
        if let FieldKind::Table(sub_specs) = spec.kind {
            if let Err(err) = check_required(presence, sub_specs(), path) {
                path.pop();
                return Err(err);
            }
        }
    }
    path.pop();
    Ok(())
}

/// Validate `T`'s declared required fields against a presence set.
///
/// Entry point used by the loader; also callable directly when the caller
/// has already decoded a [`ConfigPresence`] by other means.
pub fn validate_required<T: crate::ConfigFields>(
    presence: &ConfigPresence,
) -> Result<(), ConfigError> {
    let mut path: Vec<&'static str> = Vec::new();
    check_required(presence, T::field_specs(), &mut path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FieldSpec};

    fn leaf_specs() -> &'static [FieldSpec] {
        const SPECS: &[FieldSpec] = &[
            FieldSpec {
                key: Some("cert"),
                required: true,
                kind: FieldKind::Scalar,
            },
            FieldSpec {
                key: Some("key"),
                required: false,
                kind: FieldKind::Scalar,
            },
        ];
        SPECS
    }

    fn root_specs() -> &'static [FieldSpec] {
        const SPECS: &[FieldSpec] = &[
            FieldSpec {
                key: Some("port"),
                required: true,
                kind: FieldKind::Scalar,
            },
            FieldSpec {
                key: None,
                required: false,
                kind: FieldKind::Scalar,
            },
            FieldSpec {
                key: Some("tls"),
                required: false,
                kind: FieldKind::Table(leaf_specs),
            },
        ];
        SPECS
    }

    fn walk(toml: &str) -> Result<(), ConfigError> {
        let presence = ConfigPresence::from_toml(toml).unwrap();
        let mut path = Vec::new();
        check_required(&presence, root_specs(), &mut path)
    }

    #[test]
    fn test_all_required_present() {
        assert!(walk("port = 80\n[tls]\ncert = \"c.pem\"").is_ok());
    }

    #[test]
    fn test_missing_top_level_required() {
        let err = walk("[tls]\ncert = \"c.pem\"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref path } if path == "port"));
    }

    #[test]
    fn test_missing_nested_required() {
        let err = walk("port = 80\n[tls]\nkey = \"k.pem\"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref path } if path == "tls.cert"));
    }

    #[test]
    fn test_absent_optional_block_cascades() {
        // The tls block is optional, but its required child is still
        // checked and reported with the full path.
        let err = walk("port = 80").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref path } if path == "tls.cert"));
    }

    #[test]
    fn test_keyless_field_is_inert() {
        // The key-less entry sits between port and tls; it must neither
        // fail nor disturb sibling paths.
        assert!(walk("port = 80\n[tls]\ncert = \"c.pem\"").is_ok());
    }

    #[test]
    fn test_path_stack_restored_after_walk() {
        let presence = ConfigPresence::from_toml("port = 80\n[tls]\ncert = \"c.pem\"").unwrap();
        let mut path = vec!["prefix"];
        check_required(&presence, leaf_specs(), &mut path).unwrap_err();
        assert_eq!(path, vec!["prefix"]);
    }
}
