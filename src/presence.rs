//! Decode metadata: which key paths were textually present.

use rustc_hash::FxHashSet;

/// Tracks which TOML paths were explicitly present in the source text.
///
/// Paths are dot-separated (e.g. `server.tls.cert`). Built once per load
/// from the parsed value tree, before the struct is populated, so it
/// records textual presence independent of any default-filled values.
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Build presence set from an already parsed value tree.
    pub fn from_value(value: &toml::Value) -> Self {
        let mut presence = Self::default();
        presence.collect_value("", value);
        presence
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    /// Check presence of a path given as individual key segments.
    #[inline]
    pub fn is_defined(&self, segments: &[&str]) -> bool {
        !segments.is_empty() && self.paths.contains(&segments.join("."))
    }

    fn collect_value(&mut self, prefix: &str, value: &toml::Value) {
        match value {
            toml::Value::Table(table) => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
                for (key, child) in table {
                    let next = if prefix.is_empty() {
                        key.to_string()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.collect_value(&next, child);
                }
            }
            toml::Value::Array(items) => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
                // Keep traversing table items to capture nested keys in array-of-table cases.
                for item in items {
                    if matches!(item, toml::Value::Table(_)) {
                        self.collect_value(prefix, item);
                    }
                }
            }
            _ => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigPresence;

    #[test]
    fn collect_field_and_section_paths() {
        let toml = r#"
[server]
host = "127.0.0.1"

[server.tls]
cert = "cert.pem"
"#;
        let presence = ConfigPresence::from_toml(toml).unwrap();
        assert!(presence.contains("server"));
        assert!(presence.contains("server.host"));
        assert!(presence.contains("server.tls"));
        assert!(presence.contains("server.tls.cert"));
        assert!(!presence.contains("server.port"));
    }

    #[test]
    fn collect_scalar_fields_without_table_header() {
        let toml = r#"title = "hello""#;
        let presence = ConfigPresence::from_toml(toml).unwrap();
        assert!(presence.contains("title"));
        assert!(!presence.contains("server"));
    }

    #[test]
    fn collect_array_of_tables() {
        let toml = r#"
[[peer]]
addr = "10.0.0.1"

[[peer]]
addr = "10.0.0.2"
name = "second"
"#;
        let presence = ConfigPresence::from_toml(toml).unwrap();
        assert!(presence.contains("peer"));
        assert!(presence.contains("peer.addr"));
        assert!(presence.contains("peer.name"));
    }

    #[test]
    fn is_defined_joins_segments() {
        let presence = ConfigPresence::from_toml("[server]\nport = 80").unwrap();
        assert!(presence.is_defined(&["server", "port"]));
        assert!(!presence.is_defined(&["server", "host"]));
        assert!(!presence.is_defined(&[]));
    }

    #[test]
    fn empty_path_is_never_present() {
        let presence = ConfigPresence::from_toml("a = 1").unwrap();
        assert!(!presence.contains(""));
    }
}
