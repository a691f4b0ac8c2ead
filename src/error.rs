//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, validating, or dumping a configuration.
///
/// Every variant is terminal to the call that produced it: nothing is
/// retried, and a failed load never hands back a partially filled struct.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Malformed TOML, or a scalar value its codec refused to parse.
    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// A field marked required was absent from the config file.
    /// The path is the full dot-joined key path (e.g. `server.port`).
    #[error("\"{path}\" not defined in config file")]
    MissingField { path: String },

    /// Keys present in the file that no struct field maps to, reported
    /// when the loader runs with [`UnknownKeys::Deny`](crate::UnknownKeys).
    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    #[error("config serialization error")]
    Dump(#[from] toml::ser::Error),
}
