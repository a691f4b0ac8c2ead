//! Typed TOML configuration loading with declarative required-field
//! validation.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── codec/         # Human-friendly scalar value types
//! │   ├── bytes      # ByteSize ("10mb", "512k")
//! │   └── duration   # Duration ("1h30m", "250ms")
//! ├── error          # ConfigError
//! ├── field          # FieldPath, field descriptors, ConfigFields
//! ├── loader         # Loader, dump
//! ├── presence       # ConfigPresence (which keys were in the file)
//! └── validate       # required-field walk
//! ```
//!
//! # Overview
//!
//! Deriving [`Config`] on a serde-deserializable struct generates a static
//! field-descriptor table. [`Loader`] decodes a TOML file into the struct,
//! records which key paths were textually present, and then walks the
//! descriptors: any field marked `#[config(required)]` whose key was
//! absent fails the load with its full dot path - including required
//! fields inside nested blocks that were omitted entirely.
//!
//! One-shot by design: decode + validate at startup, no reload or watch.
//!
//! # Example
//!
//! ```
//! use confit::{ByteSize, Config, Duration};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize, Config)]
//! #[serde(default)]
//! struct AppConfig {
//!     #[config(required)]
//!     listen: String,
//!     #[config(sub)]
//!     limits: Limits,
//! }
//!
//! #[derive(Debug, Default, Deserialize, Config)]
//! #[config(section = "limits")]
//! #[serde(default)]
//! struct Limits {
//!     max_body: ByteSize,
//!     idle_timeout: Duration,
//! }
//!
//! let config: AppConfig = confit::from_str(r#"
//! listen = "0.0.0.0:8080"
//!
//! [limits]
//! max_body = "10mb"
//! idle_timeout = "90m"
//! "#)?;
//!
//! assert_eq!(config.limits.max_body.as_i64(), 10 * 1024 * 1024);
//! assert_eq!(config.limits.idle_timeout, Duration::from_secs(90 * 60));
//! # Ok::<(), confit::ConfigError>(())
//! ```
//!
//! A missing required key reports its dot-joined path:
//!
//! ```text
//! "limits.max_body" not defined in config file
//! ```

// Generated code refers to the crate by name; make that resolve here too.
extern crate self as confit;

pub mod codec;
mod error;
mod field;
mod loader;
mod presence;
mod validate;

pub use codec::{ByteSize, Duration, ParseError, TextCodec};
pub use error::ConfigError;
pub use field::{ConfigFields, FieldKind, FieldPath, FieldSpec};
pub use loader::{Loader, UnknownKeys, dump};
pub use presence::ConfigPresence;
pub use validate::validate_required;

/// Derive macro generating the field-descriptor table and FIELDS paths.
pub use macros::Config;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a config file with the default [`Loader`].
pub fn load<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + ConfigFields,
{
    Loader::new().load(path)
}

/// Decode and validate a config struct from TOML text with the default
/// [`Loader`].
pub fn from_str<T>(content: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + ConfigFields,
{
    Loader::new().from_str(content)
}
