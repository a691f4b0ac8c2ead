//! Proc macros for confit.
//!
//! # Config derive macro
//!
//! Generates the static field-descriptor table consumed by the
//! required-field validator, plus typed field path accessors.
//!
//! ```ignore
//! #[derive(Config, Deserialize)]
//! #[config(section = "server")]
//! pub struct ServerConfig {
//!     /// Port to bind.
//!     #[config(required)]
//!     pub port: u16,
//!
//!     /// Optional TLS block.
//!     #[config(sub)]
//!     #[serde(default)]
//!     pub tls: Option<TlsConfig>,
//!
//!     /// Internal field, never read from config.
//!     #[config(skip)]
//!     #[serde(skip)]
//!     pub resolved_root: PathBuf,
//! }
//!
//! // Generates:
//! // - impl confit::ConfigFields for ServerConfig (descriptor table)
//! // - ServerConfig::FIELDS.port -> FieldPath("server.port")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - dot path prefix for FIELDS accessors
//!
//! Field-level:
//! - `#[config(name = "x")]` - custom config key (defaults to field name)
//! - `#[config(required)]` - key must be present in the config file
//! - `#[config(skip)]` - field has no config key and is never validated
//! - `#[config(sub)]` - nested table; the field type must also derive Config
//!
//! `required` together with `skip` is rejected at compile time: a required
//! marker on a key-less field can never be checked.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates the `ConfigFields` impl and FIELDS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
