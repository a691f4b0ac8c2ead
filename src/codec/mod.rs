//! Human-friendly scalar value types and their text codec.
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `duration` | `Duration` - composable time spans (`1h30m`)   |
//! | `bytes`    | `ByteSize` - suffixed byte counts (`10mb`)     |
//!
//! Both types implement [`TextCodec`], the capability the TOML
//! decoder/encoder goes through: scalar fields of these types appear as
//! plain strings in the config file and are converted on the way in/out.

mod bytes;
mod duration;

pub use bytes::ByteSize;
pub use duration::Duration;

use thiserror::Error;

// ============================================================================
// TextCodec
// ============================================================================

/// Bidirectional text conversion for config scalar values.
///
/// Implementors parse their text form with [`parse_text`](Self::parse_text)
/// and render it back with [`format_text`](Self::format_text). The serde
/// bridge in [`text`] invokes the codec generically for any field of an
/// implementing type.
pub trait TextCodec: Sized {
    /// Parse the value from its text form.
    fn parse_text(text: &str) -> Result<Self, ParseError>;

    /// Render the value back to its canonical text form.
    fn format_text(&self) -> String;
}

/// A scalar value that could not be parsed from its text form.
///
/// Carries the offending raw text so decode errors point at the exact
/// input, not just the field.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid duration `{text}`")]
    Duration {
        text: String,
        #[source]
        source: humantime::DurationError,
    },

    /// Bad numeral, or a value that overflows once the unit multiplier
    /// is applied (`source` is `None` for overflow).
    #[error("invalid byte size `{text}`")]
    ByteSize {
        text: String,
        #[source]
        source: Option<std::num::ParseIntError>,
    },
}

// ============================================================================
// serde bridge
// ============================================================================

/// Serde adapter routing any [`TextCodec`] type through its text form.
///
/// Usable directly with `#[serde(with = "confit::codec::text")]`; the
/// bundled value types also call into it from their own
/// `Deserialize`/`Serialize` impls, so annotating fields of those types
/// is not necessary.
pub mod text {
    use super::TextCodec;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: TextCodec,
        S: Serializer,
    {
        serializer.serialize_str(&value.format_text())
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: TextCodec,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        T::parse_text(&s).map_err(serde::de::Error::custom)
    }
}
