//! Suffixed byte-size values for config files.
//!
//! # Example
//!
//! ```toml
//! [limits]
//! max_body = "10mb"       # 10 MiB
//! cache = "512k"          # 512 KiB
//! threshold = "1048576"   # plain bytes
//! ```
//!
//! Suffixes are lowercase `k`/`kb`, `m`/`mb`, `g`/`gb` and always mean
//! binary multiples (KiB = 1024, MiB = 1024^2, GiB = 1024^3). Formatting
//! picks the largest unit that fits and keeps at most one decimal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ParseError, TextCodec, text};

const KIB: i64 = 1024;
const MIB: i64 = 1024 * KIB;
const GIB: i64 = 1024 * MIB;

/// Suffix table in match order. Two-letter suffixes come first so a
/// trailing `b` is never left behind in the numeric prefix.
const SUFFIXES: &[(&str, i64)] = &[
    ("kb", KIB),
    ("mb", MIB),
    ("gb", GIB),
    ("k", KIB),
    ("m", MIB),
    ("g", GIB),
];

/// A byte count read from (and written to) config text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(i64);

impl ByteSize {
    #[inline]
    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TextCodec for ByteSize {
    fn parse_text(text: &str) -> Result<Self, ParseError> {
        let (digits, unit) = match SUFFIXES.iter().find(|(suffix, _)| text.ends_with(suffix)) {
            Some((suffix, unit)) => (&text[..text.len() - suffix.len()], *unit),
            None => (text, 1),
        };
        let count: i64 = digits.parse().map_err(|source| ParseError::ByteSize {
            text: text.to_string(),
            source: Some(source),
        })?;
        count
            .checked_mul(unit)
            .map(Self)
            .ok_or_else(|| ParseError::ByteSize {
                text: text.to_string(),
                source: None,
            })
    }

    fn format_text(&self) -> String {
        if self.0 == 0 {
            return "0".to_string();
        }
        let (value, unit) = match self.0 {
            b if b >= GIB => (b as f64 / GIB as f64, "GiB"),
            b if b >= MIB => (b as f64 / MIB as f64, "MiB"),
            b if b >= KIB => (b as f64 / KIB as f64, "KiB"),
            b if b >= 1 => (b as f64, "B"),
            // Negative counts render as a bare number.
            b => (b as f64, ""),
        };
        let mut rendered = format!("{value:.1}");
        if rendered.ends_with(".0") {
            rendered.truncate(rendered.len() - 2);
        }
        rendered.push_str(unit);
        rendered
    }
}

impl FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_text())
    }
}

impl From<i64> for ByteSize {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for i64 {
    fn from(value: ByteSize) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        text::deserialize(deserializer)
    }
}

impl Serialize for ByteSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        text::serialize(self, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(ByteSize::parse_text("512k").unwrap().as_i64(), 512 * KIB);
        assert_eq!(ByteSize::parse_text("512kb").unwrap().as_i64(), 512 * KIB);
        assert_eq!(ByteSize::parse_text("10m").unwrap().as_i64(), 10 * MIB);
        assert_eq!(ByteSize::parse_text("10mb").unwrap().as_i64(), 10 * MIB);
        assert_eq!(ByteSize::parse_text("2g").unwrap().as_i64(), 2 * GIB);
        assert_eq!(ByteSize::parse_text("2gb").unwrap().as_i64(), 2 * GIB);
    }

    #[test]
    fn test_parse_plain_bytes() {
        assert_eq!(ByteSize::parse_text("1048576").unwrap().as_i64(), MIB);
        assert_eq!(ByteSize::parse_text("0").unwrap().as_i64(), 0);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(ByteSize::parse_text("-5k").unwrap().as_i64(), -5 * KIB);
    }

    #[test]
    fn test_parse_rejects_bad_numerals() {
        assert!(ByteSize::parse_text("lots").is_err());
        assert!(ByteSize::parse_text("10 mb").is_err());
        assert!(ByteSize::parse_text("MB").is_err());
        // Suffixes are lowercase only.
        assert!(ByteSize::parse_text("10MB").is_err());
        assert!(ByteSize::parse_text("").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        assert!(ByteSize::parse_text("9223372036854775807g").is_err());
    }

    #[test]
    fn test_format_picks_largest_unit() {
        assert_eq!(ByteSize::parse_text("10m").unwrap().format_text(), "10MiB");
        assert_eq!(ByteSize::parse_text("1024").unwrap().format_text(), "1KiB");
        assert_eq!(ByteSize::parse_text("1536").unwrap().format_text(), "1.5KiB");
        assert_eq!(ByteSize::new(3 * GIB / 2).format_text(), "1.5GiB");
        assert_eq!(ByteSize::new(512).format_text(), "512B");
    }

    #[test]
    fn test_format_zero_and_negative() {
        assert_eq!(ByteSize::new(0).format_text(), "0");
        assert_eq!(ByteSize::new(-5120).format_text(), "-5120");
    }

    #[test]
    fn test_serde_through_toml() {
        #[derive(Debug, Deserialize, Serialize)]
        struct Wrapper {
            max_body: ByteSize,
        }

        let w: Wrapper = toml::from_str(r#"max_body = "10mb""#).unwrap();
        assert_eq!(w.max_body.as_i64(), 10 * MIB);

        let rendered = toml::to_string(&w).unwrap();
        assert!(rendered.contains("\"10MiB\""));
    }
}
