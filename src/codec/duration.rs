//! Composable duration values for config files.
//!
//! # Example
//!
//! ```toml
//! [limits]
//! idle_timeout = "1h30m"      # hours + minutes
//! poll_interval = "250ms"     # milliseconds
//! ```
//!
//! The grammar is the humantime one: a sequence of `<number><unit>`
//! groups, units from nanoseconds up to hours (and beyond), composable
//! in descending order.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ParseError, TextCodec, text};

/// A time span read from (and written to) config text.
///
/// Thin wrapper over [`std::time::Duration`] whose only job is the text
/// codec; everything else derefs to the wrapped value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(std::time::Duration);

impl Duration {
    #[inline]
    pub const fn new(inner: std::time::Duration) -> Self {
        Self(inner)
    }

    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Self(std::time::Duration::from_secs(secs))
    }

    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(std::time::Duration::from_millis(millis))
    }

    /// The wrapped standard-library duration.
    #[inline]
    pub const fn as_std(&self) -> std::time::Duration {
        self.0
    }
}

impl TextCodec for Duration {
    fn parse_text(text: &str) -> Result<Self, ParseError> {
        humantime::parse_duration(text)
            .map(Self)
            .map_err(|source| ParseError::Duration {
                text: text.to_string(),
                source,
            })
    }

    fn format_text(&self) -> String {
        humantime::format_duration(self.0).to_string()
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_text())
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<std::time::Duration> for Duration {
    fn from(inner: std::time::Duration) -> Self {
        Self(inner)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        text::deserialize(deserializer)
    }
}

impl Serialize for Duration {
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
    fn test_parse_composed() {
        let d = Duration::parse_text("1h30m").unwrap();
        assert_eq!(d.as_std(), std::time::Duration::from_secs(90 * 60));
    }

    #[test]
    fn test_parse_subsecond_units() {
        assert_eq!(
            Duration::parse_text("250ms").unwrap().as_std(),
            std::time::Duration::from_millis(250)
        );
        assert_eq!(
            Duration::parse_text("10us").unwrap().as_std(),
            std::time::Duration::from_micros(10)
        );
        assert_eq!(
            Duration::parse_text("7ns").unwrap().as_std(),
            std::time::Duration::from_nanos(7)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Duration::parse_text("fast").is_err());
        assert!(Duration::parse_text("5 parsecs").is_err());
        assert!(Duration::parse_text("").is_err());
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for text in ["1h30m", "90m", "5s", "1500ms", "2h 15m 10s"] {
            let once = Duration::parse_text(text).unwrap();
            let again = Duration::parse_text(&once.format_text()).unwrap();
            assert_eq!(once, again, "round-trip changed value of {text:?}");
        }
    }

    #[test]
    fn test_serde_through_toml() {
        #[derive(Debug, Deserialize, Serialize)]
        struct Wrapper {
            timeout: Duration,
        }

        let w: Wrapper = toml::from_str(r#"timeout = "5s""#).unwrap();
        assert_eq!(w.timeout, Duration::from_secs(5));

        let rendered = toml::to_string(&w).unwrap();
        assert!(rendered.contains("\"5s\""));
    }

    #[test]
    fn test_serde_bad_value_mentions_text() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            timeout: Duration,
        }

        let err = toml::from_str::<Wrapper>(r#"timeout = "sideways""#).unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }
}
