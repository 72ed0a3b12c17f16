//! Snowflake - the platform's 64-bit identifier
//!
//! Layout, high to low: 42 bits of milliseconds since [`Snowflake::EPOCH`],
//! 5 bits worker, 5 bits process, 12 bits increment. Audit entry ids are
//! snowflakes too, so an entry's id tells when the action happened.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// First millisecond of 2015 UTC
    pub const EPOCH: i64 = 1_420_070_400_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Unix milliseconds encoded in the id
    #[inline]
    pub const fn timestamp_ms(self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Creation time; the Unix epoch for ids whose timestamp is unrepresentable
    pub fn created_at(self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_ms())
            .single()
            .unwrap_or_default()
    }

    /// Parse a decimal id; negative values are rejected
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id >= 0 => Ok(Self(id)),
            _ => Err(SnowflakeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a snowflake")]
pub struct SnowflakeParseError(pub String);

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Written as a decimal string; 64-bit integers do not survive JSON consumers
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// The platform sends ids as strings; some producers send plain integers
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Integer(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Integer(id) if id >= 0 => Ok(Self(id)),
            Wire::Integer(id) => Err(serde::de::Error::custom(SnowflakeParseError(id.to_string()))),
            Wire::Text(text) => Self::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}
