//! Key types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of a cache key in hex characters.
pub const KEY_LEN: usize = 8;

/// Errors raised while reducing a feed link to a hostname.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The link is not an absolute URL.
    #[error("invalid feed link: {0}")]
    Malformed(#[from] url::ParseError),

    /// The link parsed but carries no hostname (e.g. `mailto:`).
    #[error("feed link has no hostname: {0}")]
    MissingHost(String),
}

/// Errors raised when reading a key or favicon filename back in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Key is not exactly 8 characters long.
    #[error("cache key must be 8 characters, got {0}")]
    Length(usize),

    /// Key contains something other than lowercase hex digits.
    #[error("cache key must be lowercase hex: {0:?}")]
    NotHex(String),

    /// Filename or path does not name a favicon image.
    #[error("not a favicon path: {0:?}")]
    NotFavicon(String),
}

/// An 8-character lowercase hexadecimal favicon cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CacheKey(String);

impl CacheKey {
    /// Build a key from the 32-bit hash value.
    pub fn from_u32(value: u32) -> Self {
        let mut hex = format!("{:08x}", value);
        hex.truncate(KEY_LEN);
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CacheKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != KEY_LEN {
            return Err(KeyError::Length(s.len()));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(KeyError::NotHex(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for CacheKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}
