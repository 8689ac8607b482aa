//! Favicon request paths.
//!
//! # Responsibilities
//! - Compose `/api/favicons/{key}.png` from a feed link
//! - Convert every canonicalization failure into the default icon path
//! - Read favicon filenames and paths back into keys
//!
//! # Design Decisions
//! - This is the only place a `ParseFailure` is observed
//! - Failures are logged at warn level and never returned

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::favicon::hasher::cache_key;
use crate::favicon::hostname::canonical_hostname;
use crate::favicon::types::{CacheKey, KeyError};

/// Route prefix favicon images are served under.
pub const FAVICON_ROUTE: &str = "/api/favicons/";

/// Path requested when no key can be derived.
pub const DEFAULT_FAVICON_PATH: &str = "/api/favicons/default.png";

const DEFAULT_FILENAME: &str = "default.png";
const IMAGE_SUFFIX: &str = ".png";

/// Request path for a feed's favicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaviconPath {
    /// `/api/favicons/{key}.png`
    Keyed(CacheKey),
    /// `/api/favicons/default.png`
    Default,
}

impl FaviconPath {
    pub fn key(&self) -> Option<&CacheKey> {
        match self {
            FaviconPath::Keyed(key) => Some(key),
            FaviconPath::Default => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, FaviconPath::Default)
    }

    /// Filename component, e.g. `99faa2f6.png`.
    pub fn filename(&self) -> String {
        match self {
            FaviconPath::Keyed(key) => format!("{key}{IMAGE_SUFFIX}"),
            FaviconPath::Default => DEFAULT_FILENAME.to_string(),
        }
    }

    /// Parse the filename a favicon request names.
    pub fn from_filename(filename: &str) -> Result<Self, KeyError> {
        if filename == DEFAULT_FILENAME {
            return Ok(FaviconPath::Default);
        }
        let stem = filename
            .strip_suffix(IMAGE_SUFFIX)
            .ok_or_else(|| KeyError::NotFavicon(filename.to_string()))?;
        Ok(FaviconPath::Keyed(stem.parse()?))
    }
}

impl fmt::Display for FaviconPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaviconPath::Keyed(key) => write!(f, "{FAVICON_ROUTE}{key}{IMAGE_SUFFIX}"),
            FaviconPath::Default => f.write_str(DEFAULT_FAVICON_PATH),
        }
    }
}

impl FromStr for FaviconPath {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filename = s
            .strip_prefix(FAVICON_ROUTE)
            .ok_or_else(|| KeyError::NotFavicon(s.to_string()))?;
        Self::from_filename(filename)
    }
}

impl Serialize for FaviconPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Full outcome of deriving a feed's favicon path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation {
    /// The feed link as given.
    pub link: String,
    /// Canonical hostname, absent when the link could not be parsed.
    pub hostname: Option<String>,
    /// Cache key, absent when the link could not be parsed.
    pub key: Option<CacheKey>,
    /// Path to request.
    pub path: FaviconPath,
}

/// Derive the favicon path for `link`, keeping the intermediate values.
pub fn derive(link: &str) -> Derivation {
    match canonical_hostname(link) {
        Ok(hostname) => {
            let key = cache_key(&hostname);
            Derivation {
                link: link.to_string(),
                path: FaviconPath::Keyed(key.clone()),
                key: Some(key),
                hostname: Some(hostname),
            }
        }
        Err(e) => {
            tracing::warn!(link = %link, error = %e, "Failed to derive favicon path, using default");
            Derivation {
                link: link.to_string(),
                hostname: None,
                key: None,
                path: FaviconPath::Default,
            }
        }
    }
}

/// Favicon request path for a feed link. Never fails.
pub fn derive_favicon_path(link: &str) -> FaviconPath {
    derive(link).path
}
