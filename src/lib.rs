//! Favicon cache-key derivation for feed readers.
//!
//! Maps a feed's source link to the path of its cached favicon,
//! `/api/favicons/{key}.png`, where `key` is a deterministic 8-hex-char hash
//! of the feed's canonical hostname. RSSHub routes are resolved to the site
//! they proxy. Links that cannot be parsed map to
//! `/api/favicons/default.png`.
//!
//! ```
//! use favicon_key::derive_favicon_path;
//!
//! let path = derive_favicon_path("https://rsshub.app/github/trending/daily");
//! assert_eq!(path.to_string(), "/api/favicons/99faa2f6.png");
//! assert_eq!(derive_favicon_path("not a url").to_string(), "/api/favicons/default.png");
//! ```

pub mod config;
pub mod favicon;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use favicon::{derive, derive_favicon_path, CacheKey, FaviconPath};
pub use http::FaviconServer;
pub use lifecycle::Shutdown;
