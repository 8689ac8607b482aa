//! Favicon cache-key derivation.
//!
//! # Data Flow
//! ```text
//! feed link (arbitrary string)
//!     → hostname.rs (parse, strip "www.", resolve RSSHub aliases)
//!     → hasher.rs (two-lane multiplicative hash → 8 hex chars)
//!     → path.rs (compose /api/favicons/{key}.png)
//!
//! Any parse failure:
//!     → path.rs logs a warning
//!     → /api/favicons/default.png
//! ```
//!
//! # Design Decisions
//! - Every step is pure; the alias table is a compiled-in static
//! - Alias table is ordered, first matching prefix wins
//! - `derive_favicon_path` is total: it never returns an error
//! - Keys are not cryptographic and may collide

pub mod alias;
pub mod hasher;
pub mod hostname;
pub mod index;
pub mod path;
pub mod types;

pub use alias::{AliasTable, RSSHUB_ALIASES};
pub use hasher::cache_key;
pub use hostname::canonical_hostname;
pub use index::{CollisionReport, KeyIndex};
pub use path::{derive, derive_favicon_path, Derivation, FaviconPath};
pub use types::{CacheKey, KeyError, ParseFailure};
