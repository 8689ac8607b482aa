//! Hostname canonicalization.
//!
//! # Responsibilities
//! - Parse a feed link as an absolute URL
//! - Strip a leading `www.` from the hostname
//! - Replace RSSHub hostnames with the site the route proxies
//!
//! # Design Decisions
//! - Parse failures are returned, never recovered here
//! - An RSSHub link with no matching alias keeps its own hostname

use url::Url;

use crate::favicon::alias::{AliasTable, RSSHUB_ALIASES};
use crate::favicon::types::ParseFailure;

const WWW_PREFIX: &str = "www.";
const RSSHUB_MARKER: &str = "rsshub";

/// Reduce a feed link to its canonical hostname using the built-in aliases.
pub fn canonical_hostname(link: &str) -> Result<String, ParseFailure> {
    canonical_hostname_with(link, &RSSHUB_ALIASES)
}

/// Reduce a feed link to its canonical hostname using `aliases`.
pub fn canonical_hostname_with(link: &str, aliases: &AliasTable) -> Result<String, ParseFailure> {
    let url = Url::parse(link)?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(ParseFailure::MissingHost(link.to_string())),
    };
    let host = host.strip_prefix(WWW_PREFIX).unwrap_or(host);

    if !host.contains(RSSHUB_MARKER) {
        return Ok(host.to_string());
    }

    match aliases.resolve(url.path()) {
        Some(aliased) => Ok(aliased.to_string()),
        None => Ok(host.to_string()),
    }
}
