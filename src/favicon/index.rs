//! Reverse lookup from cache keys to feeds.
//!
//! A favicon request only carries the key, so finding the site to fetch
//! means deriving every known feed link and matching keys. `KeyIndex` does
//! that derivation once and keeps the result grouped by key.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::favicon::hasher::cache_key;
use crate::favicon::path::{derive, FaviconPath};
use crate::favicon::types::{CacheKey, KeyError};

/// A feed link together with the hostname it canonicalized to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedLink {
    pub link: String,
    pub hostname: String,
}

/// Distinct hostnames that share one cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub key: CacheKey,
    pub hostnames: Vec<String>,
}

/// Summary of how a set of hostnames spreads over the key space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionReport {
    /// Number of distinct canonical hostnames.
    pub hostnames: usize,
    /// Number of distinct keys those hostnames produced.
    pub keys: usize,
    /// Keys shared by more than one hostname.
    pub collisions: Vec<Collision>,
}

impl CollisionReport {
    /// Hash every distinct hostname and group the ones that collide.
    pub fn measure<I, S>(hostnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_key: BTreeMap<CacheKey, BTreeSet<String>> = BTreeMap::new();
        for hostname in hostnames {
            let hostname = hostname.as_ref();
            by_key
                .entry(cache_key(hostname))
                .or_default()
                .insert(hostname.to_string());
        }
        Self::from_groups(by_key)
    }

    fn from_groups(by_key: BTreeMap<CacheKey, BTreeSet<String>>) -> Self {
        let hostnames = by_key.values().map(BTreeSet::len).sum();
        let keys = by_key.len();
        let collisions = by_key
            .into_iter()
            .filter(|(_, hosts)| hosts.len() > 1)
            .map(|(key, hosts)| Collision {
                key,
                hostnames: hosts.into_iter().collect(),
            })
            .collect();
        Self { hostnames, keys, collisions }
    }

    /// Share of hostnames that lost a distinct key, in `[0, 1)`.
    pub fn collision_rate(&self) -> f64 {
        if self.hostnames == 0 {
            return 0.0;
        }
        1.0 - self.keys as f64 / self.hostnames as f64
    }

    pub fn is_collision_free(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Feed links grouped by the favicon key they derive to.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    by_key: BTreeMap<CacheKey, Vec<IndexedLink>>,
    fallbacks: Vec<String>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `links`.
    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for link in links {
            index.insert(link.as_ref());
        }
        index
    }

    /// Derive `link` and record it. Returns the derived path.
    pub fn insert(&mut self, link: &str) -> FaviconPath {
        let derivation = derive(link);
        match (derivation.key, derivation.hostname) {
            (Some(key), Some(hostname)) => {
                self.by_key.entry(key).or_default().push(IndexedLink {
                    link: derivation.link,
                    hostname,
                });
            }
            _ => self.fallbacks.push(derivation.link),
        }
        derivation.path
    }

    /// Feed links whose favicon key is `key`.
    pub fn lookup(&self, key: &CacheKey) -> &[IndexedLink] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Feed links behind a requested favicon filename such as `99faa2f6.png`.
    pub fn lookup_filename(&self, filename: &str) -> Result<&[IndexedLink], KeyError> {
        match FaviconPath::from_filename(filename)? {
            FaviconPath::Keyed(key) => Ok(self.lookup(&key)),
            FaviconPath::Default => Ok(&[]),
        }
    }

    /// Links that could not be parsed and map to the default icon.
    pub fn fallback_links(&self) -> &[String] {
        &self.fallbacks
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty() && self.fallbacks.is_empty()
    }

    /// Number of links indexed under a key.
    pub fn link_count(&self) -> usize {
        self.by_key.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.by_key.keys()
    }

    /// Collision summary over the canonical hostnames seen so far.
    pub fn report(&self) -> CollisionReport {
        let groups: BTreeMap<CacheKey, BTreeSet<String>> = self
            .by_key
            .iter()
            .map(|(key, links)| {
                let hosts: BTreeSet<String> = links.iter().map(|l| l.hostname.clone()).collect();
                (key.clone(), hosts)
            })
            .collect();
        CollisionReport::from_groups(groups)
    }

    /// Keys shared by more than one distinct hostname.
    pub fn collisions(&self) -> Vec<Collision> {
        self.report().collisions
    }
}
