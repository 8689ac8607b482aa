//! RSSHub path aliases.
//!
//! # Responsibilities
//! - Map RSSHub route prefixes to the upstream site they proxy
//! - Resolve a path against the table in declaration order
//!
//! # Design Decisions
//! - Path matching is a literal, case-sensitive prefix check
//! - First match wins, so the table is an ordered slice and not a map
//! - O(n) scan (the table is small and fixed)

/// A single `path prefix → hostname` alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub path_prefix: &'static str,
    pub hostname: &'static str,
}

impl Alias {
    pub const fn new(path_prefix: &'static str, hostname: &'static str) -> Self {
        Self { path_prefix, hostname }
    }

    /// Returns true if `path` starts with this alias' prefix.
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.path_prefix)
    }
}

/// Ordered, immutable list of aliases.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [Alias],
}

impl AliasTable {
    pub const fn new(entries: &'static [Alias]) -> Self {
        Self { entries }
    }

    /// Hostname of the first alias whose prefix matches `path`.
    pub fn resolve(&self, path: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|alias| alias.matches(path))
            .map(|alias| alias.hostname)
    }

    pub fn entries(&self) -> &'static [Alias] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// RSSHub routes, sorted by hostname then by path.
pub static RSSHUB_ALIASES: AliasTable = AliasTable::new(&[
    Alias::new("/papers/category/arxiv", "arxiv.org"),
    Alias::new("/trendingpapers/papers", "arxiv.org"),
    Alias::new("/github", "github.com"),
    Alias::new("/google", "google.com"),
    Alias::new("/dockerhub", "hub.docker.com"),
    Alias::new("/imdb", "imdb.com"),
    Alias::new("/hackernews", "news.ycombinator.com"),
    Alias::new("/phoronix", "phoronix.com"),
    Alias::new("/rsshub", "rsshub.app"),
    Alias::new("/twitch", "twitch.tv"),
    Alias::new("/youtube", "youtube.com"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(RSSHUB_ALIASES.resolve("/github/trending/daily"), Some("github.com"));
        assert_eq!(RSSHUB_ALIASES.resolve("/papers/category/arxiv/cs.AI"), Some("arxiv.org"));
        assert_eq!(RSSHUB_ALIASES.resolve("/hackernews/best"), Some("news.ycombinator.com"));
        assert_eq!(RSSHUB_ALIASES.resolve("/unknown/path"), None);
        assert_eq!(RSSHUB_ALIASES.resolve(""), None);
    }

    #[test]
    fn test_prefix_is_literal_and_case_sensitive() {
        // Prefixes are not segment-aware
        assert_eq!(RSSHUB_ALIASES.resolve("/googleplay/x"), Some("google.com"));
        assert_eq!(RSSHUB_ALIASES.resolve("/GitHub/trending"), None);
        assert_eq!(RSSHUB_ALIASES.resolve("github/trending"), None);
    }

    #[test]
    fn test_first_match_wins() {
        static OVERLAPPING: AliasTable = AliasTable::new(&[
            Alias::new("/git", "first.example"),
            Alias::new("/github", "second.example"),
        ]);
        assert_eq!(OVERLAPPING.resolve("/github/trending"), Some("first.example"));

        static REVERSED: AliasTable = AliasTable::new(&[
            Alias::new("/github", "second.example"),
            Alias::new("/git", "first.example"),
        ]);
        assert_eq!(REVERSED.resolve("/github/trending"), Some("second.example"));
        assert_eq!(REVERSED.resolve("/gitlab"), Some("first.example"));
    }

    #[test]
    fn test_table_order_is_stable() {
        let prefixes: Vec<_> = RSSHUB_ALIASES.entries().iter().map(|a| a.path_prefix).collect();
        assert_eq!(RSSHUB_ALIASES.len(), 11);
        assert_eq!(prefixes[0], "/papers/category/arxiv");
        assert_eq!(prefixes[10], "/youtube");
    }
}
