//! Shared fixtures for integration tests.

#![allow(dead_code)]

use favicon_key::config::ServiceConfig;
use favicon_key::FaviconServer;

/// Hostnames of real feeds, all distinct.
pub const HOSTNAME_CORPUS: &[&str] = &[
    "github.com", "google.com", "youtube.com", "imdb.com", "twitch.tv", "arxiv.org",
    "hub.docker.com", "news.ycombinator.com", "phoronix.com", "rsshub.app",
    "reddit.com", "lobste.rs", "blog.rust-lang.org", "this-week-in-rust.org",
    "lwn.net", "arstechnica.com", "theverge.com", "wired.com", "nytimes.com",
    "bbc.co.uk", "theguardian.com", "medium.com", "dev.to", "stackoverflow.com",
    "xkcd.com", "smbc-comics.com", "kottke.org", "daringfireball.net",
    "simonwillison.net", "jvns.ca", "danluu.com", "martinfowler.com", "paulgraham.com",
    "feeds.feedburner.com", "substack.com", "wordpress.com", "blogspot.com",
    "tumblr.com", "mastodon.social", "fosstodon.org", "npr.org", "reuters.com",
    "apnews.com", "washingtonpost.com", "economist.com", "ft.com", "bloomberg.com",
    "techcrunch.com", "engadget.com", "gizmodo.com", "slashdot.org", "hackaday.com",
    "anandtech.com", "tomshardware.com", "kernel.org", "lkml.org", "gnome.org",
    "kde.org", "archlinux.org", "debian.org", "ubuntu.com", "fedoramagazine.org",
    "opensource.com", "mozilla.org", "blog.cloudflare.com", "aws.amazon.com",
    "cloud.google.com", "azure.microsoft.com", "netflixtechblog.com",
    "engineering.fb.com", "github.blog", "go.dev", "python.org", "nodejs.org",
    "deno.com", "bun.sh", "vercel.com", "kubernetes.io", "docker.com", "hashicorp.com",
    "grafana.com", "prometheus.io", "postgresql.org", "sqlite.org", "redis.io",
    "nginx.com", "apache.org", "eclipse.org", "jetbrains.com", "code.visualstudio.com",
    "neovim.io", "vim.org", "gnu.org", "fsf.org", "eff.org", "schneier.com",
    "krebsonsecurity.com", "troyhunt.com", "nasa.gov", "space.com", "nature.com",
    "science.org", "quantamagazine.org", "scientificamerican.com", "newscientist.com",
    "spotify.com", "soundcloud.com", "bandcamp.com", "pitchfork.com", "letterboxd.com",
    "goodreads.com", "wikipedia.org", "archive.org", "openai.com", "anthropic.com",
    "huggingface.co", "kaggle.com", "papers.nips.cc", "distill.pub", "colah.github.io",
    "karpathy.github.io", "ycombinator.com", "producthunt.com", "indiehackers.com",
    "stratechery.com", "theatlantic.com", "newyorker.com", "vox.com", "axios.com",
    "politico.com", "aljazeera.com", "dw.com", "lemonde.fr", "spiegel.de", "heise.de",
    "golem.de", "elpais.com", "corriere.it", "asahi.com", "nhk.or.jp", "scmp.com",
    "abc.net.au", "cbc.ca", "steamcommunity.com", "store.steampowered.com",
    "polygon.com", "kotaku.com", "ign.com", "eurogamer.net", "rockpapershotgun.com",
    "old.reddit.com",
];

/// Returns true if `path` is `/api/favicons/` + 8 lowercase hex + `.png`.
pub fn is_keyed_favicon_path(path: &str) -> bool {
    let Some(key) = path
        .strip_prefix("/api/favicons/")
        .and_then(|rest| rest.strip_suffix(".png"))
    else {
        return false;
    };
    key.len() == 8 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Router of a server built from `config`, for in-process requests.
pub fn test_router(config: ServiceConfig) -> axum::Router {
    FaviconServer::new(config).router()
}
