//! Key-space measurements.
//!
//! The final 32-bit mask drops the second hash lane, so keys carry 32 bits
//! at most. These tests pin down how that looks on realistic inputs.

use favicon_key::favicon::{cache_key, hasher::hash32, CollisionReport, KeyIndex};

mod common;

#[test]
fn test_real_hostnames_do_not_collide() {
    let report = CollisionReport::measure(common::HOSTNAME_CORPUS);
    assert_eq!(report.hostnames, common::HOSTNAME_CORPUS.len());
    assert!(report.is_collision_free(), "{:?}", report.collisions);
    assert_eq!(report.collision_rate(), 0.0);
}

#[test]
fn test_synthetic_corpus_collision_rate() {
    let hosts: Vec<String> = (0..50_000).map(|i| format!("feed-{i}.example.com")).collect();
    let report = CollisionReport::measure(&hosts);

    assert_eq!(report.hostnames, 50_000);
    assert_eq!(report.keys, 49_999);
    assert_eq!(report.collisions.len(), 1);

    let collision = &report.collisions[0];
    assert_eq!(collision.key.as_str(), "f8ac761a");
    assert_eq!(
        collision.hostnames,
        vec!["feed-12059.example.com".to_string(), "feed-14844.example.com".to_string()]
    );

    // Birthday bound for 32 bits: ~n²/2³³ ≈ 0.29 expected collisions
    assert!(report.collision_rate() < 1e-4);
}

#[test]
fn test_colliding_sites_share_a_favicon() {
    let index = KeyIndex::from_links([
        "https://feed-12059.example.com/rss",
        "https://feed-14844.example.com/rss",
    ]);

    assert_eq!(index.len(), 1);
    let collisions = index.collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].hostnames.len(), 2);
}

#[test]
fn test_key_is_the_masked_low_word() {
    for host in common::HOSTNAME_CORPUS {
        assert_eq!(cache_key(host).as_str(), format!("{:08x}", hash32(host)));
    }
}
