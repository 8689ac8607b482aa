//! Deterministic two-lane hash for favicon cache keys.
//!
//! Not cryptographic. Output is bit-compatible with the keys the web client
//! requests, so the constants and the final masking must not change.

use crate::favicon::types::CacheKey;

const SEED_1: u32 = 0xDEAD_BEEF;
const SEED_2: u32 = 0x41C6_CE57;
const LANE_MUL_1: u32 = 2_654_435_761;
const LANE_MUL_2: u32 = 1_597_334_677;
const MIX_MUL_1: u32 = 2_246_822_507;
const MIX_MUL_2: u32 = 3_266_489_909;

/// Hash `input` into a 32-bit value.
///
/// Characters are consumed as UTF-16 code units. Only the first lane reaches
/// the result: the second lane is folded into bits 32..53 of the combined
/// value, which the final 32-bit mask removes again.
pub fn hash32(input: &str) -> u32 {
    let (mut h1, mut h2) = (SEED_1, SEED_2);
    for unit in input.encode_utf16() {
        let c = u32::from(unit);
        h1 = (h1 ^ c).wrapping_mul(LANE_MUL_1);
        h2 = (h2 ^ c).wrapping_mul(LANE_MUL_2);
    }

    let mixed_1 = (h1 ^ (h1 >> 16)).wrapping_mul(MIX_MUL_1) ^ (h2 ^ (h2 >> 13)).wrapping_mul(MIX_MUL_2);
    let mixed_2 = (h2 ^ (h2 >> 16)).wrapping_mul(MIX_MUL_1) ^ (h1 ^ (h1 >> 13)).wrapping_mul(MIX_MUL_2);

    let combined = (u64::from(mixed_2 & 0x1F_FFFF) << 32) + u64::from(mixed_1);
    (combined & 0xFFFF_FFFF) as u32
}

/// Cache key for a canonical hostname.
pub fn cache_key(hostname: &str) -> CacheKey {
    CacheKey::from_u32(hash32(hostname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(cache_key("").as_str(), "1aee8d83");
        assert_eq!(cache_key("a").as_str(), "82c97901");
        assert_eq!(cache_key("github.com").as_str(), "99faa2f6");
        assert_eq!(cache_key("google.com").as_str(), "7c8dcfe9");
        assert_eq!(cache_key("youtube.com").as_str(), "1c90a74a");
        assert_eq!(cache_key("imdb.com").as_str(), "e367f0ae");
        assert_eq!(cache_key("twitch.tv").as_str(), "e66cc8b2");
        assert_eq!(cache_key("arxiv.org").as_str(), "0525fee2");
        assert_eq!(cache_key("rsshub.app").as_str(), "dcf309d9");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash32("example.com"), hash32("example.com"));
        assert_ne!(hash32("example.com"), hash32("example.org"));
    }

    #[test]
    fn test_key_shape() {
        for input in ["", "x", "news.ycombinator.com", "bücher.example", "日本語.jp"] {
            let key = cache_key(input);
            assert_eq!(key.as_str().len(), 8, "{input}");
            assert!(key.as_str().bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_non_ascii_hashes_utf16_units() {
        assert_eq!(cache_key("bücher.example").as_str(), "9cf02d8a");
        // Surrogate pair, two units
        assert_eq!(cache_key("\u{1F600}").as_str(), "6ef9b4ae");
        assert_eq!(cache_key("\u{F600}").as_str(), "fe30262b");
    }
}
