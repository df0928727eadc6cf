//! Derived string properties
//!
//! All derivations start from the trimmed input:
//! - `length` counts code points of the trimmed string
//! - the palindrome and unique-character checks use the lowercased,
//!   whitespace-stripped form
//! - the content hash covers the trimmed string exactly (not lowercased),
//!   so "Hello" and "hello" hash differently
//! - the frequency map scans the lowercased string and skips literal
//!   spaces only; other whitespace characters are counted

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Derived properties of a stored string. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Character (code point) count of the trimmed string
    pub length: usize,

    /// Whether the string reads the same reversed, ignoring case and whitespace
    pub is_palindrome: bool,

    /// Distinct code points in the lowercased, whitespace-stripped form
    pub unique_characters: usize,

    /// Whitespace-delimited tokens; 0 for an empty string
    pub word_count: usize,

    /// SHA-256 hex digest of the trimmed string; doubles as the record id
    pub content_hash: String,

    /// Occurrences per lowercase character, literal spaces excluded
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// SHA-256 hex digest of the trimmed form of `value`.
///
/// This is record identity: lookups and duplicate checks re-hash the
/// trimmed input, so surrounding whitespace never affects identity while
/// case does.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Analyze a string and derive its full property set.
pub fn analyze(value: &str) -> Properties {
    let trimmed = value.trim();
    let length = trimmed.chars().count();
    let lowercased = trimmed.to_lowercase();

    let cleaned: Vec<char> = lowercased.chars().filter(|c| !c.is_whitespace()).collect();
    let is_palindrome = cleaned.iter().eq(cleaned.iter().rev());
    let unique_characters = cleaned.iter().collect::<BTreeSet<_>>().len();

    let word_count = trimmed.split_whitespace().count();

    let mut character_frequency_map = BTreeMap::new();
    for c in lowercased.chars() {
        if c != ' ' {
            *character_frequency_map.entry(c).or_insert(0) += 1;
        }
    }

    Properties {
        length,
        is_palindrome,
        unique_characters,
        word_count,
        content_hash: content_hash(trimmed),
        character_frequency_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let a = analyze("hello world");
        let b = analyze("hello world");
        assert_eq!(a.content_hash, b.content_hash);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_covers_trimmed_not_lowercased() {
        // Surrounding whitespace never affects identity
        assert_eq!(content_hash("  level  "), content_hash("level"));
        // Case does
        assert_ne!(content_hash("Hello"), content_hash("hello"));
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        let hash = content_hash("level");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_simple_palindrome() {
        let props = analyze("level");
        assert!(props.is_palindrome);
        assert_eq!(props.length, 5);
        assert_eq!(props.word_count, 1);
        assert_eq!(props.unique_characters, 3); // l, e, v
    }

    #[test]
    fn test_palindrome_ignores_case_and_whitespace() {
        assert!(analyze("A man a man").is_palindrome);
        assert!(analyze("aman aman").is_palindrome);
        assert!(analyze("Never Odd Or Even").is_palindrome);
        assert!(!analyze("hello world").is_palindrome);
    }

    #[test]
    fn test_length_counts_chars_of_trimmed() {
        let props = analyze("  hello  ");
        assert_eq!(props.length, 5);

        // Code points, not bytes
        assert_eq!(analyze("héllo").length, 5);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("hello world").word_count, 2);
        assert_eq!(analyze("one").word_count, 1);
        assert_eq!(analyze("a  b\tc").word_count, 3);
        assert_eq!(analyze("   ").word_count, 0);
        assert_eq!(analyze("").word_count, 0);
    }

    #[test]
    fn test_frequency_map_lowercases_and_skips_spaces() {
        let props = analyze("Hello World");
        assert_eq!(props.character_frequency_map.get(&'l'), Some(&3));
        assert_eq!(props.character_frequency_map.get(&'o'), Some(&2));
        assert_eq!(props.character_frequency_map.get(&'h'), Some(&1));
        // Uppercase keys never appear
        assert_eq!(props.character_frequency_map.get(&'H'), None);
        // Literal spaces are excluded
        assert_eq!(props.character_frequency_map.get(&' '), None);
    }

    #[test]
    fn test_frequency_map_counts_non_space_whitespace() {
        // Only literal spaces are skipped; an embedded tab is counted
        let props = analyze("a\tb");
        assert_eq!(props.character_frequency_map.get(&'\t'), Some(&1));
    }

    #[test]
    fn test_unique_characters_stripped_of_whitespace() {
        // cleaned form is "abab": two distinct characters
        assert_eq!(analyze("ab ab").unique_characters, 2);
        assert_eq!(analyze("AaBb").unique_characters, 2);
    }

    #[test]
    fn test_serialization_shape() {
        let props = analyze("ada");
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["length"], 3);
        assert_eq!(json["is_palindrome"], true);
        assert_eq!(json["word_count"], 1);
        assert_eq!(json["character_frequency_map"]["a"], 2);
        assert_eq!(json["character_frequency_map"]["d"], 1);
    }
}
