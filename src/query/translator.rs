//! # Natural-Language Query Translator
//!
//! Maps free-text queries onto a [`StringFilters`] set through a fixed,
//! ordered table of keyword and regex rules. Each rule contributes at most
//! one filter; later contributions to the same field overwrite earlier
//! ones. Conflict validation runs as a separate final pass.
//!
//! Rule order:
//! 1. `palindrome` / `palindromic` substring
//! 2. word-count phrases (`single word`, `two words`/`2 words`,
//!    `three words`/`3 words`; first match wins)
//! 3. `longer than N characters` -> `min_length = N + 1`
//! 4. `shorter than N characters` -> `max_length = N - 1`
//! 5. `contains the letter X` / `containing the character X`
//! 6. `first vowel` -> `contains_character = 'a'`
//!
//! Rule 6 is a literal alias, not a vowel search: the phrase always maps
//! to `'a'` and overwrites whatever rule 5 matched.

use regex::Regex;

use super::errors::{TranslateError, TranslateResult};
use super::filters::StringFilters;

/// Heuristic keyword/regex mapper from free text to a filter set
pub struct QueryTranslator {
    longer_than: Regex,
    shorter_than: Regex,
    contains_char: Regex,
}

impl QueryTranslator {
    /// Compile the rule patterns.
    pub fn new() -> Self {
        Self {
            longer_than: Regex::new(r"longer than (\d+) characters?").expect("pattern compiles"),
            shorter_than: Regex::new(r"shorter than (\d+) characters?").expect("pattern compiles"),
            contains_char: Regex::new(r"contain(?:s|ing)? (?:the letter |the character )?([a-z])")
                .expect("pattern compiles"),
        }
    }

    /// Translate a free-text query into a filter set.
    ///
    /// Text no rule understands contributes nothing; a query that matches
    /// no rule yields an empty filter set, not an error.
    pub fn translate(&self, query: &str) -> TranslateResult<StringFilters> {
        let query = query.to_lowercase();
        let mut filters = StringFilters::default();

        self.apply_palindrome(&query, &mut filters);
        self.apply_word_count(&query, &mut filters);
        self.apply_min_length(&query, &mut filters);
        self.apply_max_length(&query, &mut filters);
        self.apply_contains_character(&query, &mut filters);
        self.apply_first_vowel(&query, &mut filters);

        validate(&filters)?;
        Ok(filters)
    }

    fn apply_palindrome(&self, query: &str, filters: &mut StringFilters) {
        if query.contains("palindromic") || query.contains("palindrome") {
            filters.is_palindrome = Some(true);
        }
    }

    fn apply_word_count(&self, query: &str, filters: &mut StringFilters) {
        if query.contains("single word") {
            filters.word_count = Some(1);
        } else if query.contains("two words") || query.contains("2 words") {
            filters.word_count = Some(2);
        } else if query.contains("three words") || query.contains("3 words") {
            filters.word_count = Some(3);
        }
    }

    fn apply_min_length(&self, query: &str, filters: &mut StringFilters) {
        if let Some(caps) = self.longer_than.captures(query) {
            if let Ok(n) = caps[1].parse::<i64>() {
                filters.min_length = Some(n + 1);
            }
        }
    }

    fn apply_max_length(&self, query: &str, filters: &mut StringFilters) {
        if let Some(caps) = self.shorter_than.captures(query) {
            if let Ok(n) = caps[1].parse::<i64>() {
                filters.max_length = Some(n - 1);
            }
        }
    }

    fn apply_contains_character(&self, query: &str, filters: &mut StringFilters) {
        if let Some(caps) = self.contains_char.captures(query) {
            filters.contains_character = caps[1].chars().next();
        }
    }

    fn apply_first_vowel(&self, query: &str, filters: &mut StringFilters) {
        if query.contains("first vowel") {
            filters.contains_character = Some('a');
        }
    }
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject filter sets whose derived bounds can never hold.
fn validate(filters: &StringFilters) -> TranslateResult<()> {
    if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
        if min > max {
            return Err(TranslateError::ConflictingBounds { min, max });
        }
    }

    if let Some(count) = filters.word_count {
        if count < 0 {
            return Err(TranslateError::NegativeWordCount(count));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(query: &str) -> TranslateResult<StringFilters> {
        QueryTranslator::new().translate(query)
    }

    #[test]
    fn test_unmatched_text_yields_empty_set() {
        let filters = translate("show me everything please").unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_palindrome_keywords() {
        assert_eq!(
            translate("all palindromic strings").unwrap().is_palindrome,
            Some(true)
        );
        assert_eq!(
            translate("every palindrome").unwrap().is_palindrome,
            Some(true)
        );
        assert_eq!(translate("plain strings").unwrap().is_palindrome, None);
    }

    #[test]
    fn test_word_count_phrases() {
        assert_eq!(translate("single word strings").unwrap().word_count, Some(1));
        assert_eq!(translate("strings with two words").unwrap().word_count, Some(2));
        assert_eq!(translate("strings with 2 words").unwrap().word_count, Some(2));
        assert_eq!(translate("three words only").unwrap().word_count, Some(3));
        assert_eq!(translate("3 words only").unwrap().word_count, Some(3));
    }

    #[test]
    fn test_word_count_first_match_wins() {
        // "single word" is checked before "two words"
        let filters = translate("single word or two words").unwrap();
        assert_eq!(filters.word_count, Some(1));
    }

    #[test]
    fn test_longer_than_is_exclusive() {
        let filters = translate("strings longer than 10 characters").unwrap();
        assert_eq!(filters.min_length, Some(11));

        // Singular "character" also matches
        let filters = translate("longer than 1 character").unwrap();
        assert_eq!(filters.min_length, Some(2));
    }

    #[test]
    fn test_shorter_than_is_exclusive() {
        let filters = translate("strings shorter than 10 characters").unwrap();
        assert_eq!(filters.max_length, Some(9));
    }

    #[test]
    fn test_shorter_than_zero_goes_negative() {
        let filters = translate("shorter than 0 characters").unwrap();
        assert_eq!(filters.max_length, Some(-1));
    }

    #[test]
    fn test_contains_character_variants() {
        assert_eq!(
            translate("strings containing the letter z").unwrap().contains_character,
            Some('z')
        );
        assert_eq!(
            translate("strings that contain the character x").unwrap().contains_character,
            Some('x')
        );
        assert_eq!(
            translate("contains q").unwrap().contains_character,
            Some('q')
        );
    }

    #[test]
    fn test_contains_character_case_folded() {
        let filters = translate("Containing The Letter Z").unwrap();
        assert_eq!(filters.contains_character, Some('z'));
    }

    #[test]
    fn test_first_vowel_is_a_literal_alias() {
        let filters = translate("strings with the first vowel").unwrap();
        assert_eq!(filters.contains_character, Some('a'));
    }

    #[test]
    fn test_first_vowel_overwrites_contains_rule() {
        let filters = translate("containing the letter b and the first vowel").unwrap();
        assert_eq!(filters.contains_character, Some('a'));
    }

    #[test]
    fn test_combined_query() {
        let filters =
            translate("strings longer than 3 characters containing the letter a").unwrap();
        assert_eq!(filters.min_length, Some(4));
        assert_eq!(filters.contains_character, Some('a'));
        assert_eq!(filters.max_length, None);
        assert_eq!(filters.word_count, None);
    }

    #[test]
    fn test_all_rules_together() {
        let filters = translate(
            "palindromic single word strings longer than 2 characters \
             shorter than 10 characters containing the letter a",
        )
        .unwrap();
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.min_length, Some(3));
        assert_eq!(filters.max_length, Some(9));
        assert_eq!(filters.contains_character, Some('a'));
    }

    #[test]
    fn test_conflicting_bounds_rejected() {
        let err = translate("longer than 9 characters shorter than 6 characters").unwrap_err();
        assert_eq!(err, TranslateError::ConflictingBounds { min: 10, max: 5 });
    }

    #[test]
    fn test_touching_bounds_accepted() {
        // min == max is a single admissible length, not a conflict
        let filters = translate("longer than 4 characters shorter than 6 characters").unwrap();
        assert_eq!(filters.min_length, Some(5));
        assert_eq!(filters.max_length, Some(5));
    }
}
