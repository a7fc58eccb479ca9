//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact matching on phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::models::{AddressBook, Record};

/// Default number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum confidence a match needs to be reported.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 30;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// A stored phone equals the query
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records in `book` matching `query`.
    ///
    /// Queries that look like a phone number are matched against phones as
    /// well as names; anything else is matched against names only.
    ///
    /// # Returns
    /// At most `max_results` matches scoring at least `min_confidence`,
    /// sorted by confidence (highest first), then by name.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let phone_query = Self::looks_like_phone(query).then(|| Self::normalize_phone(query));
        let name_query = Self::normalize_name(query);

        let mut results: Vec<MatchResult<'a>> = book
            .records()
            .filter_map(|record| {
                let phone_match = phone_query
                    .as_deref()
                    .and_then(|q| self.match_phone(q, record));
                let name_match = self
                    .fuzzy_match_name(&name_query, record.name().as_str())
                    .map(|score| (score, MatchType::FuzzyName));

                let (confidence, match_type) = match (phone_match, name_match) {
                    (Some(p), Some(n)) => {
                        if p.0 >= n.0 {
                            p
                        } else {
                            n
                        }
                    }
                    (Some(p), None) => p,
                    (None, Some(n)) => n,
                    (None, None) => return None,
                };

                (confidence >= min_confidence).then_some(MatchResult {
                    record,
                    confidence,
                    match_type,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Match a normalized phone query against every phone of `record`.
    ///
    /// Only an exact match counts; a number one digit off is a different phone.
    fn match_phone(&self, query: &str, record: &Record) -> Option<(u8, MatchType)> {
        if query.is_empty() {
            return None;
        }

        record
            .phones()
            .iter()
            .any(|p| p.as_str() == query)
            .then_some((100, MatchType::ExactPhone))
    }

    /// Fuzzy match a normalized query against a contact name.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let name_normalized = Self::normalize_name(contact_name);
        let score = Self::calculate_fuzzy_score(query, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Contains match (substring)
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        let (len1, len2) = (s1_chars.len(), s2_chars.len());

        if len1 == 0 {
            return len2;
        }
        if len2 == 0 {
            return len1;
        }

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=len2).collect();
        let mut current = vec![0; len2 + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[len2]
    }

    // ==================== Normalization Functions ====================

    /// Whether a query should also be treated as a phone number.
    fn looks_like_phone(query: &str) -> bool {
        query.chars().any(|c| c.is_ascii_digit())
            && query
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'))
    }

    /// Normalize a phone number for comparison.
    ///
    /// Extracts only digits and takes the last 10 digits (drops a country code).
    pub fn normalize_phone(phone: &str) -> String {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() > 10 {
            digits[digits.len() - 10..].to_string()
        } else {
            digits
        }
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_of(entries: &[(&str, &[&str])]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phones) in entries {
            let mut record = Record::new(*name).unwrap();
            for phone in phones.iter() {
                record.add_phone(phone).unwrap();
            }
            book.add_record(record);
        }
        book
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(ContactMatcher::normalize_phone("050-123-45-67"), "0501234567");
        assert_eq!(ContactMatcher::normalize_phone("+38 050 123 4567"), "0501234567");
        assert_eq!(ContactMatcher::normalize_phone("123"), "123");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(ContactMatcher::normalize_name("  John   Doe  "), "john doe");
        assert_eq!(ContactMatcher::normalize_name("JANE SMITH"), "jane smith");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(ContactMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_exact_phone_match() {
        let book = book_of(&[("john", &["0501234567"]), ("jane", &["0679876543"])]);
        let results = ContactMatcher::new().find_matches("+38 050 123 45 67", &book, 5, 30);

        assert_eq!(results[0].record.name().as_str(), "john");
        assert_eq!(results[0].confidence, 100);
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_near_miss_phone_is_not_a_match() {
        let book = book_of(&[("alice", &["1234567890"]), ("bob", &["1234567891"])]);
        let results = ContactMatcher::new().find_matches("1234567890", &book, 5, 30);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.name().as_str(), "alice");
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_phone_fragment_is_not_a_match() {
        let book = book_of(&[("john", &["0501234567"])]);
        assert!(ContactMatcher::new()
            .find_matches("1234567", &book, 5, 30)
            .is_empty());
    }

    #[test]
    fn test_fuzzy_name_match() {
        let matcher = ContactMatcher::new();

        let score = matcher.fuzzy_match_name("john doe", "John Doe");
        assert_eq!(score, Some(95));

        let score = matcher.fuzzy_match_name("john", "John Doe");
        assert!(score.unwrap() >= 50);

        // Typo tolerance
        assert!(matcher.fuzzy_match_name("johnn doe", "John Doe").is_some());

        assert!(matcher.fuzzy_match_name("alice", "bob").is_none());
    }

    #[test]
    fn test_find_matches_by_name() {
        let book = book_of(&[("john doe", &[]), ("jane doe", &[]), ("alice smith", &[])]);
        let results = ContactMatcher::new().find_matches("doe", &book, 5, 30);

        let names: Vec<&str> = results.iter().map(|r| r.record.name().as_str()).collect();
        assert_eq!(names, vec!["jane doe", "john doe"]);
        assert!(results.iter().all(|r| r.match_type == MatchType::FuzzyName));
    }

    #[test]
    fn test_confidence_threshold() {
        let book = book_of(&[("john", &[]), ("johnathan", &[])]);
        let matcher = ContactMatcher::new();

        let count_low = matcher.find_matches("john", &book, 5, 0).len();
        let count_high = matcher.find_matches("john", &book, 5, 90).len();

        assert_eq!(count_low, 2);
        assert_eq!(count_high, 1);
    }

    #[test]
    fn test_max_results_limit() {
        let book = book_of(&[("john", &[]), ("johnny", &[]), ("johnson", &[])]);
        let results = ContactMatcher::new().find_matches("john", &book, 2, 0);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.name().as_str(), "john");
    }

    #[test]
    fn test_no_matches() {
        let book = book_of(&[("john", &["0501234567"])]);
        assert!(ContactMatcher::new()
            .find_matches("zzzzzz", &book, 5, 30)
            .is_empty());
    }
}
