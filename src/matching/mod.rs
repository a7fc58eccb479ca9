//! Fuzzy matching utilities for contact search.
//!
//! This module provides fuzzy name matching and exact phone matching over
//! the records of an address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{
    ContactMatcher, MatchResult, MatchType, DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE,
};
