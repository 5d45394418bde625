//! Canonical anagram key
//!
//! Every word maps to a key made of its lowercased characters in ascending order.
//! Two words share a key exactly when they are anagrams of each other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorted-character form of a lowercased word
///
/// Sorting is per Unicode scalar value (`char`), not per grapheme cluster, so a
/// letter followed by a combining mark is treated as two independent characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Compute the key of a word
    ///
    /// The word is lowercased first; callers never need to normalize case themselves.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::CanonicalKey;
    ///
    /// assert_eq!(CanonicalKey::of("Listen"), CanonicalKey::of("SILENT"));
    /// assert_eq!(CanonicalKey::of("tea").as_str(), "aet");
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        Self::of_lowercase(&word.to_lowercase())
    }

    /// Compute the key of a word that is already lowercase
    #[must_use]
    pub(crate) fn of_lowercase(lowercase_word: &str) -> Self {
        let mut chars: Vec<char> = lowercase_word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// Get the key as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
