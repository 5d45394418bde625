//! Anagram index
//!
//! Groups words by their canonical key. Each key owns the words that hash to it,
//! in the order they were inserted.

use super::key::CanonicalKey;
use crate::error::IndexError;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Mapping from canonical key to every inserted word sharing that key
///
/// The index only grows: words are appended through [`AnagramIndex::insert`] and never
/// removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnagramIndex {
    entries: FxHashMap<CanonicalKey, Vec<String>>,
}

impl AnagramIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an index from already-grouped entries
    ///
    /// Used by the cache loader, which validates keys before handing them over.
    pub(crate) fn from_entries(entries: FxHashMap<CanonicalKey, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Add a word to its anagram class
    ///
    /// The word is lowercased before it is keyed and stored. Any string is accepted,
    /// including the empty string.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::AnagramIndex;
    ///
    /// let mut index = AnagramIndex::new();
    /// index.insert("Tea");
    /// assert_eq!(index.query("EAT"), ["tea"]);
    /// ```
    pub fn insert(&mut self, word: &str) {
        let lowercase = word.to_lowercase();
        let key = CanonicalKey::of_lowercase(&lowercase);
        self.entries.entry(key).or_default().push(lowercase);
    }

    /// Insert every line of a lazy line source
    ///
    /// Lines are expected to have their terminators stripped already. Returns the
    /// number of lines inserted.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::SourceRead`] on the first line that cannot be read.
    /// Words inserted before the failure stay in the index.
    pub fn build_from_lines<I>(&mut self, lines: I, source: &Path) -> Result<usize, IndexError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut inserted = 0;
        for line in lines {
            let line = line.map_err(|e| IndexError::SourceRead {
                path: source.to_path_buf(),
                source: e,
            })?;
            self.insert(&line);
            inserted += 1;
        }
        Ok(inserted)
    }

    /// All stored anagrams of a word
    ///
    /// The query is case-insensitive. The result includes the word itself when it was
    /// inserted; callers that want strict anagrams filter it out. Unknown words yield an
    /// empty slice.
    #[must_use]
    pub fn query(&self, word: &str) -> &[String] {
        self.get(&CanonicalKey::of(word))
    }

    /// Words stored under a key, or an empty slice
    #[inline]
    #[must_use]
    pub fn get(&self, key: &CanonicalKey) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Check whether any inserted word has this key
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &CanonicalKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of anagram classes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been inserted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored words across all classes
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate over `(key, words)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &[String])> {
        self.entries
            .iter()
            .map(|(key, words)| (key, words.as_slice()))
    }
}
