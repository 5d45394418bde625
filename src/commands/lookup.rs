//! Anagram lookup command
//!
//! Opens the index (cache first, dictionary as fallback) and answers queries.

use crate::cache;
use crate::core::AnagramIndex;
use crate::dictionary::build_with_progress;
use crate::error::IndexError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Cache file used when none is configured, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "dict.cache";

/// Configuration for opening an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub dictionary: PathBuf,
    pub cache_path: PathBuf,
    /// Skip the cache and always read the dictionary
    pub rebuild: bool,
    /// Never write a cache after building
    pub no_cache: bool,
}

impl LookupConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.into(),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            rebuild: false,
            no_cache: false,
        }
    }

    #[must_use]
    pub fn with_cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = cache_path.into();
        self
    }

    #[must_use]
    pub const fn with_rebuild(mut self, rebuild: bool) -> Self {
        self.rebuild = rebuild;
        self
    }

    #[must_use]
    pub const fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }
}

/// Where an opened index came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
    Cache,
    Dictionary,
}

/// An index ready for queries
#[derive(Debug)]
pub struct OpenedIndex {
    pub index: AnagramIndex,
    pub origin: IndexOrigin,
}

/// Result of looking up one query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub query: String,
    /// Anagrams in dictionary order, excluding the query word itself
    pub anagrams: Vec<String>,
}

/// Open the index described by `config`
///
/// Tries the cache first. Any cache failure (missing, unreadable or corrupt) falls
/// back to reading the dictionary, after which the cache is rewritten. A failed
/// rewrite is logged and otherwise ignored.
///
/// # Errors
///
/// Returns [`IndexError::SourceRead`] if the dictionary has to be read and cannot be.
pub fn open_index(config: &LookupConfig) -> Result<OpenedIndex, IndexError> {
    if config.rebuild {
        debug!("rebuild requested, ignoring cache");
    } else {
        match cache::load(&config.cache_path) {
            Ok(index) => {
                info!(
                    cache = %config.cache_path.display(),
                    classes = index.len(),
                    "using cached index"
                );
                return Ok(OpenedIndex {
                    index,
                    origin: IndexOrigin::Cache,
                });
            }
            Err(e) if e.is_not_found() => debug!("no cache yet: {e}"),
            Err(e) => warn!(cache = %e.path().display(), "{e}; rebuilding from dictionary"),
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} ({pos} words)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Indexing {}", config.dictionary.display()));
    let built = build_with_progress(&config.dictionary, &spinner);
    spinner.finish_and_clear();
    let index = built?;

    if !config.no_cache {
        if let Err(e) = cache::save(&index, &config.cache_path) {
            warn!("Unable to cache index, will recreate on next run: {e}");
        }
    }

    Ok(OpenedIndex {
        index,
        origin: IndexOrigin::Dictionary,
    })
}

/// Look up the strict anagrams of `query`
///
/// Entries equal to the lowercased query are dropped, so a dictionary word is never
/// reported as an anagram of itself.
#[must_use]
pub fn lookup_anagrams(index: &AnagramIndex, query: &str) -> LookupResult {
    let lowercase = query.to_lowercase();
    let anagrams = index
        .query(query)
        .iter()
        .filter(|word| **word != lowercase)
        .cloned()
        .collect();

    LookupResult {
        query: query.to_string(),
        anagrams,
    }
}
