//! Command implementations

pub mod lookup;

pub use lookup::{
    DEFAULT_CACHE_FILE, IndexOrigin, LookupConfig, LookupResult, OpenedIndex, lookup_anagrams,
    open_index,
};
