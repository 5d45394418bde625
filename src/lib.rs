//! Anagram Finder
//!
//! Groups dictionary words into anagram classes and answers "which words are
//! anagrams of X?" queries, caching the grouped index on disk between runs.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::core::AnagramIndex;
//!
//! let mut index = AnagramIndex::new();
//! for word in ["cat", "act", "dog"] {
//!     index.insert(word);
//! }
//!
//! assert_eq!(index.query("TAC"), ["cat", "act"]);
//! assert!(index.query("xyz").is_empty());
//! ```

// Core domain types
pub mod core;

// Dictionary sources
pub mod dictionary;

// Index snapshots on disk
pub mod cache;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::IndexError;
