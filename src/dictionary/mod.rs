//! Dictionary sources
//!
//! Turns word-per-line text files into anagram indexes.

pub mod loader;

pub use loader::{DictionaryLines, build_from_file, build_with_progress, open_lines};
