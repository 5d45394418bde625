//! Core domain types for anagram lookup
//!
//! This module contains the canonical key and the index built on top of it.
//! Nothing here touches the file system except through caller-supplied line sources.

mod index;
mod key;

pub use index::AnagramIndex;
pub use key::CanonicalKey;
