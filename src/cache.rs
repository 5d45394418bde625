//! On-disk index snapshots
//!
//! An index is persisted as a versioned JSON document so a later run can skip
//! re-reading the dictionary. Records are written sorted by key, which keeps the
//! artifact byte-for-byte stable for the same index.

use crate::core::{AnagramIndex, CanonicalKey};
use crate::error::IndexError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identifier written into every snapshot
pub const FORMAT_NAME: &str = "anagram-index";

/// Snapshot layout version understood by this build
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    format: &'a str,
    version: u32,
    word_count: usize,
    entries: Vec<EntryRef<'a>>,
}

#[derive(Serialize)]
struct EntryRef<'a> {
    key: &'a CanonicalKey,
    words: &'a [String],
}

#[derive(Deserialize)]
struct Snapshot {
    format: String,
    version: u32,
    word_count: usize,
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    key: CanonicalKey,
    words: Vec<String>,
}

/// Write the full index to `path`
///
/// The snapshot is written to a sibling temporary file first and then renamed into
/// place, so an interrupted write never leaves a truncated cache behind.
///
/// # Errors
///
/// Returns [`IndexError::Persist`] if the file cannot be written. The index itself is
/// never affected.
pub fn save<P: AsRef<Path>>(index: &AnagramIndex, path: P) -> Result<(), IndexError> {
    let path = path.as_ref();
    let persist_err = |source: io::Error| IndexError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let mut entries: Vec<EntryRef<'_>> = index
        .iter()
        .map(|(key, words)| EntryRef { key, words })
        .collect();
    entries.sort_unstable_by(|a, b| a.key.cmp(b.key));

    let snapshot = SnapshotRef {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        word_count: index.word_count(),
        entries,
    };

    let tmp_path = temporary_sibling(path);
    if let Err(e) = write_snapshot(&snapshot, &tmp_path) {
        // Best effort: the temporary file may not even exist
        let _ = fs::remove_file(&tmp_path);
        return Err(persist_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(persist_err(e));
    }

    debug!(
        path = %path.display(),
        classes = index.len(),
        words = snapshot.word_count,
        "saved index cache"
    );
    Ok(())
}

fn write_snapshot(snapshot: &SnapshotRef<'_>, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, snapshot)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("cache"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}

/// Restore an index previously written by [`save`]
///
/// # Errors
///
/// - [`IndexError::SourceRead`] if the file is missing or unreadable
/// - [`IndexError::Deserialization`] if the file is not a snapshot, was written by an
///   incompatible version, or fails its integrity checks
pub fn load<P: AsRef<Path>>(path: P) -> Result<AnagramIndex, IndexError> {
    let path = path.as_ref();
    let read_err = |source: io::Error| IndexError::SourceRead {
        path: path.to_path_buf(),
        source,
    };
    let corrupt = |reason: String| IndexError::Deserialization {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(read_err)?;
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            read_err(io::Error::from(e))
        } else {
            corrupt(e.to_string())
        }
    })?;

    if snapshot.format != FORMAT_NAME {
        return Err(corrupt(format!("unexpected format '{}'", snapshot.format)));
    }
    if snapshot.version != FORMAT_VERSION {
        return Err(corrupt(format!(
            "unsupported version {} (expected {FORMAT_VERSION})",
            snapshot.version
        )));
    }

    let mut entries: FxHashMap<CanonicalKey, Vec<String>> = FxHashMap::default();
    entries.reserve(snapshot.entries.len());
    let mut word_count = 0;

    for Entry { key, words } in snapshot.entries {
        if words.is_empty() {
            return Err(corrupt(format!("key '{key}' has no words")));
        }
        if let Some(word) = words.iter().find(|w| CanonicalKey::of(w) != key) {
            return Err(corrupt(format!("word '{word}' does not belong to key '{key}'")));
        }
        word_count += words.len();
        if entries.insert(key.clone(), words).is_some() {
            return Err(corrupt(format!("key '{key}' appears more than once")));
        }
    }

    if word_count != snapshot.word_count {
        return Err(corrupt(format!(
            "header records {} words but {word_count} were found",
            snapshot.word_count
        )));
    }

    let index = AnagramIndex::from_entries(entries);
    debug!(
        path = %path.display(),
        classes = index.len(),
        words = word_count,
        "loaded index cache"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_index() -> AnagramIndex {
        let mut index = AnagramIndex::new();
        for word in ["cat", "act", "dog", "Tea", "ate", "eat", "god", ""] {
            index.insert(word);
        }
        index
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        let index = sample_index();

        save(&index, &path).unwrap();
        let restored = load(&path).unwrap();

        assert_eq!(restored, index);
        for word in ["cat", "act", "dog", "tea", "ate", "eat", "god", ""] {
            assert_eq!(restored.query(word), index.query(word), "query '{word}'");
        }
        assert_eq!(restored.query("eat"), ["tea", "ate", "eat"]);
    }

    #[test]
    fn save_empty_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");

        save(&AnagramIndex::new(), &path).unwrap();
        let restored = load(&path).unwrap();

        assert!(restored.is_empty());
    }

    #[test]
    fn save_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.cache");
        let second = dir.path().join("second.cache");
        let index = sample_index();

        save(&index, &first).unwrap();
        save(&index.clone(), &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn save_leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");

        save(&sample_index(), &path).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, [OsString::from("dict.cache")]);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("dict.cache");

        let err = save(&sample_index(), &path).unwrap_err();
        assert!(matches!(err, IndexError::Persist { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path().join("dict.cache")).unwrap_err();

        assert!(matches!(err, IndexError::SourceRead { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn load_garbage_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(&path, b"\xac\xed\x00\x05sr\x00\x11java.util.HashMap").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn load_truncated_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        save(&sample_index(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn load_rejects_other_versions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"anagram-index","version":99,"word_count":0,"entries":[]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { ref reason, .. } if reason.contains("version 99")));
    }

    #[test]
    fn load_rejects_foreign_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"something-else","version":1,"word_count":0,"entries":[]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn load_rejects_misfiled_words() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"anagram-index","version":1,"word_count":2,
                "entries":[{"key":"act","words":["cat","dog"]}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { ref reason, .. } if reason.contains("dog")));
    }

    #[test]
    fn load_rejects_duplicate_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"anagram-index","version":1,"word_count":2,
                "entries":[{"key":"act","words":["cat"]},{"key":"act","words":["act"]}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn load_rejects_word_count_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"anagram-index","version":1,"word_count":5,
                "entries":[{"key":"act","words":["cat","act"]}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn load_rejects_empty_classes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dict.cache");
        fs::write(
            &path,
            r#"{"format":"anagram-index","version":1,"word_count":0,
                "entries":[{"key":"act","words":[]}]}"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, IndexError::Deserialization { .. }));
    }

    #[test]
    fn temporary_sibling_appends_suffix() {
        assert_eq!(
            temporary_sibling(Path::new("/data/dict.cache")),
            PathBuf::from("/data/dict.cache.tmp")
        );
        assert_eq!(
            temporary_sibling(Path::new("dict.cache")),
            PathBuf::from("dict.cache.tmp")
        );
    }
}
