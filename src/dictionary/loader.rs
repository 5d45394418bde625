//! Dictionary loading utilities
//!
//! Reads a plain-text dictionary (one word per line) lazily, so large word lists
//! are never held in memory as a whole.

use crate::core::AnagramIndex;
use crate::error::IndexError;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Lazy line reader over a dictionary file
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of aborting the
/// read, and each affected line is reported with its 1-based line number.
pub struct DictionaryLines<R> {
    reader: R,
    path: PathBuf,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> DictionaryLines<R> {
    /// Wrap a buffered reader; `path` is only used in diagnostics
    #[must_use]
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            line_number: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for DictionaryLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => line,
                    Err(e) => {
                        warn!(
                            path = %self.path.display(),
                            line = self.line_number,
                            "invalid UTF-8 in dictionary, decoding lossily"
                        );
                        String::from_utf8_lossy(e.as_bytes()).into_owned()
                    }
                };
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Open a dictionary file as a lazy stream of lines
///
/// Line terminators (`\n` or `\r\n`) are stripped. Blank lines are kept and yielded
/// as empty strings. The file handle is released when the iterator is dropped.
///
/// # Errors
///
/// Returns [`IndexError::SourceRead`] if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use anagram_finder::dictionary::loader::open_lines;
///
/// let lines = open_lines("/usr/share/dict/words").unwrap();
/// println!("Dictionary has {} lines", lines.count());
/// ```
pub fn open_lines<P: AsRef<Path>>(path: P) -> Result<DictionaryLines<BufReader<File>>, IndexError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IndexError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(DictionaryLines::new(BufReader::new(file), path))
}

/// Build an index from every line of a dictionary file
///
/// # Errors
///
/// Returns [`IndexError::SourceRead`] if the file cannot be opened or read.
pub fn build_from_file<P: AsRef<Path>>(path: P) -> Result<AnagramIndex, IndexError> {
    build_with_progress(path, &ProgressBar::hidden())
}

/// Build an index from a dictionary file, advancing `progress` once per line
///
/// The bar is left running; finishing it is up to the caller.
///
/// # Errors
///
/// Returns [`IndexError::SourceRead`] if the file cannot be opened or read.
pub fn build_with_progress<P: AsRef<Path>>(
    path: P,
    progress: &ProgressBar,
) -> Result<AnagramIndex, IndexError> {
    let path = path.as_ref();
    let mut index = AnagramIndex::new();
    let lines = open_lines(path)?.inspect(|_| progress.inc(1));
    let inserted = index.build_from_lines(lines, path)?;
    info!(
        dictionary = %path.display(),
        words = inserted,
        classes = index.len(),
        "built index from dictionary"
    );
    Ok(index)
}
