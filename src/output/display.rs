//! Display functions for command results

use super::formatters::{lookup_header, lookup_lines};
use crate::commands::LookupResult;
use colored::Colorize;
use std::io::{self, Write};

/// Write the anagrams found for one query to `out`, followed by a blank line
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_lookup_result<W: Write>(out: &mut W, result: &LookupResult) -> io::Result<()> {
    writeln!(out, "{}", lookup_header(&result.query).bright_cyan().bold())?;

    let found = !result.anagrams.is_empty();
    for line in lookup_lines(result) {
        if found {
            writeln!(out, "{}", line.green())?;
        } else {
            writeln!(out, "{}", line.yellow())?;
        }
    }

    writeln!(out)
}
