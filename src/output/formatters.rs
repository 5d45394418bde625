//! Formatting utilities for terminal output

use crate::commands::LookupResult;

/// Line printed when a query has no anagrams
pub const NONE_FOUND: &str = "None found!";

/// Header line introducing the anagrams of a query
#[must_use]
pub fn lookup_header(query: &str) -> String {
    format!("Case-insensitive anagrams of \"{query}\":")
}

/// Plain-text body lines for a lookup, one per anagram
///
/// Returns a single [`NONE_FOUND`] line when there is nothing to report.
#[must_use]
pub fn lookup_lines(result: &LookupResult) -> Vec<String> {
    if result.anagrams.is_empty() {
        vec![format!("\t{NONE_FOUND}")]
    } else {
        result
            .anagrams
            .iter()
            .map(|anagram| format!("\t{anagram}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(query: &str, anagrams: &[&str]) -> LookupResult {
        LookupResult {
            query: query.to_string(),
            anagrams: anagrams.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn header_quotes_original_query() {
        assert_eq!(
            lookup_header("Tac"),
            "Case-insensitive anagrams of \"Tac\":"
        );
    }

    #[test]
    fn lines_are_tab_indented() {
        let lines = lookup_lines(&result("tac", &["cat", "act"]));
        assert_eq!(lines, ["\tcat", "\tact"]);
    }

    #[test]
    fn lines_report_none_found() {
        let lines = lookup_lines(&result("xyz", &[]));
        assert_eq!(lines, ["\tNone found!"]);
    }
}
