use super::{ScanError, occurs::occurrences};

/// Returns the byte offset of the `occurrence`-th (1-based) match of
/// `pattern` in `text`.
///
/// Matches are counted the same non-overlapping way as
/// [`occurrences`]. Requesting occurrence zero, an empty pattern, or more
/// occurrences than the text contains is an error reporting how many were
/// actually present.
pub fn locate(text: &str, pattern: &str, occurrence: usize) -> Result<usize, ScanError> {
    let not_found = || ScanError::OccurrenceNotFound {
        pattern: pattern.to_string(),
        wanted: occurrence,
        found: occurrences(text, pattern),
    };

    if occurrence == 0 || pattern.is_empty() {
        return Err(not_found());
    }
    text.match_indices(pattern)
        .map(|(i, _)| i)
        .nth(occurrence - 1)
        .ok_or_else(not_found)
}
