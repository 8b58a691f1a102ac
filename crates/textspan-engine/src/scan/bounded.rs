use super::span::Span;

/// Finds the longest span that begins with `open` and ends with `close`.
///
/// Candidate spans are pairs of character positions `(i, j)` with `i < j`
/// where position `i` holds `open` and position `j` holds `close`; the span
/// covers both endpoints. Pairs are enumerated with `i` ascending and, for
/// each `i`, `j` ascending, and a candidate replaces the current best only
/// when it is strictly longer (in characters). The first candidate of
/// maximal length under that order is therefore the one reported.
///
/// Returns `None` when no such pair exists: empty input, a marker that never
/// occurs, or every `close` sitting at or before the first `open`. The two
/// markers may be equal, in which case a valid span still needs two distinct
/// occurrences.
///
/// Runs in O(n²) character comparisons and constant auxiliary space.
pub fn longest_bounded_span(text: &str, open: char, close: char) -> Option<Span> {
    let mut best: Option<Span> = None;
    let mut best_chars = 0usize;

    for (ci, (start, c)) in text.char_indices().enumerate() {
        if c != open {
            continue;
        }
        for (cj, (off, d)) in text.char_indices().enumerate().skip(ci + 1) {
            if d != close {
                continue;
            }
            let chars = cj - ci + 1;
            if chars > best_chars {
                best_chars = chars;
                best = Some(Span {
                    start,
                    end: off + d.len_utf8(),
                });
            }
        }
    }

    best
}

/// Like [`longest_bounded_span`] but materializes the result, returning the
/// empty string when no span qualifies.
pub fn longest_bounded<'a>(text: &'a str, open: char, close: char) -> &'a str {
    match longest_bounded_span(text, open, close) {
        Some(sp) => sp.slice(text),
        None => "",
    }
}
