use super::ScanError;

/// Takes `count` characters of `text` starting at character position `start`.
///
/// `start` is a zero-based character offset; it may equal the character
/// count (yielding the empty string) but not exceed it. A `count` of `None`
/// takes the rest of the text, and a count reaching past the end is clamped.
///
/// Offsets are character positions rather than byte positions, so multibyte
/// input slices correctly.
pub fn substr(text: &str, start: usize, count: Option<usize>) -> Result<&str, ScanError> {
    let n_chars = text.chars().count();
    if start > n_chars {
        return Err(ScanError::StartPastEnd {
            start,
            len: n_chars,
        });
    }

    let from = byte_offset(text, start);
    let to = match count {
        None => text.len(),
        Some(c) => byte_offset(text, start.saturating_add(c).min(n_chars)),
    };
    Ok(&text[from..to])
}

/// Byte offset of the given character position, or the text length when the
/// position is at or past the end.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn takes_rest_of_text_without_count() {
        assert_eq!(substr("Hello World", 0, None), Ok("Hello World"));
        assert_eq!(substr("Hello World", 6, None), Ok("World"));
    }

    #[test]
    fn takes_count_characters() {
        assert_eq!(substr("Hello World", 0, Some(5)), Ok("Hello"));
        assert_eq!(substr("Hello World", 6, Some(3)), Ok("Wor"));
    }

    #[test]
    fn count_past_end_is_clamped() {
        assert_eq!(substr("abc", 1, Some(99)), Ok("bc"));
        assert_eq!(substr("abc", 3, Some(1)), Ok(""));
    }

    #[test]
    fn start_at_end_yields_empty() {
        assert_eq!(substr("abc", 3, None), Ok(""));
        assert_eq!(substr("", 0, None), Ok(""));
    }

    #[test]
    fn start_past_end_is_an_error() {
        let err = substr("abc", 4, None).unwrap_err();
        assert_eq!(err, ScanError::StartPastEnd { start: 4, len: 3 });
        assert!(err.to_string().contains("past the end"));
    }

    #[test]
    fn offsets_are_character_based() {
        assert_eq!(substr("αxβ", 1, Some(1)), Ok("x"));
        assert_eq!(substr("αxβ", 2, None), Ok("β"));
    }
}
