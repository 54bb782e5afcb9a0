//! Unicode utilities for text processing.
//!
//! Limits are counted in `char`s (Unicode scalar values) while slicing needs
//! byte offsets; these helpers translate between the two without ever
//! landing inside a multi-byte sequence.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the byte offset at which character `n` (0-based) starts.
///
/// Returns `None` when `s` holds `n` characters or fewer, i.e. when the
/// first `n` characters already cover the whole string.
///
/// # Examples
///
/// ```
/// use speech_chunker::io::char_byte_offset;
///
/// let s = "Hello 世界";
/// assert_eq!(char_byte_offset(s, 7), Some(9)); // '界'
/// assert_eq!(char_byte_offset(s, 8), None);
/// ```
#[must_use]
pub fn char_byte_offset(s: &str, n: usize) -> Option<usize> {
    s.char_indices().nth(n).map(|(offset, _)| offset)
}

/// Counts the characters in a string.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Returns the byte length of the leading whitespace of `s`.
#[must_use]
pub fn leading_whitespace_len(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// Truncates a string at a grapheme cluster boundary.
///
/// # Arguments
///
/// * `s` - The string to truncate.
/// * `max_graphemes` - Maximum number of grapheme clusters.
///
/// # Returns
///
/// A string slice containing at most `max_graphemes` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let mut end_byte = 0;

    for (count, grapheme) in s.graphemes(true).enumerate() {
        if count >= max_graphemes {
            break;
        }
        end_byte += grapheme.len();
    }

    &s[..end_byte]
}
