//! Boundary-aware chunking for speech submission.
//!
//! Each cut takes the first boundary kind that exists inside the window of
//! the next `max_chars` characters: paragraph break, then sentence end, then
//! word break, and only then a hard cut at the limit.

use crate::chunking::DEFAULT_MAX_CHARS;
use crate::chunking::traits::{Chunker, WordBreak};
use crate::core::{Boundary, Chunk};
use crate::error::Result;
use crate::io::{char_byte_offset, leading_whitespace_len};
use tracing::debug;

const PARAGRAPH_BREAK: &str = "\n\n";

const SENTENCE_ENDS: [&str; 3] = [". ", "! ", "? "];

/// Greedy chunker that prefers natural break points over mid-word splits.
///
/// # Examples
///
/// ```
/// use speech_chunker::chunking::{Chunker, SpeechChunker};
/// use speech_chunker::core::Boundary;
///
/// let chunker = SpeechChunker::with_limit(30);
/// let text = "Para one line.\n\nPara two is here and continues for a while.";
/// let chunks = chunker.chunk(text).unwrap();
/// assert_eq!(chunks[0].content, "Para one line.");
/// assert_eq!(chunks[0].boundary, Boundary::Paragraph);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechChunker {
    /// Maximum chunk length in characters.
    max_chars: usize,
    /// Characters accepted as word breaks.
    word_break: WordBreak,
}

impl Default for SpeechChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechChunker {
    /// Creates a chunker with the default limit and word-break policy.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_CHARS)
    }

    /// Creates a chunker with a custom limit.
    ///
    /// A zero limit is accepted here and rejected by [`Chunker::chunk`].
    #[must_use]
    pub const fn with_limit(max_chars: usize) -> Self {
        Self {
            max_chars,
            word_break: WordBreak::Whitespace,
        }
    }

    /// Sets the word-break policy.
    #[must_use]
    pub const fn word_break(mut self, word_break: WordBreak) -> Self {
        self.word_break = word_break;
        self
    }

    /// Returns the word-break policy.
    #[must_use]
    pub const fn word_break_policy(&self) -> WordBreak {
        self.word_break
    }

    /// Finds where to cut `rest`, which must start with a non-whitespace
    /// character and hold more than `max_chars` characters.
    ///
    /// Returns the cut as a byte offset into `rest` (always > 0) together
    /// with the rule that chose it.
    fn find_cut(&self, rest: &str) -> (usize, Boundary) {
        let window_end = char_byte_offset(rest, self.max_chars).unwrap_or(rest.len());
        let window = &rest[..window_end];

        // A blank line may start as late as position `max_chars`: only the
        // text before it lands in the chunk.
        let paragraph_end =
            char_byte_offset(rest, self.max_chars + PARAGRAPH_BREAK.len()).unwrap_or(rest.len());
        if let Some(pos) = rest[..paragraph_end].rfind(PARAGRAPH_BREAK) {
            return (pos + PARAGRAPH_BREAK.len(), Boundary::Paragraph);
        }

        if let Some(cut) = SENTENCE_ENDS
            .iter()
            .filter_map(|end| window.rfind(end).map(|pos| pos + end.len()))
            .max()
        {
            return (cut, Boundary::Sentence);
        }

        // The character right after the window is scanned too: a break there
        // means the window ends exactly on a word.
        let scan_end = char_byte_offset(rest, self.max_chars + 1).unwrap_or(rest.len());
        if let Some((pos, _)) = rest[..scan_end]
            .char_indices()
            .rev()
            .find(|&(pos, c)| pos > 0 && self.word_break.is_break(c))
        {
            return (pos, Boundary::Word);
        }

        (window_end, Boundary::Forced)
    }
}

impl Chunker for SpeechChunker {
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        self.validate()?;

        if text.is_empty() {
            return Ok(vec![]);
        }

        // Text that already fits is returned as-is, whitespace included
        if char_byte_offset(text, self.max_chars).is_none() {
            return Ok(vec![Chunk::new(
                0,
                text.to_string(),
                0..text.len(),
                Boundary::End,
            )]);
        }

        let end = text.trim_end().len();
        let mut start = leading_whitespace_len(text);
        let mut chunks = Vec::new();

        while start < end {
            let rest = &text[start..end];

            if char_byte_offset(rest, self.max_chars).is_none() {
                chunks.push(Chunk::new(
                    chunks.len(),
                    rest.to_string(),
                    start..end,
                    Boundary::End,
                ));
                break;
            }

            let (cut, boundary) = self.find_cut(rest);
            let piece = rest[..cut].trim_end();
            let chunk = Chunk::new(
                chunks.len(),
                piece.to_string(),
                start..start + piece.len(),
                boundary,
            );
            debug!(
                index = chunk.index,
                chars = chunk.char_count,
                %boundary,
                "cut chunk"
            );
            chunks.push(chunk);

            start += cut;
            start += leading_whitespace_len(&text[start..end]);
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "speech"
    }

    fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn description(&self) -> &'static str {
        "Greedy chunking at paragraph, sentence, then word boundaries under a character limit"
    }
}
