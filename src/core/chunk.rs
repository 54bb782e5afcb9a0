//! Chunk representation.
//!
//! Chunks are produced only by a [`Chunker`](crate::chunking::Chunker) and
//! are immutable afterwards. Besides the trimmed content, each chunk records
//! where it sits in the source text and which rule ended it, so callers can
//! rebuild the source or explain a cut.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The rule that ended a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Cut after a blank line (`"\n\n"`).
    Paragraph,
    /// Cut after `". "`, `"! "` or `"? "`.
    Sentence,
    /// Cut at the last word break before the limit.
    Word,
    /// Cut at exactly the limit inside an over-long run.
    Forced,
    /// Last chunk of the text, or the whole text when it already fits.
    End,
}

impl Boundary {
    /// All boundary kinds, in cut-priority order.
    pub const ALL: [Self; 5] = [
        Self::Paragraph,
        Self::Sentence,
        Self::Word,
        Self::Forced,
        Self::End,
    ];

    /// Returns the lowercase name used in output and manifests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
            Self::Word => "word",
            Self::Forced => "forced",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered piece of the original text.
///
/// # Examples
///
/// ```
/// use speech_chunker::core::{Boundary, Chunk};
///
/// let chunk = Chunk::new(0, "Hello, world!".to_string(), 0..13, Boundary::End);
/// assert_eq!(chunk.char_count, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position in the output sequence (0-based).
    pub index: usize,

    /// Chunk content, trimmed unless the text was returned unsplit.
    pub content: String,

    /// Length of `content` in characters.
    pub char_count: usize,

    /// Byte range of `content` in the source text.
    pub byte_range: Range<usize>,

    /// Rule that ended this chunk.
    pub boundary: Boundary,
}

impl Chunk {
    /// Creates a new chunk, counting its characters.
    #[must_use]
    pub fn new(index: usize, content: String, byte_range: Range<usize>, boundary: Boundary) -> Self {
        let char_count = content.chars().count();
        Self {
            index,
            content,
            char_count,
            byte_range,
            boundary,
        }
    }

    /// Returns the size of the chunk in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Checks if the chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the start byte offset in the source text.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.byte_range.start
    }

    /// Returns the end byte offset in the source text.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.byte_range.end
    }
}

/// Consumes chunks and returns their contents in order.
#[must_use]
pub fn into_contents(chunks: Vec<Chunk>) -> Vec<String> {
    chunks.into_iter().map(|chunk| chunk.content).collect()
}
