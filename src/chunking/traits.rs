//! Chunker trait definition and the word-break policy.

use crate::core::Chunk;
use crate::error::{ChunkingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for splitting text into submission-sized chunks.
///
/// Implementations are `Send + Sync` and hold no mutable state, so one
/// chunker may serve any number of callers. Output must be deterministic
/// for the same input.
///
/// # Examples
///
/// ```
/// use speech_chunker::chunking::{Chunker, SpeechChunker};
///
/// let chunker = SpeechChunker::with_limit(40);
/// let text = "Hello, world! ".repeat(10);
/// let chunks = chunker.chunk(&text).unwrap();
/// assert!(chunks.iter().all(|c| c.char_count <= 40));
/// ```
pub trait Chunker: Send + Sync {
    /// Splits the input text into ordered chunks.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunker's configuration is invalid.
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Returns the name of the chunking strategy.
    fn name(&self) -> &'static str;

    /// Returns the maximum chunk length in characters.
    fn max_chars(&self) -> usize;

    /// Returns a description of the chunking strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Validates configuration before chunking.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidLimit`] if the limit is zero.
    fn validate(&self) -> Result<()> {
        if self.max_chars() == 0 {
            return Err(ChunkingError::InvalidLimit { max_chars: 0 }.into());
        }
        Ok(())
    }
}

/// Which characters count as a word break when no paragraph or sentence
/// boundary is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordBreak {
    /// Any Unicode whitespace (space, tab, newline, no-break space, ...).
    #[default]
    Whitespace,
    /// Only the ASCII space character.
    Space,
}

impl WordBreak {
    /// Returns whether `c` is a break character under this policy.
    #[must_use]
    pub fn is_break(self, c: char) -> bool {
        match self {
            Self::Whitespace => c.is_whitespace(),
            Self::Space => c == ' ',
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for WordBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordBreak {
    type Err = ChunkingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whitespace" => Ok(Self::Whitespace),
            "space" => Ok(Self::Space),
            _ => Err(ChunkingError::UnknownWordBreak {
                name: s.to_string(),
            }),
        }
    }
}
