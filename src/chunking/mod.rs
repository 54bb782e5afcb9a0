//! Text chunking for speech submission.
//!
//! The [`Chunker`] trait is the seam the narration session depends on;
//! [`SpeechChunker`] is the boundary-aware implementation. [`split`] is the
//! plain-string entry point for callers that only need the chunk texts.

pub mod speech;
pub mod traits;

pub use speech::SpeechChunker;
pub use traits::{Chunker, WordBreak};

use crate::core::into_contents;
use crate::error::Result;

/// Default chunk limit in characters, matching the input limit of the
/// text-to-speech page this tool was built around.
pub const DEFAULT_MAX_CHARS: usize = 999;

/// Creates the default chunker.
#[must_use]
pub const fn default_chunker() -> SpeechChunker {
    SpeechChunker::new()
}

/// Splits `text` into chunks of at most `max_chars` characters.
///
/// Text that already fits is returned unchanged as a single chunk; longer
/// text is cut at paragraph, sentence, or word boundaries and each chunk is
/// trimmed. Empty text yields no chunks.
///
/// # Errors
///
/// Returns [`crate::error::ChunkingError::InvalidLimit`] if `max_chars` is zero.
///
/// # Examples
///
/// ```
/// use speech_chunker::chunking::split;
///
/// assert_eq!(split("short text", 999).unwrap(), vec!["short text"]);
/// assert!(split("", 999).unwrap().is_empty());
/// assert!(split("x", 0).is_err());
/// ```
pub fn split(text: &str, max_chars: usize) -> Result<Vec<String>> {
    SpeechChunker::with_limit(max_chars)
        .chunk(text)
        .map(into_contents)
}
