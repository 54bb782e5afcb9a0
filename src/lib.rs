//! # speech-chunker
//!
//! Splits long text into ordered chunks for text-to-speech services that
//! cap the length of a single request.
//!
//! Every chunk stays within a character limit. Cuts prefer a paragraph
//! break, then the latest sentence end, then the last word break, and only
//! split inside a word when a single run of non-whitespace exceeds the
//! limit.
//!
//! ## Features
//!
//! - **Chunking**: Greedy boundary-aware splitting with a configurable word-break policy
//! - **Narration**: Sessions that feed chunks in order to a pluggable speech sink
//! - **Export**: Chunk files plus a JSON manifest for offline narration
//! - **Unicode Aware**: Limits are counted in characters, never bytes
//!
//! ```
//! let chunks = speech_chunker::split("First sentence. Second sentence.", 20).unwrap();
//! assert_eq!(chunks, vec!["First sentence.", "Second sentence."]);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod chunking;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod narration;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Boundary, Chunk};

// Re-export chunking types
pub use chunking::{Chunker, DEFAULT_MAX_CHARS, SpeechChunker, WordBreak, split};

// Re-export configuration and narration types
pub use config::NarrationConfig;
pub use narration::{DirectorySink, Plan, Report, Session, SpeechSink};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
