//! Error types for speech-chunker operations.
//!
//! A single crate-level [`Error`] wraps one `thiserror` enum per concern:
//! chunking, file I/O, chunk submission, and CLI commands.

use thiserror::Error;

/// Result type alias for speech-chunker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking-related errors.
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkingError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// A chunk could not be handed to the speech sink.
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Chunking-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    /// The character limit is not a positive integer.
    #[error("invalid max_chars {max_chars}: must be greater than zero")]
    InvalidLimit {
        /// The rejected limit.
        max_chars: usize,
    },

    /// Unknown word-break policy name.
    #[error("unknown word-break policy: {name} (expected \"whitespace\" or \"space\")")]
    UnknownWordBreak {
        /// Name that was not recognized.
        name: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// Errors reported by a speech sink for a single chunk.
///
/// These never invalidate the chunk sequence: the failed chunk can be
/// resubmitted with its content unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The sink refused or failed to accept the chunk.
    #[error("chunk {index} rejected: {reason}")]
    Rejected {
        /// Index of the chunk.
        index: usize,
        /// Reason given by the sink.
        reason: String,
    },

    /// The sink gave up waiting on the external service.
    #[error("chunk {index} timed out after {seconds}s")]
    TimedOut {
        /// Index of the chunk.
        index: usize,
        /// Seconds waited before giving up.
        seconds: u64,
    },
}

impl SubmissionError {
    /// Returns the index of the chunk this error refers to.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Rejected { index, .. } | Self::TimedOut { index, .. } => *index,
        }
    }
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(CommandError::OutputFormat(err.to_string()))
    }
}
