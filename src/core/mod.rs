//! Core domain model.
//!
//! Holds the [`Chunk`] type shared by the chunker, the narration session and
//! the CLI. Pure data with no I/O.

pub mod chunk;

pub use chunk::{Boundary, Chunk, into_contents};
