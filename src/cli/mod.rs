//! CLI layer for narrate.
//!
//! Provides the command-line interface using clap, with commands for
//! splitting text, inspecting chunk statistics and writing chunk files.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{ChunkArgs, Cli, Commands};
