//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// narrate: split long text into chunks for a text-to-speech service.
///
/// Chunks stay under a character limit and are cut at paragraph, sentence,
/// or word boundaries wherever possible.
#[derive(Parser, Debug)]
#[command(name = "narrate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON configuration file.
    #[arg(short, long, env = "NARRATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json, ndjson).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Chunking options shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkArgs {
    /// Maximum characters per chunk (default: 999).
    #[arg(short, long, env = "NARRATE_MAX_CHARS")]
    pub max_chars: Option<usize>,

    /// Word-break policy: "whitespace" (any whitespace) or "space" (ASCII space only).
    #[arg(long)]
    pub word_break: Option<String>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split text into chunks and print them.
    Split {
        /// Input file, or "-" for stdin.
        input: String,

        #[command(flatten)]
        chunking: ChunkArgs,
    },

    /// Show chunk statistics for a text.
    Stats {
        /// Input file, or "-" for stdin.
        input: String,

        #[command(flatten)]
        chunking: ChunkArgs,
    },

    /// Write each chunk to a numbered file plus a manifest.
    WriteChunks {
        /// Input file, or "-" for stdin.
        input: String,

        /// Output directory.
        #[arg(short, long, default_value = "chunks")]
        out_dir: PathBuf,

        /// Filename prefix (default: "chunk").
        #[arg(long)]
        prefix: Option<String>,

        /// Voice recorded in the manifest.
        #[arg(long, env = "NARRATE_VOICE")]
        voice: Option<String>,

        /// Delivery instructions recorded in the manifest.
        #[arg(long, env = "NARRATE_VIBE")]
        vibe: Option<String>,

        #[command(flatten)]
        chunking: ChunkArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split_args() {
        let cli = Cli::try_parse_from([
            "narrate",
            "split",
            "book.txt",
            "--max-chars",
            "500",
            "--word-break",
            "space",
        ])
        .unwrap();

        match cli.command {
            Commands::Split { input, chunking } => {
                assert_eq!(input, "book.txt");
                assert_eq!(chunking.max_chars, Some(500));
                assert_eq!(chunking.word_break.as_deref(), Some("space"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_write_chunks_defaults() {
        let cli = Cli::try_parse_from(["narrate", "--format", "json", "write-chunks", "-"]).unwrap();
        assert_eq!(cli.format, "json");

        match cli.command {
            Commands::WriteChunks {
                input,
                out_dir,
                prefix,
                ..
            } => {
                assert_eq!(input, "-");
                assert_eq!(out_dir, PathBuf::from("chunks"));
                assert!(prefix.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_limit() {
        let result = Cli::try_parse_from(["narrate", "split", "a.txt", "--max-chars", "-5"]);
        assert!(result.is_err());
    }
}
