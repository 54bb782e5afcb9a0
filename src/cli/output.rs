//! Output formatting for CLI commands.
//!
//! Supports text, JSON and newline-delimited JSON output formats.

use crate::core::{Boundary, Chunk};
use crate::error::Error;
use crate::io::truncate_graphemes;
use crate::narration::Report;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Pretty-printed JSON output.
    Json,
    /// One JSON object per line.
    Ndjson,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "ndjson" | "jsonl" => Self::Ndjson,
            _ => Self::Text,
        }
    }
}

/// Summary statistics of a chunked text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkStats {
    /// Configured character limit.
    pub max_chars: usize,
    /// Characters in the input text.
    pub input_chars: usize,
    /// Number of chunks.
    pub chunk_count: usize,
    /// Characters across all chunks.
    pub chunked_chars: usize,
    /// Longest chunk in characters.
    pub longest: usize,
    /// Shortest chunk in characters.
    pub shortest: usize,
    /// Number of chunks ended by each boundary kind.
    pub boundaries: BTreeMap<String, usize>,
}

impl ChunkStats {
    /// Computes statistics for `chunks` cut from a text of `input_chars`.
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk], max_chars: usize, input_chars: usize) -> Self {
        let mut boundaries: BTreeMap<String, usize> = Boundary::ALL
            .iter()
            .map(|b| (b.as_str().to_string(), 0))
            .collect();
        for chunk in chunks {
            *boundaries
                .entry(chunk.boundary.as_str().to_string())
                .or_default() += 1;
        }

        Self {
            max_chars,
            input_chars,
            chunk_count: chunks.len(),
            chunked_chars: chunks.iter().map(|c| c.char_count).sum(),
            longest: chunks.iter().map(|c| c.char_count).max().unwrap_or(0),
            shortest: chunks.iter().map(|c| c.char_count).min().unwrap_or(0),
            boundaries,
        }
    }
}

/// Formats the chunks of a split.
#[must_use]
pub fn format_chunks(chunks: &[Chunk], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks),
        OutputFormat::Json => format_json(&chunks),
        OutputFormat::Ndjson => format_ndjson(chunks),
    }
}

fn format_chunks_text(chunks: &[Chunk]) -> String {
    if chunks.is_empty() {
        return "No chunks (empty input).\n".to_string();
    }

    let mut output = String::new();
    for chunk in chunks {
        let _ = writeln!(
            output,
            "--- chunk {} ({} chars, {}) ---",
            chunk.index, chunk.char_count, chunk.boundary
        );
        output.push_str(&chunk.content);
        if !chunk.content.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

/// Formats chunk statistics, with a per-chunk table in text mode.
#[must_use]
pub fn format_stats(stats: &ChunkStats, chunks: &[Chunk], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Chunk Statistics\n");
            output.push_str("================\n\n");
            let _ = writeln!(output, "  Limit:         {} chars", stats.max_chars);
            let _ = writeln!(output, "  Input:         {} chars", stats.input_chars);
            let _ = writeln!(output, "  Chunks:        {}", stats.chunk_count);
            let _ = writeln!(output, "  Longest:       {} chars", stats.longest);
            let _ = writeln!(output, "  Shortest:      {} chars", stats.shortest);
            output.push_str("  Boundaries:\n");
            for (kind, count) in &stats.boundaries {
                let _ = writeln!(output, "    {kind:<12} {count}");
            }

            if !chunks.is_empty() {
                output.push('\n');
                let _ = writeln!(
                    output,
                    "{:<6} {:<8} {:<10} Preview",
                    "Index", "Chars", "Boundary"
                );
                output.push_str(&"-".repeat(70));
                output.push('\n');
                for chunk in chunks {
                    let _ = writeln!(
                        output,
                        "{:<6} {:<8} {:<10} {}",
                        chunk.index,
                        chunk.char_count,
                        chunk.boundary.as_str(),
                        preview(&chunk.content, 40)
                    );
                }
            }
            output
        }
        OutputFormat::Json => format_json(stats),
        OutputFormat::Ndjson => format_json_line(stats),
    }
}

/// Result of a `write-chunks` run.
#[derive(Debug, Clone, Serialize)]
pub struct WriteSummary<'a> {
    /// Files written, in chunk order.
    pub files: Vec<String>,
    /// Manifest path.
    pub manifest: String,
    /// Per-chunk outcomes.
    pub report: &'a Report,
}

/// Formats the result of writing chunks.
#[must_use]
pub fn format_write_summary(summary: &WriteSummary<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Wrote {} chunks:", summary.files.len());
            for path in &summary.files {
                let _ = writeln!(output, "  {path}");
            }
            let _ = writeln!(output, "Manifest: {}", summary.manifest);
            output
        }
        OutputFormat::Json => format_json(summary),
        OutputFormat::Ndjson => format_json_line(summary),
    }
}

/// Formats an error for the chosen output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json | OutputFormat::Ndjson => {
            #[derive(Serialize)]
            struct ErrorBody<'a> {
                kind: &'a str,
                message: String,
            }
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: ErrorBody<'a>,
            }
            let kind = match err {
                Error::Chunking(_) => "chunking",
                Error::Io(_) => "io",
                Error::Submission(_) => "submission",
                Error::Command(_) => "command",
                Error::Config { .. } => "config",
            };
            let value = ErrorOutput {
                error: ErrorBody {
                    kind,
                    message: err.to_string(),
                },
            };
            if format == OutputFormat::Json {
                format_json(&value)
            } else {
                format_json_line(&value)
            }
        }
    }
}

/// Returns a single-line preview of chunk content.
#[must_use]
pub fn preview(content: &str, max_graphemes: usize) -> String {
    let flat = content.replace('\n', "\\n");
    let cut = truncate_graphemes(&flat, max_graphemes);
    if cut.len() < flat.len() {
        format!("{cut}...")
    } else {
        flat
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

fn format_json_line<T: Serialize + ?Sized>(value: &T) -> String {
    let mut json = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

fn format_ndjson(chunks: &[Chunk]) -> String {
    chunks.iter().map(format_json_line).collect()
}
