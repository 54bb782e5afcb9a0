//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::chunking::WordBreak;
use crate::cli::output::{
    ChunkStats, OutputFormat, WriteSummary, format_chunks, format_stats, format_write_summary,
};
use crate::cli::parser::{ChunkArgs, Cli, Commands};
use crate::config::NarrationConfig;
use crate::error::{CommandError, Result};
use crate::io::{char_count, read_input};
use crate::narration::{DirectorySink, Session};
use std::path::Path;
use tracing::debug;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let base = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Split { input, chunking } => {
            cmd_split(apply_chunk_args(base, chunking)?, input, format)
        }
        Commands::Stats { input, chunking } => {
            cmd_stats(apply_chunk_args(base, chunking)?, input, format)
        }
        Commands::WriteChunks {
            input,
            out_dir,
            prefix,
            voice,
            vibe,
            chunking,
        } => {
            let mut config = apply_chunk_args(base, chunking)?;
            if let Some(prefix) = prefix {
                config = config.output_prefix(prefix);
            }
            if let Some(voice) = voice {
                config = config.voice(voice);
            }
            if let Some(vibe) = vibe {
                config = config.vibe(vibe);
            }
            cmd_write_chunks(config, input, out_dir, format)
        }
    }
}

/// Loads the configuration file if one was given, else the defaults.
fn load_config(path: Option<&Path>) -> Result<NarrationConfig> {
    path.map_or_else(
        || Ok(NarrationConfig::default()),
        |path| {
            debug!(path = %path.display(), "loading config");
            NarrationConfig::from_file(path)
        },
    )
}

/// Layers command-line chunking options over a loaded configuration.
fn apply_chunk_args(mut config: NarrationConfig, args: &ChunkArgs) -> Result<NarrationConfig> {
    if let Some(max_chars) = args.max_chars {
        config = config.max_chars(max_chars);
    }
    if let Some(name) = &args.word_break {
        config = config.word_break(name.parse::<WordBreak>()?);
    }
    Ok(config)
}

fn cmd_split(config: NarrationConfig, input: &str, format: OutputFormat) -> Result<String> {
    let session = Session::new(config)?;
    let text = read_input(input)?;
    let plan = session.plan(&text)?;
    Ok(format_chunks(plan.chunks(), format))
}

fn cmd_stats(config: NarrationConfig, input: &str, format: OutputFormat) -> Result<String> {
    let session = Session::new(config)?;
    let text = read_input(input)?;
    let plan = session.plan(&text)?;
    let stats = ChunkStats::from_chunks(plan.chunks(), plan.max_chars(), char_count(&text));
    Ok(format_stats(&stats, plan.chunks(), format))
}

fn cmd_write_chunks(
    config: NarrationConfig,
    input: &str,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<String> {
    let session = Session::new(config)?;
    let text = read_input(input)?;
    let plan = session.plan(&text)?;

    let mut sink = DirectorySink::new(out_dir, &session.config().output_prefix);
    let report = session.run(&plan, &mut sink)?;

    if !report.is_complete() {
        return Err(CommandError::ExecutionFailed(format!(
            "failed to write chunks {:?} to {}",
            report.failed_indices(),
            out_dir.display()
        ))
        .into());
    }

    let summary = WriteSummary {
        files: sink
            .written_paths()
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        manifest: sink.manifest_path().to_string_lossy().to_string(),
        report: &report,
    };
    Ok(format_write_summary(&summary, format))
}
