//! Narration session: plan once, submit in order, report per chunk.

use crate::chunking::{Chunker, SpeechChunker};
use crate::config::NarrationConfig;
use crate::core::Chunk;
use crate::error::{Result, SubmissionError};
use crate::narration::sink::{SpeechSink, Submission, VoiceSettings};
use serde::Serialize;
use tracing::{info, warn};

/// The chunk sequence for one text, produced by a single chunker call.
///
/// A plan is read-only: runs and resubmissions borrow it and never re-split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    chunks: Vec<Chunk>,
    max_chars: usize,
}

impl Plan {
    /// Returns the planned chunks in submission order.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Returns the limit the chunks were cut to.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Returns the number of chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns whether the plan holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// What happened to one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Accepted by the sink.
    Submitted {
        /// Receipt from the sink.
        submission: Submission,
    },
    /// Rejected by the sink.
    Failed {
        /// Error message from the sink.
        error: String,
    },
    /// Not attempted because an earlier chunk failed.
    Skipped,
}

impl Outcome {
    fn from_result(result: std::result::Result<Submission, SubmissionError>) -> Self {
        match result {
            Ok(submission) => Self::Submitted { submission },
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Per-chunk outcomes of a run, indexed by chunk index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    /// Returns all outcomes in chunk order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the outcome of chunk `index`.
    #[must_use]
    pub fn outcome(&self, index: usize) -> Option<&Outcome> {
        self.outcomes.get(index)
    }

    /// Returns the number of chunks covered by the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the report covers no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the number of accepted chunks.
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Submitted { .. }))
            .count()
    }

    /// Returns the indices of failed chunks.
    #[must_use]
    pub fn failed_indices(&self) -> Vec<usize> {
        self.indices_where(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Returns the indices of skipped chunks.
    #[must_use]
    pub fn skipped_indices(&self) -> Vec<usize> {
        self.indices_where(|o| matches!(o, Outcome::Skipped))
    }

    /// Returns whether every chunk was accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.submitted_count() == self.outcomes.len()
    }

    fn indices_where(&self, pred: impl Fn(&Outcome) -> bool) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| pred(o))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Drives one narration job against a [`SpeechSink`].
///
/// # Examples
///
/// ```
/// use speech_chunker::config::NarrationConfig;
/// use speech_chunker::narration::Session;
///
/// let session = Session::new(NarrationConfig::default().max_chars(20)).unwrap();
/// let plan = session.plan("One sentence here. Another one there.").unwrap();
/// assert_eq!(plan.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: NarrationConfig,
    chunker: SpeechChunker,
}

impl Session {
    /// Creates a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: NarrationConfig) -> Result<Self> {
        config.validate()?;
        let chunker = config.chunker();
        Ok(Self { config, chunker })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// Returns the voice settings handed to sinks.
    #[must_use]
    pub fn voice_settings(&self) -> VoiceSettings {
        VoiceSettings {
            voice: self.config.voice.clone(),
            vibe: self.config.vibe.clone(),
            max_chars: self.config.max_chars,
        }
    }

    /// Splits `text` into the chunk sequence for this job.
    ///
    /// # Errors
    ///
    /// Returns an error if chunking fails.
    pub fn plan(&self, text: &str) -> Result<Plan> {
        let chunks = self.chunker.chunk(text)?;
        info!(
            chunks = chunks.len(),
            max_chars = self.chunker.max_chars(),
            "planned narration"
        );
        Ok(Plan {
            chunks,
            max_chars: self.chunker.max_chars(),
        })
    }

    /// Submits every chunk of `plan` in order.
    ///
    /// A failed chunk is recorded and the run moves on, unless
    /// `stop_on_failure` is set, in which case the remaining chunks are
    /// marked [`Outcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink fails to begin or finish; per-chunk
    /// failures are reported in the [`Report`].
    pub fn run<S: SpeechSink + ?Sized>(&self, plan: &Plan, sink: &mut S) -> Result<Report> {
        sink.begin(&self.voice_settings())?;

        let mut outcomes = Vec::with_capacity(plan.len());
        let mut halted = false;

        for chunk in plan.chunks() {
            if halted {
                outcomes.push(Outcome::Skipped);
                continue;
            }

            let outcome = Outcome::from_result(submit_logged(sink, chunk));
            if matches!(outcome, Outcome::Failed { .. }) && self.config.stop_on_failure {
                halted = true;
            }
            outcomes.push(outcome);
        }

        let report = Report { outcomes };
        sink.finish(&report)?;
        Ok(report)
    }

    /// Resubmits each failed or skipped chunk once, unchanged, updating
    /// `report` in place. Returns the number of chunks accepted this pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to finish.
    pub fn resubmit_failed<S: SpeechSink + ?Sized>(
        &self,
        plan: &Plan,
        report: &mut Report,
        sink: &mut S,
    ) -> Result<usize> {
        let mut accepted = 0;

        for (chunk, outcome) in plan.chunks().iter().zip(report.outcomes.iter_mut()) {
            if matches!(outcome, Outcome::Submitted { .. }) {
                continue;
            }
            *outcome = Outcome::from_result(submit_logged(sink, chunk));
            if matches!(outcome, Outcome::Submitted { .. }) {
                accepted += 1;
            }
        }

        sink.finish(report)?;
        Ok(accepted)
    }
}

fn submit_logged<S: SpeechSink + ?Sized>(
    sink: &mut S,
    chunk: &Chunk,
) -> std::result::Result<Submission, SubmissionError> {
    let result = sink.submit(chunk);
    match &result {
        Ok(_) => info!(index = chunk.index, chars = chunk.char_count, "submitted chunk"),
        Err(e) => warn!(index = chunk.index, error = %e, "chunk submission failed"),
    }
    result
}
