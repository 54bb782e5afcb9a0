//! Speech sinks: where chunks go once they are planned.
//!
//! A sink stands in for the external text-to-speech UI. Each chunk is one
//! atomic submission; a sink reports per-chunk failure through
//! [`SubmissionError`] and never alters the chunk it was given.

use crate::core::{Boundary, Chunk};
use crate::error::{Result, SubmissionError};
use crate::io::{chunk_file_name, is_chunk_file_name, write_file};
use crate::narration::session::Report;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the manifest written by [`DirectorySink`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// Voice settings handed to a sink before the first submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice name.
    pub voice: Option<String>,
    /// Delivery instructions.
    pub vibe: Option<String>,
    /// Character limit the chunks were cut to.
    pub max_chars: usize,
}

/// Receipt for an accepted chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Index of the submitted chunk.
    pub index: usize,
    /// Where the sink put the result (file path, URL, ...), if anywhere.
    pub location: Option<String>,
}

/// Destination for planned chunks.
pub trait SpeechSink {
    /// Called once per run before any chunk is submitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be prepared; the run is aborted.
    fn begin(&mut self, _settings: &VoiceSettings) -> Result<()> {
        Ok(())
    }

    /// Submits one chunk.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if this chunk was not accepted. The
    /// caller may resubmit the same chunk later.
    fn submit(&mut self, chunk: &Chunk) -> std::result::Result<Submission, SubmissionError>;

    /// Called after a run or resubmission pass with the current report.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot finalize its output.
    fn finish(&mut self, _report: &Report) -> Result<()> {
        Ok(())
    }
}

/// One chunk as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Chunk index.
    pub index: usize,
    /// File name inside the output directory.
    pub file: String,
    /// Chunk length in characters.
    pub char_count: usize,
    /// Rule that ended the chunk.
    pub boundary: Boundary,
}

/// Summary of a directory export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Voice settings of the run.
    pub settings: VoiceSettings,
    /// Number of chunks in the plan.
    pub total_chunks: usize,
    /// Indices of chunks the sink rejected.
    pub failed: Vec<usize>,
    /// Indices of chunks never attempted after an earlier failure.
    #[serde(default)]
    pub skipped: Vec<usize>,
    /// Written chunks, in index order.
    pub entries: Vec<ManifestEntry>,
}

/// Sink that writes each chunk to `{prefix}_{index:04}.txt` in a directory
/// and a `manifest.json` alongside them.
///
/// Each run starts by deleting `{prefix}_*.txt` chunk files already in the
/// directory, so a shorter run never leaves files from a longer one behind.
///
/// # Examples
///
/// ```no_run
/// use speech_chunker::config::NarrationConfig;
/// use speech_chunker::narration::{DirectorySink, Session};
///
/// let session = Session::new(NarrationConfig::default()).unwrap();
/// let plan = session.plan("Some long text.").unwrap();
/// let mut sink = DirectorySink::new("out", "chunk");
/// let report = session.run(&plan, &mut sink).unwrap();
/// assert!(report.is_complete());
/// ```
#[derive(Debug)]
pub struct DirectorySink {
    out_dir: PathBuf,
    prefix: String,
    settings: VoiceSettings,
    entries: BTreeMap<usize, ManifestEntry>,
}

impl DirectorySink {
    /// Creates a sink writing into `out_dir` with the given file prefix.
    pub fn new<P: AsRef<Path>>(out_dir: P, prefix: &str) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            settings: VoiceSettings::default(),
            entries: BTreeMap::new(),
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the paths of all chunk files written so far, in index order.
    #[must_use]
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.entries
            .values()
            .map(|entry| self.out_dir.join(&entry.file))
            .collect()
    }

    /// Returns the manifest path.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE)
    }

    /// Deletes chunk files with this sink's prefix left by an earlier run.
    /// Returns the number of files removed.
    fn remove_stale_chunks(&self) -> Result<usize> {
        if !self.out_dir.is_dir() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in std::fs::read_dir(&self.out_dir)? {
            let path = entry?.path();
            let is_stale = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| is_chunk_file_name(&self.prefix, name));
            if is_stale && path.is_file() {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }

        if removed > 0 {
            info!(removed, dir = %self.out_dir.display(), "removed stale chunk files");
        }
        Ok(removed)
    }
}

impl SpeechSink for DirectorySink {
    fn begin(&mut self, settings: &VoiceSettings) -> Result<()> {
        self.settings = settings.clone();
        self.entries.clear();
        self.remove_stale_chunks()?;
        Ok(())
    }

    fn submit(&mut self, chunk: &Chunk) -> std::result::Result<Submission, SubmissionError> {
        let file = chunk_file_name(&self.prefix, chunk.index);
        let path = self.out_dir.join(&file);

        write_file(&path, &chunk.content).map_err(|e| SubmissionError::Rejected {
            index: chunk.index,
            reason: e.to_string(),
        })?;

        self.entries.insert(
            chunk.index,
            ManifestEntry {
                index: chunk.index,
                file,
                char_count: chunk.char_count,
                boundary: chunk.boundary,
            },
        );

        Ok(Submission {
            index: chunk.index,
            location: Some(path.to_string_lossy().to_string()),
        })
    }

    fn finish(&mut self, report: &Report) -> Result<()> {
        let manifest = Manifest {
            settings: self.settings.clone(),
            total_chunks: report.len(),
            failed: report.failed_indices(),
            skipped: report.skipped_indices(),
            entries: self.entries.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        write_file(self.manifest_path(), &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NarrationConfig;
    use crate::narration::Session;
    use tempfile::TempDir;

    const TEXT: &str = "First sentence here. Second sentence here. Third sentence here.";

    #[test]
    fn test_directory_sink_writes_chunk_file() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("chunks");
        let mut sink = DirectorySink::new(&out_dir, "part");

        let chunk = Chunk::new(3, "Hello there.".to_string(), 0..12, Boundary::Sentence);
        let submission = sink.submit(&chunk).unwrap();

        assert_eq!(submission.index, 3);
        let path = out_dir.join("part_0003.txt");
        assert_eq!(submission.location, Some(path.to_string_lossy().to_string()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello there.");
        assert_eq!(sink.written_paths(), vec![path]);
    }

    #[test]
    fn test_directory_sink_rejects_unwritable_target() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the output directory should be
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let mut sink = DirectorySink::new(&blocker, "chunk");

        let chunk = Chunk::new(0, "text".to_string(), 0..4, Boundary::End);
        let err = sink.submit(&chunk).unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { index: 0, .. }));
    }

    #[test]
    fn test_run_removes_stale_chunk_files() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("chunks");
        std::fs::create_dir_all(&out_dir).unwrap();
        std::fs::write(out_dir.join("chunk_0007.txt"), "old").unwrap();
        std::fs::write(out_dir.join("part_0007.txt"), "other prefix").unwrap();
        std::fs::write(out_dir.join("notes.txt"), "keep").unwrap();

        let session = Session::new(NarrationConfig::default().max_chars(25)).unwrap();
        let plan = session.plan(TEXT).unwrap();
        let mut sink = DirectorySink::new(&out_dir, "chunk");
        let report = session.run(&plan, &mut sink).unwrap();

        assert!(report.is_complete());
        assert!(out_dir.join("chunk_0002.txt").exists());
        assert!(!out_dir.join("chunk_0007.txt").exists());
        assert!(out_dir.join("part_0007.txt").exists());
        assert!(out_dir.join("notes.txt").exists());
    }

    #[test]
    fn test_manifest_lists_skipped_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("chunks");
        // A directory in place of the first chunk file makes its write fail
        std::fs::create_dir_all(out_dir.join("chunk_0000.txt")).unwrap();

        let session = Session::new(
            NarrationConfig::default()
                .max_chars(25)
                .stop_on_failure(true),
        )
        .unwrap();
        let plan = session.plan(TEXT).unwrap();
        assert_eq!(plan.len(), 3);

        let mut sink = DirectorySink::new(&out_dir, "chunk");
        let report = session.run(&plan, &mut sink).unwrap();
        assert_eq!(report.skipped_indices(), vec![1, 2]);

        let manifest: Manifest =
            serde_json::from_str(&std::fs::read_to_string(sink.manifest_path()).unwrap()).unwrap();
        assert_eq!(manifest.total_chunks, 3);
        assert_eq!(manifest.failed, vec![0]);
        assert_eq!(manifest.skipped, vec![1, 2]);
        assert!(manifest.entries.is_empty());
    }
}
