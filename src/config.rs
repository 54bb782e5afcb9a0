//! Narration configuration.
//!
//! All defaults live here rather than inside the chunker: the chunker only
//! receives a limit and a word-break policy. Values are layered as
//! defaults, then an optional JSON file, then CLI flags and environment
//! variables (applied by the CLI layer).

use crate::chunking::{DEFAULT_MAX_CHARS, SpeechChunker, WordBreak};
use crate::error::{Error, IoError, Result};
use crate::io::read_file;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name prefix for written chunks.
pub const DEFAULT_OUTPUT_PREFIX: &str = "chunk";

/// Settings for one narration job.
///
/// # Examples
///
/// ```
/// use speech_chunker::config::NarrationConfig;
///
/// let config = NarrationConfig::default().max_chars(500).voice("ballad");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarrationConfig {
    /// Maximum chunk length in characters.
    pub max_chars: usize,

    /// Word-break policy used when no paragraph or sentence break fits.
    pub word_break: WordBreak,

    /// Voice name passed to the speech sink.
    pub voice: Option<String>,

    /// Free-form delivery instructions passed to the speech sink.
    pub vibe: Option<String>,

    /// Prefix for chunk file names.
    pub output_prefix: String,

    /// Stop the run at the first failed chunk.
    pub stop_on_failure: bool,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            word_break: WordBreak::default(),
            voice: None,
            vibe: None,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            stop_on_failure: false,
        }
    }
}

impl NarrationConfig {
    /// Loads a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = read_file(path_ref)?;
        serde_json::from_str(&content).map_err(|e| {
            IoError::ReadFailed {
                path: path_ref.to_string_lossy().to_string(),
                reason: format!("invalid config: {e}"),
            }
            .into()
        })
    }

    /// Checks that the configuration can drive a job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero limit, or an output prefix that is
    /// empty or contains a path separator.
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(Error::Config {
                message: "max_chars must be greater than zero".to_string(),
            });
        }
        if self.output_prefix.trim().is_empty() {
            return Err(Error::Config {
                message: "output_prefix must not be empty".to_string(),
            });
        }
        // Chunk files are joined under the output directory
        if self.output_prefix.contains(['/', '\\']) {
            return Err(Error::Config {
                message: format!(
                    "output_prefix must be a file name, got {:?}",
                    self.output_prefix
                ),
            });
        }
        Ok(())
    }

    /// Builds the chunker described by this configuration.
    #[must_use]
    pub const fn chunker(&self) -> SpeechChunker {
        SpeechChunker::with_limit(self.max_chars).word_break(self.word_break)
    }

    /// Sets the character limit.
    #[must_use]
    pub const fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Sets the word-break policy.
    #[must_use]
    pub const fn word_break(mut self, word_break: WordBreak) -> Self {
        self.word_break = word_break;
        self
    }

    /// Sets the voice.
    #[must_use]
    pub fn voice(mut self, voice: &str) -> Self {
        self.voice = Some(voice.to_string());
        self
    }

    /// Sets the vibe.
    #[must_use]
    pub fn vibe(mut self, vibe: &str) -> Self {
        self.vibe = Some(vibe.to_string());
        self
    }

    /// Sets the output file prefix.
    #[must_use]
    pub fn output_prefix(mut self, prefix: &str) -> Self {
        self.output_prefix = prefix.to_string();
        self
    }

    /// Sets whether a failed chunk stops the run.
    #[must_use]
    pub const fn stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::Chunker;
    use tempfile::TempDir;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = NarrationConfig::default();
        assert_eq!(config.max_chars, DEFAULT_MAX_CHARS);
        assert_eq!(config.word_break, WordBreak::Whitespace);
        assert_eq!(config.output_prefix, "chunk");
        assert!(config.voice.is_none());
        assert!(!config.stop_on_failure);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NarrationConfig::default()
            .max_chars(200)
            .word_break(WordBreak::Space)
            .voice("sage")
            .vibe("calm, slow")
            .output_prefix("part")
            .stop_on_failure(true);

        assert_eq!(config.max_chars, 200);
        assert_eq!(config.voice.as_deref(), Some("sage"));
        assert_eq!(config.vibe.as_deref(), Some("calm, slow"));
        assert_eq!(config.output_prefix, "part");
        assert!(config.stop_on_failure);

        let chunker = config.chunker();
        assert_eq!(chunker.max_chars(), 200);
        assert_eq!(chunker.word_break_policy(), WordBreak::Space);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let err = NarrationConfig::default().max_chars(0).validate().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("max_chars"));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let err = NarrationConfig::default()
            .output_prefix("  ")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("output_prefix"));
    }

    #[test_case("../../escaped" ; "parent traversal")]
    #[test_case("sub/chunk" ; "nested path")]
    #[test_case("..\\chunk" ; "windows separator")]
    fn test_validate_rejects_path_prefix(prefix: &str) {
        let err = NarrationConfig::default()
            .output_prefix(prefix)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("must be a file name"));
    }

    #[test]
    fn test_from_file_path_prefix_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("narrate.json");
        std::fs::write(&path, r#"{"output_prefix": "../../escaped"}"#).unwrap();

        let config = NarrationConfig::from_file(&path).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("narrate.json");
        std::fs::write(&path, r#"{"max_chars": 400, "word_break": "space", "voice": "ash"}"#)
            .unwrap();

        let config = NarrationConfig::from_file(&path).unwrap();
        assert_eq!(config.max_chars, 400);
        assert_eq!(config.word_break, WordBreak::Space);
        assert_eq!(config.voice.as_deref(), Some("ash"));
        assert_eq!(config.output_prefix, DEFAULT_OUTPUT_PREFIX);
    }

    #[test]
    fn test_from_file_unknown_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("narrate.json");
        std::fs::write(&path, r#"{"max_char": 400}"#).unwrap();

        let err = NarrationConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(NarrationConfig::from_file("/nonexistent/narrate.json").is_err());
    }
}
