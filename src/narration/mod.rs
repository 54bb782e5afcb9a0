//! Narration orchestration.
//!
//! A [`Session`] calls the chunker once to build a [`Plan`], then feeds the
//! planned chunks in order to a [`SpeechSink`]. Driving an actual
//! text-to-speech web page is left to sink implementations outside this
//! crate; [`DirectorySink`] exports the chunks to disk instead.

pub mod session;
pub mod sink;

pub use session::{Outcome, Plan, Report, Session};
pub use sink::{
    DirectorySink, MANIFEST_FILE, Manifest, ManifestEntry, SpeechSink, Submission, VoiceSettings,
};
