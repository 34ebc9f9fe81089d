//! Speaker-attribution and sentence-aware segmentation for transcribed
//! audio: converts time-stamped ASR tokens plus optional diarization
//! segments into a clean, per-speaker transcript.
//!
//! The entry point is [`merge_results`]. Everything upstream (audio
//! capture, ASR inference, diarization inference) and downstream
//! (transcript formatting) is out of scope; see the crate's design notes.

pub mod attribution;
pub mod constants;
pub mod error;
pub mod filler;
pub mod pipeline;
pub mod segment;
pub mod smoothing;
pub mod snap;
pub mod token_merge;
pub mod types;

pub use error::{PipelineError, Result};
pub use pipeline::merge_results;
pub use types::{
    AsrResult, AttributedWord, DiarizationResult, SpeakerId, SpeakerSegment, TokenTiming,
    TranscriptSegment, WordTiming,
};
