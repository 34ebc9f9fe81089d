//! Core data model shared by every pipeline stage.
//!
//! Types here carry no behavior beyond small accessors; the algorithms live
//! in the stage modules. Everything is plain-old-data so it can be
//! constructed freely in tests and fixtures.

use crate::constants::SENTENCE_ENDERS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, diarizer-assigned speaker identity.
///
/// A thin newtype rather than a bare `String` so call sites can't
/// accidentally compare a speaker id against an arbitrary piece of text.
/// Cheap to clone, hashes and orders by the wrapped string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeakerId(pub String);

impl SpeakerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpeakerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SpeakerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An indivisible ASR unit: one subword token with its own timing and
/// confidence. `token` may begin with whitespace, SentencePiece-style,
/// which marks the start of a new word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTiming {
    pub token: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f32,
}

impl TokenTiming {
    pub fn starts_new_word(&self) -> bool {
        self.token
            .chars()
            .next()
            .map(|c| c == ' ' || c == '\n' || c == '\t')
            .unwrap_or(false)
    }
}

/// A whole word with an aggregated span, produced by the token→word merge
/// stage. `word` never carries leading whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f32,
}

impl WordTiming {
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// True if the word's last character is a sentence-ending mark.
    pub fn is_sentence_end(&self) -> bool {
        self.word.chars().last().is_some_and(|c| SENTENCE_ENDERS.contains(&c))
    }
}

/// Diarizer output: one time-stamped, speaker-labeled span. Segments may
/// overlap and need not cover the full timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    pub speaker_id: SpeakerId,
    pub start: f64,
    pub end: f64,
}

impl SpeakerSegment {
    /// Length of the intersection with `[start, end]`, clamped at zero.
    pub fn overlap(&self, start: f64, end: f64) -> f64 {
        (self.end.min(end) - self.start.max(start)).max(0.0)
    }

    /// Distance from `t` to the nearest point of this segment; zero if `t`
    /// falls inside `[start, end]`.
    pub fn distance_to(&self, t: f64) -> f64 {
        if t < self.start {
            self.start - t
        } else if t > self.end {
            t - self.end
        } else {
            0.0
        }
    }
}

/// A word plus its tentative speaker assignment. `speaker` is `None` when
/// no diarization segment was close enough to assign one. Mutated in place
/// by stages 3 through 5, then frozen before stage 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedWord {
    pub word: WordTiming,
    pub speaker: Option<SpeakerId>,
}

impl AttributedWord {
    pub fn new(word: WordTiming, speaker: Option<SpeakerId>) -> Self {
        Self { word, speaker }
    }
}

/// One contiguous, speaker-attributed stretch of transcript, as handed to
/// the caller. Consecutive segments never overlap in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SpeakerId>,
}

/// ASR collaborator's output: the interface this crate consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsrResult {
    /// Used only as the trivial-segment fallback text when no token
    /// timings are available.
    pub text: String,
    pub duration: f64,
    pub token_timings: Option<Vec<TokenTiming>>,
}

/// Diarization collaborator's output: the interface this crate consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiarizationResult {
    pub segments: Vec<SpeakerSegment>,
}
