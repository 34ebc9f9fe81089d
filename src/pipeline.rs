//! Top-level pipeline orchestration: wires the six stages together behind
//! a single entry point, `merge_results`.

use crate::attribution::assign_speakers;
use crate::filler::remove_fillers;
use crate::segment::{group_into_segments, group_without_speakers};
use crate::smoothing::smooth;
use crate::snap::snap_to_pauses;
use crate::token_merge::merge_tokens;
use crate::types::{AsrResult, DiarizationResult, TranscriptSegment};

/// Runs the full pipeline: token→word merge, optional filler removal,
/// per-word speaker assignment, snap repair, smoothing, and sentence-aware
/// grouping. Total — never fails, never panics on malformed input.
pub fn merge_results(
    asr_result: &AsrResult,
    diarization_result: Option<&DiarizationResult>,
    remove_fillers_flag: bool,
) -> Vec<TranscriptSegment> {
    let Some(token_timings) = asr_result.token_timings.as_ref().filter(|t| !t.is_empty()) else {
        tracing::debug!("no token timings; returning trivial fallback segment");
        return vec![trivial_segment(asr_result.text.trim().to_string(), asr_result.duration)];
    };

    let mut words = merge_tokens(token_timings);
    if remove_fillers_flag {
        words = remove_fillers(words);
    }
    if words.is_empty() {
        tracing::debug!("word list empty after filler removal; returning empty fallback segment");
        return vec![trivial_segment(String::new(), asr_result.duration)];
    }

    let Some(diarization) = diarization_result.filter(|d| !d.segments.is_empty()) else {
        tracing::debug!("no diarization result; using degenerate sentence/pause grouping");
        return group_without_speakers(&words);
    };

    let mut attributed = assign_speakers(words, &diarization.segments);
    snap_to_pauses(&mut attributed);
    smooth(&mut attributed);
    group_into_segments(&attributed)
}

fn trivial_segment(text: String, duration: f64) -> TranscriptSegment {
    TranscriptSegment { start: 0.0, end: duration, text, speaker: None }
}
