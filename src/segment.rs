//! Sentence-aware segment grouping, plus the diarization-free grouping
//! codepath used when no speaker segments are available.

use crate::constants::{LOOKAHEAD_GAP_SECS, LOOKAHEAD_WORDS, MAX_SEGMENT_DURATION_SECS, PAUSE_BOUNDARY_SECS};
use crate::types::{AttributedWord, SpeakerId, TranscriptSegment, WordTiming};

/// Groups the final attributed word sequence into ordered transcript
/// segments aligned to sentence boundaries and speaker changes.
pub fn group_into_segments(words: &[AttributedWord]) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();
    let mut acc_start: usize = 0; // index of the first word in the accumulator
    let mut last_speaker_change: usize = 0; // index *within the accumulator* (0 = none recorded)

    let mut i = 0;
    while i < words.len() {
        let acc_len = i - acc_start + 1; // length of the accumulator after including word i

        // Track the accumulator-relative index of the last speaker change.
        if i > acc_start && words[i].speaker != words[i - 1].speaker {
            last_speaker_change = acc_len - 1;
        }

        let has_next = i + 1 < words.len();
        let sentence_end = words[i].word.is_sentence_end();
        let pause = has_next && (words[i + 1].word.start - words[i].word.end) > PAUSE_BOUNDARY_SECS;
        let boundary = sentence_end || pause;
        let speaker_change_next = has_next && words[i + 1].speaker != words[i].speaker;

        if boundary && speaker_change_next {
            segments.push(build_segment(&words[acc_start..=i]));
            acc_start = i + 1;
            last_speaker_change = 0;
            i += 1;
            continue;
        }

        if boundary && !speaker_change_next && has_next {
            let gap = words[i + 1].word.start - words[i].word.end;
            let lookahead_end = (i + 1 + LOOKAHEAD_WORDS).min(words.len());
            let speaker_changes_soon = words[i + 1..lookahead_end]
                .iter()
                .any(|w| w.speaker != words[i].speaker);
            if gap > LOOKAHEAD_GAP_SECS && speaker_changes_soon {
                segments.push(build_segment(&words[acc_start..=i]));
                acc_start = i + 1;
                last_speaker_change = 0;
                i += 1;
                continue;
            }
        }

        // Safety cap: force an emit at the last known speaker change once
        // the accumulator would otherwise grow too long.
        let acc_duration = words[i].word.end - words[acc_start].word.start;
        if acc_duration >= MAX_SEGMENT_DURATION_SECS && last_speaker_change > 0 {
            let split_at = acc_start + last_speaker_change;
            segments.push(build_segment(&words[acc_start..split_at]));
            acc_start = split_at;
            last_speaker_change = find_last_speaker_change(&words[acc_start..=i]);
        }

        i += 1;
    }

    if acc_start < words.len() {
        segments.push(build_segment(&words[acc_start..]));
    }

    tracing::debug!("grouped {} words into {} segments", words.len(), segments.len());
    segments
}

fn find_last_speaker_change(words: &[AttributedWord]) -> usize {
    let mut last = 0;
    for i in 1..words.len() {
        if words[i].speaker != words[i - 1].speaker {
            last = i;
        }
    }
    last
}

fn build_segment(words: &[AttributedWord]) -> TranscriptSegment {
    debug_assert!(!words.is_empty());

    let start = words.first().map(|w| w.word.start).unwrap_or(0.0);
    let end = words.last().map(|w| w.word.end).unwrap_or(start);
    let text = words
        .iter()
        .map(|w| w.word.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let speaker = majority_speaker(words);

    TranscriptSegment { start, end, text, speaker }
}

fn majority_speaker(words: &[AttributedWord]) -> Option<SpeakerId> {
    let mut tallies: Vec<(SpeakerId, f64)> = Vec::new();
    for w in words {
        let Some(speaker) = &w.speaker else { continue };
        let dur = w.word.duration();
        match tallies.iter_mut().find(|(id, _)| id == speaker) {
            Some((_, total)) => *total += dur,
            None => tallies.push((speaker.clone(), dur)),
        }
    }
    tallies
        .into_iter()
        .fold(None::<(SpeakerId, f64)>, |best, entry| match &best {
            Some(b) if b.1 >= entry.1 => best,
            _ => Some(entry),
        })
        .map(|(id, _)| id)
}

/// Grouping used when no diarization result is supplied. Groups plain
/// words by sentence boundary or pause alone, with no speaker-change gate;
/// every segment has a nil speaker.
pub fn group_without_speakers(words: &[WordTiming]) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();
    let mut acc_start = 0;

    for i in 0..words.len() {
        let has_next = i + 1 < words.len();
        let sentence_end = words[i].is_sentence_end();
        let pause = has_next && (words[i + 1].start - words[i].end) > PAUSE_BOUNDARY_SECS;

        if sentence_end || pause {
            segments.push(build_nil_segment(&words[acc_start..=i]));
            acc_start = i + 1;
        }
    }

    if acc_start < words.len() {
        segments.push(build_nil_segment(&words[acc_start..]));
    }

    segments
}

fn build_nil_segment(words: &[WordTiming]) -> TranscriptSegment {
    let start = words.first().map(|w| w.start).unwrap_or(0.0);
    let end = words.last().map(|w| w.end).unwrap_or(start);
    let text = words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>().join(" ");
    TranscriptSegment { start, end, text, speaker: None }
}
