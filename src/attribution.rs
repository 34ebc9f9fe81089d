//! Per-word speaker assignment by overlap with continuity bias.

use crate::constants::{CONTINUITY_BONUS_SECS, FALLBACK_SEARCH_RADIUS_SECS};
use crate::types::{AttributedWord, SpeakerId, SpeakerSegment, WordTiming};

/// Assigns a tentative speaker to each word using the diarization segments
/// and a continuity bias toward the previous word's speaker. Insertion
/// order (the order `segments` is given in) breaks ties deterministically.
pub fn assign_speakers(words: Vec<WordTiming>, segments: &[SpeakerSegment]) -> Vec<AttributedWord> {
    let mut out = Vec::with_capacity(words.len());
    let mut previous: Option<SpeakerId> = None;

    for word in words {
        let speaker = assign_one(&word, segments, previous.as_ref());
        if speaker.is_some() {
            previous = speaker.clone();
        }
        out.push(AttributedWord::new(word, speaker));
    }

    let unassigned = out.iter().filter(|w| w.speaker.is_none()).count();
    tracing::debug!("assigned speakers to {} words, {} left unassigned", out.len(), unassigned);
    out
}

fn assign_one(
    word: &WordTiming,
    segments: &[SpeakerSegment],
    previous: Option<&SpeakerId>,
) -> Option<SpeakerId> {
    // Accumulate overlap per speaker in insertion order so ties resolve
    // deterministically without depending on hash iteration order.
    let mut tallies: Vec<(SpeakerId, f64)> = Vec::new();
    for seg in segments {
        let overlap = seg.overlap(word.start, word.end);
        if overlap <= 0.0 {
            continue;
        }
        match tallies.iter_mut().find(|(id, _)| id == &seg.speaker_id) {
            Some((_, total)) => *total += overlap,
            None => tallies.push((seg.speaker_id.clone(), overlap)),
        }
    }

    if let Some(prev) = previous {
        if let Some((_, total)) = tallies.iter_mut().find(|(id, _)| id == prev) {
            *total += CONTINUITY_BONUS_SECS;
        }
    }

    if let Some((winner, _)) = tallies
        .iter()
        .fold(None::<&(SpeakerId, f64)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
    {
        return Some(winner.clone());
    }

    // Fallback: nearest segment to the word's midpoint, if within radius.
    let mid = word.midpoint();
    segments
        .iter()
        .min_by(|a, b| {
            a.distance_to(mid)
                .partial_cmp(&b.distance_to(mid))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .filter(|seg| seg.distance_to(mid) <= FALLBACK_SEARCH_RADIUS_SECS)
        .map(|seg| seg.speaker_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(word: &str, start: f64, end: f64) -> WordTiming {
        WordTiming { word: word.to_string(), start, end, confidence: 1.0 }
    }

    fn seg(id: &str, start: f64, end: f64) -> SpeakerSegment {
        SpeakerSegment { speaker_id: SpeakerId::new(id), start, end }
    }

    #[test]
    fn clear_majority_wins_regardless_of_continuity() {
        // B has 1.0s overlap, A has 0.2s: B wins even if previous was A.
        let segments = vec![seg("A", 0.0, 0.2), seg("B", 0.2, 1.2)];
        let word = w("word", 0.0, 1.2);
        let assigned = assign_one(&word, &segments, Some(&SpeakerId::new("A")));
        assert_eq!(assigned, Some(SpeakerId::new("B")));
    }

    #[test]
    fn continuity_bias_tips_genuine_tie() {
        // A:[0,5], B:[5,10], word [4.8, 5.2] => tie at 0.2s each.
        let segments = vec![seg("A", 0.0, 5.0), seg("B", 5.0, 10.0)];
        let word = w("word", 4.8, 5.2);
        let assigned = assign_one(&word, &segments, Some(&SpeakerId::new("A")));
        assert_eq!(assigned, Some(SpeakerId::new("A")));
    }

    #[test]
    fn no_overlap_falls_back_to_nearest_within_radius() {
        let segments = vec![seg("A", 0.0, 1.0)];
        let word = w("word", 2.0, 2.1); // midpoint 2.05, distance 1.05s < 2.0s radius
        let assigned = assign_one(&word, &segments, None);
        assert_eq!(assigned, Some(SpeakerId::new("A")));
    }

    #[test]
    fn no_overlap_beyond_radius_is_nil() {
        let segments = vec![seg("A", 0.0, 1.0)];
        let word = w("word", 10.0, 10.1); // midpoint 10.05, distance 9.05s
        assert_eq!(assign_one(&word, &segments, None), None);
    }

    #[test]
    fn no_segments_at_all_is_nil() {
        assert_eq!(assign_one(&w("word", 0.0, 1.0), &[], None), None);
    }

    #[test]
    fn previous_speaker_carries_forward_across_nil_words() {
        let segments = vec![seg("A", 0.0, 0.3), seg("B", 10.0, 10.3)];
        let words = vec![w("one", 0.0, 0.2), w("gap", 5.0, 5.1), w("two", 10.0, 10.2)];
        let out = assign_speakers(words, &segments);
        assert_eq!(out[0].speaker, Some(SpeakerId::new("A")));
        assert_eq!(out[2].speaker, Some(SpeakerId::new("B")));
    }
}
