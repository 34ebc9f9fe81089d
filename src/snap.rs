//! Snap transitions to pauses.
//!
//! Repairs boundary-lagged speaker assignments in place: when a diarized
//! speaker change lands where the ASR timing shows continuous speech, the
//! boundary is probably early by a word or two. This looks ahead for the
//! first real pause in the new speaker's run and moves the boundary there.

use crate::constants::{SNAP_DURATION_CAP_SECS, SNAP_PAUSE_THRESHOLD_SECS, SNAP_WORD_CAP};
use crate::types::AttributedWord;

/// Mutates `words` in place. Never creates or removes entries.
pub fn snap_to_pauses(words: &mut [AttributedWord]) {
    let n = words.len();
    if n < 2 {
        return;
    }

    let mut snapped = 0usize;
    let mut i = 1;
    while i < n {
        let prev_speaker = words[i - 1].speaker.clone();
        let cur_speaker = words[i].speaker.clone();

        let (Some(prev_speaker), Some(cur_speaker)) = (prev_speaker, cur_speaker) else {
            i += 1;
            continue;
        };
        if prev_speaker == cur_speaker {
            i += 1;
            continue;
        }

        let gap = words[i].word.start - words[i - 1].word.end;
        if gap >= SNAP_PAUSE_THRESHOLD_SECS {
            i += 1;
            continue;
        }

        // Scan forward for the snap point: the first real pause while the
        // run still belongs to the incoming speaker, bounded by word and
        // duration caps.
        let mut duration = words[i].word.duration();
        let mut snap_point = None;
        let mut j = i + 1;
        while j < n && (j - i) <= SNAP_WORD_CAP && duration < SNAP_DURATION_CAP_SECS {
            if words[j].speaker.as_ref() != Some(&cur_speaker) {
                break;
            }
            let inner_gap = words[j].word.start - words[j - 1].word.end;
            if inner_gap >= SNAP_PAUSE_THRESHOLD_SECS {
                snap_point = Some(j);
                break;
            }
            duration += words[j].word.duration();
            j += 1;
        }

        if let Some(j) = snap_point {
            for word in &mut words[i..j] {
                word.speaker = Some(prev_speaker.clone());
            }
            snapped += j - i;
            i = j + 1;
        } else {
            i += 1;
        }
    }

    if snapped > 0 {
        tracing::trace!("snapped {} boundary-lagged words back to the previous speaker", snapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SpeakerId, WordTiming};

    fn aw(word: &str, start: f64, end: f64, speaker: &str) -> AttributedWord {
        AttributedWord::new(
            WordTiming { word: word.to_string(), start, end, confidence: 1.0 },
            Some(SpeakerId::new(speaker)),
        )
    }

    #[test]
    fn snap_repair_moves_boundary_to_the_next_real_pause() {
        // Words (speaker pre-assigned): у/него A, ограниченный B, у/меня B.
        // Gap 10.6->10.68 is 0.08s (continuous); gap 11.7->12.1 is 0.4s (real pause).
        let mut words = vec![
            aw("у", 10.0, 10.2, "A"),
            aw("него", 10.3, 10.6, "A"),
            aw("ограниченный", 10.68, 11.7, "B"),
            aw("у", 12.1, 12.2, "B"),
            aw("меня", 12.3, 12.5, "B"),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(words[2].speaker, Some(SpeakerId::new("A")));
        assert_eq!(words[3].speaker, Some(SpeakerId::new("B")));
        assert_eq!(words[4].speaker, Some(SpeakerId::new("B")));
    }

    #[test]
    fn real_pause_at_boundary_is_left_untouched() {
        let mut words = vec![
            aw("hello", 0.0, 0.3, "A"),
            aw("world", 1.0, 1.3, "B"), // gap 0.7s >= 0.3s threshold
        ];
        let before = words.clone();
        snap_to_pauses(&mut words);
        assert_eq!(words, before);
    }

    #[test]
    fn caps_prevent_runaway_reattribution() {
        // A long run with no internal pauses beyond the caps stays mostly B.
        let mut words = vec![aw("a", 0.0, 0.1, "A")];
        let mut t = 0.1;
        for i in 0..10 {
            words.push(aw(&format!("w{i}"), t, t + 0.4, "B"));
            t += 0.4; // back-to-back, no pause
        }
        snap_to_pauses(&mut words);
        // At most SNAP_WORD_CAP words get reattributed near the boundary.
        let reattributed = words.iter().filter(|w| w.speaker == Some(SpeakerId::new("A"))).count();
        assert!(reattributed <= 1 + SNAP_WORD_CAP);
    }

    #[test]
    fn nil_speakers_are_skipped() {
        let mut words = vec![
            AttributedWord::new(WordTiming { word: "a".into(), start: 0.0, end: 0.1, confidence: 1.0 }, None),
            AttributedWord::new(WordTiming { word: "b".into(), start: 0.1, end: 0.2, confidence: 1.0 }, None),
        ];
        let before = words.clone();
        snap_to_pauses(&mut words);
        assert_eq!(words, before);
    }

    #[test]
    fn fixed_point_running_twice_equals_running_once() {
        let mut words = vec![
            aw("у", 10.0, 10.2, "A"),
            aw("него", 10.3, 10.6, "A"),
            aw("ограниченный", 10.68, 11.7, "B"),
            aw("у", 12.1, 12.2, "B"),
            aw("меня", 12.3, 12.5, "B"),
        ];
        snap_to_pauses(&mut words);
        let once = words.clone();
        snap_to_pauses(&mut words);
        assert_eq!(words, once);
    }
}
