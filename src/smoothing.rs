//! Nil-speaker absorption and short-run smoothing.
//!
//! Pure post-hoc refinements on the attributed word sequence. Absorption
//! fills gaps left by stage 3's fallback; short-run smoothing removes
//! backchannel-sized speaker flickers.

use crate::constants::SHORT_RUN_THRESHOLD_SECS;
use crate::types::{AttributedWord, SpeakerId};

/// Runs absorption followed by iterative short-run smoothing.
pub fn smooth(words: &mut Vec<AttributedWord>) {
    absorb_nil_speakers(words);
    merge_short_runs(words);
}

/// For each nil-speaker word, assigns the temporally nearer non-nil
/// neighbor. Ties favor the backward neighbor. Words with no non-nil
/// neighbor on either side stay nil.
pub fn absorb_nil_speakers(words: &mut [AttributedWord]) {
    let n = words.len();
    let mut absorbed = 0usize;
    for i in 0..n {
        if words[i].speaker.is_some() {
            continue;
        }

        let left = (0..i).rev().find(|&k| words[k].speaker.is_some());
        let right = (i + 1..n).find(|&k| words[k].speaker.is_some());

        let chosen: Option<SpeakerId> = match (left, right) {
            (Some(l), Some(r)) => {
                let dist_l = words[i].word.start - words[l].word.end;
                let dist_r = words[r].word.start - words[i].word.end;
                if dist_r < dist_l {
                    words[r].speaker.clone()
                } else {
                    words[l].speaker.clone()
                }
            }
            (Some(l), None) => words[l].speaker.clone(),
            (None, Some(r)) => words[r].speaker.clone(),
            (None, None) => None,
        };

        if chosen.is_some() {
            absorbed += 1;
            words[i].speaker = chosen;
        }
    }
    if absorbed > 0 {
        tracing::trace!("absorbed {} nil-speaker words into their nearest neighbor", absorbed);
    }
}

struct Run {
    start_idx: usize,
    end_idx: usize, // exclusive
    speaker: Option<SpeakerId>,
}

impl Run {
    fn duration(&self, words: &[AttributedWord]) -> f64 {
        words[self.end_idx - 1].word.end - words[self.start_idx].word.start
    }
}

fn build_runs(words: &[AttributedWord]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let speaker = words[i].speaker.clone();
        let mut j = i + 1;
        while j < words.len() && words[j].speaker == speaker {
            j += 1;
        }
        runs.push(Run { start_idx: i, end_idx: j, speaker });
        i = j;
    }
    runs
}

/// Iteratively merges the shortest run into the longer adjacent neighbor
/// until every run is at or above the threshold, or only one run remains.
pub fn merge_short_runs(words: &mut [AttributedWord]) {
    loop {
        let runs = build_runs(words);
        if runs.len() <= 1 {
            break;
        }

        let (shortest_idx, shortest) = runs
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.duration(words)
                    .partial_cmp(&b.duration(words))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("runs is non-empty");

        if shortest.duration(words) >= SHORT_RUN_THRESHOLD_SECS {
            break;
        }

        let target_idx = if shortest_idx == 0 {
            1
        } else if shortest_idx == runs.len() - 1 {
            runs.len() - 2
        } else {
            let prev = &runs[shortest_idx - 1];
            let next = &runs[shortest_idx + 1];
            if next.duration(words) > prev.duration(words) {
                shortest_idx + 1
            } else {
                shortest_idx - 1
            }
        };

        let new_speaker = runs[target_idx].speaker.clone();
        for word in &mut words[shortest.start_idx..shortest.end_idx] {
            word.speaker = new_speaker.clone();
        }
        tracing::trace!(
            "merged a short run of {} words into the longer neighboring run",
            shortest.end_idx - shortest.start_idx
        );
    }
}
