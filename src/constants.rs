//! Tuning constants fixed by design.
//!
//! These are empirically chosen and must not be changed without re-running
//! regression tests against labeled transcripts; they are deliberately not
//! exposed as configuration, unlike the single `remove_fillers_flag` argument
//! to [`crate::pipeline::merge_results`].

/// Added to the previous speaker's overlap tally in stage 3, so a genuine
/// tie at a boundary resolves toward whoever was already speaking.
pub const CONTINUITY_BONUS_SECS: f64 = 0.08;

/// Stage-3 fallback: a word with no overlapping segment is assigned to the
/// nearest segment only if it's within this many seconds.
pub const FALLBACK_SEARCH_RADIUS_SECS: f64 = 2.0;

/// Stage 4: an inter-word gap at or above this is a "real" pause, not
/// boundary lag.
pub const SNAP_PAUSE_THRESHOLD_SECS: f64 = 0.3;

/// Stage 4: snap repair looks ahead at most this many words past the
/// boundary.
pub const SNAP_WORD_CAP: usize = 3;

/// Stage 4: snap repair gives up once the accumulated duration of the
/// scanned run reaches this many seconds.
pub const SNAP_DURATION_CAP_SECS: f64 = 2.0;

/// Stage 5: runs shorter than this (wall-clock) get merged into a neighbor.
pub const SHORT_RUN_THRESHOLD_SECS: f64 = 1.5;

/// Stage 6: an inter-word gap larger than this is itself a sentence-like
/// pause boundary.
pub const PAUSE_BOUNDARY_SECS: f64 = 1.0;

/// Stage 6 lookahead rule: how many words ahead to check for a speaker
/// change before allowing an early split.
pub const LOOKAHEAD_WORDS: usize = 3;

/// Stage 6 lookahead rule: the gap must exceed this to avoid splitting at
/// mid-phrase punctuation such as "Mr. Smith".
pub const LOOKAHEAD_GAP_SECS: f64 = 0.15;

/// Stage 6 safety cap: forces an emit once a segment would otherwise grow
/// past this many seconds.
pub const MAX_SEGMENT_DURATION_SECS: f64 = 30.0;

/// Characters treated as sentence enders by [`crate::types::WordTiming::is_sentence_end`].
pub const SENTENCE_ENDERS: [char; 3] = ['.', '!', '?'];

/// Fixed, non-configurable filler-word set. Deliberately narrow and
/// English-centric; see the "filler set localisation" open question in
/// the design notes.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "umm", "uhh", "hmm", "hm", "er", "ah", "erm", "eh", "mm",
];
