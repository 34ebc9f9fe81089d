//! Filler removal, optional and disabled by default.

use crate::constants::FILLER_WORDS;
use crate::types::WordTiming;

/// Removes words whose normalized form is in the fixed filler set.
/// Normalization case-folds and strips leading/trailing punctuation and
/// symbol characters.
pub fn remove_fillers(words: Vec<WordTiming>) -> Vec<WordTiming> {
    let before = words.len();
    let kept: Vec<WordTiming> = words.into_iter().filter(|w| !is_filler(&w.word)).collect();
    tracing::debug!("removed {} filler words, {} remaining", before - kept.len(), kept.len());
    kept
}

fn is_filler(word: &str) -> bool {
    FILLER_WORDS.contains(&normalize(word).as_str())
}

fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace()))
        .to_lowercase()
}
