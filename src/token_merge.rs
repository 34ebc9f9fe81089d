//! Token → word merge.
//!
//! A token beginning with whitespace opens a new word; subsequent tokens
//! extend it. SentencePiece-style boundary detection is opportunistic, not
//! required — a stream that begins mid-word still yields a leading word.

use crate::types::{TokenTiming, WordTiming};

/// Merges an ordered token sequence into whole words with averaged
/// confidence. Empty input produces empty output.
pub fn merge_tokens(tokens: &[TokenTiming]) -> Vec<WordTiming> {
    let mut words = Vec::new();
    let mut current: Vec<&TokenTiming> = Vec::new();

    for tok in tokens {
        if tok.starts_new_word() && !current.is_empty() {
            words.push(finish_word(&current));
            current.clear();
        }
        current.push(tok);
    }
    if !current.is_empty() {
        words.push(finish_word(&current));
    }

    tracing::debug!("merged {} tokens into {} words", tokens.len(), words.len());
    words
}

fn finish_word(tokens: &[&TokenTiming]) -> WordTiming {
    debug_assert!(!tokens.is_empty());

    let start = tokens.first().map(|t| t.start).unwrap_or(0.0);
    let end = tokens.last().map(|t| t.end).unwrap_or(start);

    let mut text = String::new();
    for tok in tokens {
        text.push_str(&tok.token);
    }
    let word = text.trim_start_matches([' ', '\n', '\t']).to_string();

    let confidence = if tokens.is_empty() {
        0.0
    } else {
        tokens.iter().map(|t| t.confidence).sum::<f32>() / tokens.len() as f32
    };

    WordTiming { word, start, end, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(token: &str, start: f64, end: f64, confidence: f32) -> TokenTiming {
        TokenTiming { token: token.to_string(), start, end, confidence }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_tokens(&[]).is_empty());
    }

    #[test]
    fn single_token_word() {
        let words = merge_tokens(&[tok(" hi", 0.0, 0.2, 0.9)]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "hi");
        assert_eq!(words[0].start, 0.0);
        assert_eq!(words[0].end, 0.2);
        assert!((words[0].confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn subword_tokens_merge_into_one_word() {
        let words = merge_tokens(&[
            tok(" trans", 0.0, 0.3, 0.8),
            tok("cript", 0.3, 0.6, 1.0),
        ]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "transcript");
        assert_eq!(words[0].start, 0.0);
        assert_eq!(words[0].end, 0.6);
        assert!((words[0].confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn multiple_words() {
        let words = merge_tokens(&[
            tok(" hello", 0.0, 0.3, 1.0),
            tok(" world", 0.4, 0.7, 1.0),
        ]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "hello");
        assert_eq!(words[1].word, "world");
    }

    #[test]
    fn stream_beginning_mid_word_still_yields_leading_word() {
        let words = merge_tokens(&[tok("lo", 0.0, 0.1, 1.0), tok(" world", 0.1, 0.4, 1.0)]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "lo");
        assert_eq!(words[1].word, "world");
    }

    #[test]
    fn trailing_partial_word_emitted_on_end_of_stream() {
        let words = merge_tokens(&[
            tok(" done", 0.0, 0.2, 1.0),
            tok(" mid", 0.3, 0.4, 1.0),
            tok("way", 0.4, 0.5, 1.0),
        ]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].word, "midway");
        assert_eq!(words[1].end, 0.5);
    }
}
