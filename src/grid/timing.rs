//! Timing for words produced by a replacement
//!
//! Same-length replacements keep every word's timing, so punctuation and
//! case edits never move words in time. Anything else redistributes the
//! replaced span over the new words by character count.

use crate::models::{Nanos, Word};

/// Build the words that replace `replaced`
pub fn retime<S: AsRef<str>>(replaced: &[Word], texts: &[S]) -> Vec<Word> {
    if texts.is_empty() || replaced.is_empty() {
        return Vec::new();
    }

    if texts.len() == replaced.len() {
        return replaced
            .iter()
            .zip(texts)
            .map(|(old, text)| {
                let text = text.as_ref();
                let mut word = old.clone();
                if word.text != text {
                    word.text = text.to_string();
                    word.confidence = 100.0;
                }
                word
            })
            .collect();
    }

    let span_start = replaced[0].start_time;
    let span_end = replaced[replaced.len() - 1].end_time.max(span_start);
    let boundaries = split_span(span_start, span_end, texts);

    texts
        .iter()
        .zip(boundaries.windows(2))
        .map(|(text, bounds)| Word::new(text.as_ref(), bounds[0], bounds[1]))
        .collect()
}

/// Cumulative boundaries (len = texts + 1), weighted by character count
fn split_span<S: AsRef<str>>(start: Nanos, end: Nanos, texts: &[S]) -> Vec<Nanos> {
    // Empty words still get a slot
    let weights: Vec<u128> = texts
        .iter()
        .map(|t| t.as_ref().chars().count().max(1) as u128)
        .collect();
    let total: u128 = weights.iter().sum();
    let span = (end - start) as u128;

    let mut boundaries = Vec::with_capacity(texts.len() + 1);
    boundaries.push(start);
    let mut cumulative = 0u128;
    for weight in &weights {
        cumulative += weight;
        boundaries.push(start + (span * cumulative / total) as Nanos);
    }
    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_length_keeps_timing() {
        let replaced = vec![Word { confidence: 42.0, ..Word::new("world", 10, 20) }];
        let words = retime(&replaced, &["world."]);
        assert_eq!(words[0].start_time, 10);
        assert_eq!(words[0].end_time, 20);
        assert_eq!(words[0].confidence, 100.0);
    }

    #[test]
    fn test_unchanged_text_keeps_confidence() {
        let replaced = vec![Word { confidence: 42.0, ..Word::new("world", 10, 20) }];
        let words = retime(&replaced, &["world"]);
        assert_eq!(words[0].confidence, 42.0);
    }

    #[test]
    fn test_split_redistributes_by_length() {
        let replaced = vec![Word::new("abcdef", 0, 600)];
        let words = retime(&replaced, &["ab", "cdef"]);
        assert_eq!(words.len(), 2);
        assert_eq!((words[0].start_time, words[0].end_time), (0, 200));
        assert_eq!((words[1].start_time, words[1].end_time), (200, 600));
    }

    #[test]
    fn test_merge_spans_whole_range() {
        let replaced = vec![Word::new("ice", 100, 200), Word::new("cream", 250, 400)];
        let words = retime(&replaced, &["icecream"]);
        assert_eq!(words.len(), 1);
        assert_eq!((words[0].start_time, words[0].end_time), (100, 400));
    }

    #[test]
    fn test_redistributed_words_do_not_overlap() {
        let replaced = vec![Word::new("x", 0, 7)];
        let words = retime(&replaced, &["a", "b", "c"]);
        for pair in words.windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
        }
        assert_eq!(words.last().unwrap().end_time, 7);
    }
}
