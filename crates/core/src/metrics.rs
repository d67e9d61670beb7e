//! Readability and effort metrics.
//!
//! Independent of summarization: word/character counts, a syllable-based
//! reading-ease grade, and an estimated reading time, all computed from the
//! same segmenter and tokenizer the summarizer uses.
//!
//! The reading-ease formula is the Flesch-Kincaid grade level:
//! `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`. Text with
//! no sentences or no words has no defined grade; that case is `None`, not
//! an error.

use serde::Serialize;

use crate::error::{Result, SummatimError};
use crate::segment::segment;
use crate::tokenize::tokenize;

/// Assumed reading speed in words per minute.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Number of words in the text (full tokenization, stopwords included).
pub fn word_count(text: &str) -> usize {
    tokenize(text).len()
}

/// Number of non-whitespace characters in the raw text.
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Estimate the syllable count of a single word.
///
/// Non-letter characters are stripped and the word lowercased; a single
/// trailing "e" is dropped; each maximal run of vowel letters (a, e, i, o,
/// u, y) counts as one syllable. Any word that still contains letters
/// counts at least 1; input with no letters counts 0.
///
/// # Example
///
/// ```rust
/// use summatim_core::syllable_count;
///
/// assert_eq!(syllable_count("the"), 1);
/// assert_eq!(syllable_count("beautiful"), 3);
/// assert_eq!(syllable_count(""), 0);
/// ```
pub fn syllable_count(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    let trimmed = cleaned.strip_suffix('e').unwrap_or(&cleaned);

    let mut runs = 0;
    let mut in_vowel_run = false;
    for c in trimmed.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_vowel_run {
            runs += 1;
        }
        in_vowel_run = is_vowel;
    }

    runs.max(1)
}

/// Flesch-Kincaid-style reading grade for the text.
///
/// Returns `None` when the text has no sentences or no words — the grade is
/// undefined for insufficient input, which is a sentinel rather than a
/// fault.
pub fn reading_ease(text: &str) -> Option<f64> {
    let sentences = segment(text).len();
    let words = tokenize(text);
    if sentences == 0 || words.is_empty() {
        return None;
    }

    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    Some(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Estimated reading time at 200 words per minute.
///
/// Under one minute the time is reported in rounded whole seconds
/// (`"<n>s"`); from one minute up it is rounded whole minutes (`"<n>m"`),
/// floored at 1.
pub fn reading_time(text: &str) -> String {
    let minutes = word_count(text) as f64 / WORDS_PER_MINUTE;
    if minutes < 1.0 {
        format!("{}s", (minutes * 60.0).round() as u64)
    } else {
        format!("{}m", (minutes.round() as u64).max(1))
    }
}

/// A complete readability report for one document.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    /// Number of sentences detected.
    pub sentences: usize,

    /// Number of words detected.
    pub words: usize,

    /// Number of non-whitespace characters.
    pub chars: usize,

    /// Total syllable count across all words.
    pub syllables: usize,

    /// Reading grade, or `None` when the text is too small to grade.
    pub reading_ease: Option<f64>,

    /// Estimated reading time, `"<n>s"` or `"<n>m"`.
    pub reading_time: String,
}

impl ReadabilityReport {
    /// Gets the report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| SummatimError::Serialization(e.to_string()))
    }
}

/// Compute the full readability report for a text.
///
/// # Example
///
/// ```rust
/// use summatim_core::analyze;
///
/// let report = analyze("The cat sat on the mat. The dog ran fast.");
/// assert_eq!(report.sentences, 2);
/// assert_eq!(report.words, 10);
/// assert!(report.reading_ease.is_some());
/// ```
pub fn analyze(text: &str) -> ReadabilityReport {
    let sentences = segment(text).len();
    let words = tokenize(text);
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

    ReadabilityReport {
        sentences,
        words: words.len(),
        chars: char_count(text),
        syllables,
        reading_ease: reading_ease(text),
        reading_time: reading_time(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("a b c d e"), 5);
    }

    #[test]
    fn test_word_count_includes_stopwords() {
        assert_eq!(word_count("the cat is on the mat"), 6);
    }

    #[test]
    fn test_char_count() {
        assert_eq!(char_count("abc def"), 6);
        assert_eq!(char_count("  \n\t"), 0);
        assert_eq!(char_count("don't!"), 6);
    }

    #[rstest]
    #[case("", 0)]
    #[case("123", 0)]
    #[case("the", 1)]
    #[case("cat", 1)]
    #[case("beautiful", 3)]
    #[case("queue", 1)]
    #[case("rhythm", 1)]
    #[case("readability", 5)]
    #[case("Motorcycle", 3)]
    fn test_syllable_count(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(syllable_count(word), expected);
    }

    #[test]
    fn test_syllable_count_trailing_e() {
        // The dropped trailing "e" costs "table" its second syllable; the
        // floor keeps a bare "e" at 1
        assert_eq!(syllable_count("table"), 1);
        assert_eq!(syllable_count("late"), 1);
        assert_eq!(syllable_count("e"), 1);
    }

    #[test]
    fn test_reading_ease_undefined_for_empty() {
        assert!(reading_ease("").is_none());
        assert!(reading_ease("   ").is_none());
    }

    #[test]
    fn test_reading_ease_finite_for_real_text() {
        let grade = reading_ease("The cat sat on the mat. The dog ran fast.").unwrap();
        assert!(grade.is_finite());
        assert!(grade < 10.0);
    }

    #[test]
    fn test_reading_ease_grows_with_complexity() {
        let simple = reading_ease("The cat sat. The dog ran.").unwrap();
        let dense = reading_ease(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated interdepartmental communication protocols.",
        )
        .unwrap();
        assert!(dense > simple);
    }

    #[rstest]
    #[case(0, "0s")]
    #[case(50, "15s")]
    #[case(100, "30s")]
    #[case(199, "60s")]
    #[case(200, "1m")]
    #[case(300, "2m")]
    #[case(400, "2m")]
    #[case(1000, "5m")]
    fn test_reading_time(#[case] words: usize, #[case] expected: &str) {
        let text = "word ".repeat(words);
        assert_eq!(reading_time(&text), expected);
    }

    #[test]
    fn test_analyze_empty() {
        let report = analyze("");
        assert_eq!(report.sentences, 0);
        assert_eq!(report.words, 0);
        assert_eq!(report.chars, 0);
        assert_eq!(report.syllables, 0);
        assert!(report.reading_ease.is_none());
        assert_eq!(report.reading_time, "0s");
    }

    #[test]
    fn test_analyze_counts_are_consistent() {
        let text = "Short words win. Long words lose.";
        let report = analyze(text);
        assert_eq!(report.sentences, 2);
        assert_eq!(report.words, word_count(text));
        assert_eq!(report.chars, char_count(text));
        assert_eq!(report.reading_ease, reading_ease(text));
    }

    #[test]
    fn test_report_to_json() {
        let report = analyze("One short sentence.");
        let json = report.to_json().unwrap();
        assert!(json.is_object());
        assert_eq!(json["sentences"], 1);
        assert!(json.get("reading_time").is_some());
    }

    #[test]
    fn test_report_json_null_grade_for_empty() {
        let json = analyze("").to_json().unwrap();
        assert!(json["reading_ease"].is_null());
    }
}
