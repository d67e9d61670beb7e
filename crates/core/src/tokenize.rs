//! Word tokenization and stopword filtering.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Closed-class English words carrying no frequency/similarity signal.
///
/// Fixed list, loaded once per process. Tokens are lowercase before lookup,
/// so membership checks are case-insensitive by construction.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

static ENGLISH: LazyLock<StopwordSet> = LazyLock::new(|| StopwordSet::from_list(ENGLISH_STOPWORDS));

/// An immutable set of stopwords excluded from scoring signal.
///
/// Constructed once and injected into the components that need it; the
/// built-in English set lives for the whole process.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in English stopword set, loaded once per process.
    pub fn english() -> &'static StopwordSet {
        &ENGLISH
    }

    /// Create a stopword set from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self { words: words.iter().map(|w| w.to_lowercase()).collect() }
    }

    /// Create an empty set (no filtering).
    pub fn empty() -> Self {
        Self { words: HashSet::new() }
    }

    /// Check if a token is a stopword.
    ///
    /// Exact membership test; tokens produced by [`tokenize`] are already
    /// lowercase.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english().clone()
    }
}

/// Normalize a text span into an ordered sequence of word tokens.
///
/// The text is lowercased; every character that is not an ASCII lowercase
/// letter, digit, whitespace, apostrophe, or hyphen becomes a separator.
/// Order is preserved and tokens may repeat.
///
/// # Example
///
/// ```rust
/// use summatim_core::tokenize;
///
/// let tokens = tokenize("Don't panic -- it's FINE!");
/// assert_eq!(tokens, vec!["don't", "panic", "--", "it's", "fine"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '\'' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("one, two; three."), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_keeps_apostrophe_and_hyphen() {
        assert_eq!(tokenize("state-of-the-art isn't bad"), vec!["state-of-the-art", "isn't", "bad"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("route 66 rocks"), vec!["route", "66", "rocks"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,,, !!! ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order_and_repeats() {
        assert_eq!(tokenize("ai beats ai"), vec!["ai", "beats", "ai"]);
    }

    #[test]
    fn test_english_stopwords() {
        let set = StopwordSet::english();
        assert!(set.is_stopword("the"));
        assert!(set.is_stopword("is"));
        assert!(set.is_stopword("with"));
        assert!(!set.is_stopword("machine"));
        assert!(!set.is_stopword("learning"));
    }

    #[test]
    fn test_custom_stopwords() {
        let set = StopwordSet::from_list(&["Custom", "WORDS"]);
        assert!(set.is_stopword("custom"));
        assert!(set.is_stopword("words"));
        assert!(!set.is_stopword("the"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let set = StopwordSet::empty();
        assert!(!set.is_stopword("the"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_english_set_is_shared() {
        let a = StopwordSet::english();
        let b = StopwordSet::english();
        assert!(std::ptr::eq(a, b));
    }
}
