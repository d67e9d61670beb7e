//! Sentence segmentation.
//!
//! Splits raw text into an ordered sequence of sentences using a
//! lookahead-based boundary rule: a terminal punctuation mark followed by
//! whitespace only ends a sentence when the next character starts one (an
//! uppercase letter, a digit, or an opening quote/bracket). The rule avoids
//! splitting on mid-sentence abbreviations followed by a lowercase
//! continuation, at the cost of occasionally missing a boundary before a
//! lowercase-starting sentence.

use regex::Regex;

/// Characters that terminate a sentence.
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Split text into sentences.
///
/// Whitespace runs are collapsed to a single space and the text is trimmed
/// before splitting, so no returned sentence is empty or padded. Empty or
/// whitespace-only input yields an empty vector. Sentences are returned in
/// left-to-right order and never overlap.
///
/// # Example
///
/// ```rust
/// use summatim_core::segment;
///
/// let sentences = segment("First sentence. Second one! Dr. smith stays put.");
/// assert_eq!(sentences.len(), 3);
/// assert_eq!(sentences[1], "Second one!");
/// ```
pub fn segment(text: &str) -> Vec<String> {
    let cleaned = normalize_whitespace(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = cleaned.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if TERMINALS.contains(&chars[i])
            && i + 2 < chars.len()
            && chars[i + 1] == ' '
            && starts_sentence(chars[i + 2])
        {
            push_fragment(&mut sentences, &chars[start..=i]);
            start = i + 2;
            i = start;
            continue;
        }
        i += 1;
    }

    push_fragment(&mut sentences, &chars[start..]);
    sentences
}

/// Collapse whitespace runs to a single space and trim
fn normalize_whitespace(text: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(text, " ").trim().to_string()
}

/// Whether a character can open a new sentence after a terminal + space
fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '(' | '[' | '{' | '\u{201C}' | '\u{2018}' | '\u{00AB}')
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &[char]) {
    let sentence: String = fragment.iter().collect();
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
