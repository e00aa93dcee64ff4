/// Keyword Extractor
/// Picks up to five content words from free text using a stopword filter

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const MAX_KEYWORDS: usize = 5;
pub const MIN_KEYWORD_LEN: usize = 4;
pub const FALLBACK_KEYWORD: &str = "speech";

// No \b anchors: letters are split from adjacent digits, so "weather2day"
// yields "weather" and "day".
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("valid word pattern"));

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "could",
        "should", "may", "might", "must", "can", "i", "you", "he", "she",
        "it", "we", "they", "my", "your", "his", "her", "its", "our", "their",
        "this", "that", "these", "those", "am", "what", "when", "where", "why",
        "how", "who", "which",
        // conversational fillers from speech transcripts
        "hello", "hi", "guess", "um", "uh", "just",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Extract up to `MAX_KEYWORDS` unique keywords in first-occurrence order.
/// Never fails; falls back to `["speech"]` when nothing qualifies.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);

    for word in WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str()) {
        if word.len() < MIN_KEYWORD_LEN || is_stopword(word) {
            continue;
        }
        if keywords.iter().any(|k| k == word) {
            continue;
        }

        keywords.push(word.to_string());
        if keywords.len() >= MAX_KEYWORDS {
            break;
        }
    }

    if keywords.is_empty() {
        return vec![FALLBACK_KEYWORD.to_string()];
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_sentence() {
        let keywords = extract_keywords("I am so happy and excited today");
        assert_eq!(keywords, vec!["happy", "excited", "today"]);
    }

    #[test]
    fn test_short_text_falls_back() {
        assert_eq!(extract_keywords(""), vec!["speech"]);
        assert_eq!(extract_keywords("abc"), vec!["speech"]);
        assert_eq!(extract_keywords("a b, c!"), vec!["speech"]);
        assert_eq!(extract_keywords("   42 ?? "), vec!["speech"]);
    }

    #[test]
    fn test_only_stopwords_falls_back() {
        assert_eq!(
            extract_keywords("Hello, I guess this is what they would have"),
            vec!["speech"]
        );
    }

    #[test]
    fn test_dedup_and_limit() {
        let keywords = extract_keywords(
            "Rust rust RUST compiler borrow checker lifetimes traits generics macros",
        );
        assert_eq!(
            keywords,
            vec!["rust", "compiler", "borrow", "checker", "lifetimes"]
        );
    }

    #[test]
    fn test_splits_on_non_letters() {
        // digits and apostrophes break tokens
        let keywords = extract_keywords("weather2day isn't great-looking");
        assert_eq!(keywords, vec!["weather", "great", "looking"]);
    }

    #[test]
    fn test_output_invariants() {
        let samples = [
            "The quick brown fox jumps over the lazy dog near the riverbank",
            "Um, uh, just... WONDERFUL wonderful Wonderful news everyone!",
            "Ünïcödé text with ascii words mixed éé inside",
            "should would could might must",
        ];

        for text in samples {
            let keywords = extract_keywords(text);
            assert!(!keywords.is_empty());
            assert!(keywords.len() <= MAX_KEYWORDS);

            if keywords == vec![FALLBACK_KEYWORD] {
                continue;
            }

            let unique: HashSet<&String> = keywords.iter().collect();
            assert_eq!(unique.len(), keywords.len(), "duplicates in {:?}", keywords);

            for k in &keywords {
                assert!(k.len() >= MIN_KEYWORD_LEN, "{} too short", k);
                assert_eq!(k, &k.to_lowercase());
                assert!(!is_stopword(k), "{} is a stopword", k);
            }
        }
    }
}
