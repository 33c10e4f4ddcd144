// ============================================================
// Layer 4 — Tweet Tokenizer
// ============================================================
// Splits text into word units the way social-media text needs:
//   - URLs stay whole
//   - emoticons such as :-) ;P <3 stay whole
//   - @handles and #hashtags stay whole
//   - words keep inner apostrophes and hyphens (don't, e-mail)
//   - runs of ! ? . stay together (!!!, ?!, ...)
//   - any other non-space character is its own token
//
// Tokens come out left to right with their original case.

use regex::Regex;
use std::sync::LazyLock;

const TOKEN_PATTERNS: &[&str] = &[
    // URLs
    r"(?:https?://|www\.)\S+",
    // Emoticons, eyes first or mouth first, and hearts
    r"[<>]?[:;=8][\-o\*']?[\)\]\(\[dDpP/:\}\{@\|\\]",
    r"[\)\]\(\[dDpP/:\}\{@\|\\][\-o\*']?[:;=8][<>]?",
    r"<3",
    // Handles and hashtags
    r"@\w+",
    r"#\w+",
    // Words with optional inner apostrophes or hyphens
    r"\w+(?:['\-]\w+)*",
    // Repeated punctuation
    r"[!?.]{2,}",
    // Anything else that isn't whitespace
    r"\S",
];

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&TOKEN_PATTERNS.join("|")).expect("token patterns are valid"));

/// Tokenizer tolerant of handles, hashtags, emoticons and
/// repeated punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TweetTokenizer;

impl TweetTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        TweetTokenizer::new().tokenize(text)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tokens("Check  this now"), vec!["Check", "this", "now"]);
    }

    #[test]
    fn test_handles_hashtags_and_emoticons() {
        assert_eq!(
            tokens("@bob loved it #win :-) <3"),
            vec!["@bob", "loved", "it", "#win", ":-)", "<3"]
        );
    }

    #[test]
    fn test_repeated_punctuation_and_contractions() {
        assert_eq!(tokens("don't stop!!!"), vec!["don't", "stop", "!!!"]);
    }

    #[test]
    fn test_url_kept_whole() {
        assert_eq!(tokens("see https://t.co/abc ok"), vec!["see", "https://t.co/abc", "ok"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t\n").is_empty());
    }
}
