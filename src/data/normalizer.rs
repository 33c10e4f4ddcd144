// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans a raw tweet and splits it into tokens.
//
// Cleaning steps (applied in order):
//   1. Drop every character that is not an ASCII letter, digit or whitespace
//   2. Drop digit runs
//   3. Collapse whitespace runs into one space
//   4. Drop . ? ! , : ; (already gone after step 1, kept for
//      text that was partially cleaned upstream)
//   5. Drop URL-like leftovers: http…, www…, …\.com…
//   6. Tokenize with the tweet tokenizer
//
// Step 5 runs after step 1 on purpose: "http://x.co" has become
// "httpxco" by then and is removed as one unit.
//
// Case is preserved here. Folding happens in the stemmer.

use regex::Regex;
use std::sync::LazyLock;

use crate::data::tokenizer::TweetTokenizer;

static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!,:;]").expect("valid regex"));
static LINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|\S+\.com\S+").expect("valid regex"));

/// Cleans and tokenizes raw tweet text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    tokenizer: TweetTokenizer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            tokenizer: TweetTokenizer::new(),
        }
    }

    /// Apply cleaning steps 1–5 and return the cleaned string.
    pub fn clean(&self, raw: &str) -> String {
        let text = SPECIAL_CHARS.replace_all(raw, "");
        let text = DIGITS.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        let text = PUNCTUATION.replace_all(&text, "");
        let text = LINKS.replace_all(&text, "");
        text.into_owned()
    }

    /// Clean then tokenize, left to right.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        self.tokenizer.tokenize(&self.clean(raw))
    }
}

/// Shorthand for `TextNormalizer::new().normalize(raw)`.
pub fn normalize(raw: &str) -> Vec<String> {
    TextNormalizer::new().normalize(raw)
}
