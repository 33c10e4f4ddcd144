// ============================================================
// Layer 4 — Text Analyzer
// ============================================================
// The one token pipeline shared by vectorizer fit and transform:
//
//   raw text → TextNormalizer → (PorterStemmer) → tokens
//
// The analyzer is stored inside each fitted vectorizer so a
// reloaded model analyzes text exactly as it did when trained.

use serde::{Deserialize, Serialize};

use crate::data::normalizer::TextNormalizer;
use crate::data::stemmer::PorterStemmer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalyzer {
    /// Reduce every token to its Porter stem (also folds case)
    pub stemming: bool,
}

impl TextAnalyzer {
    pub fn new(stemming: bool) -> Self {
        Self { stemming }
    }

    pub fn analyze(&self, raw: &str) -> Vec<String> {
        let tokens = TextNormalizer::new().normalize(raw);
        if !self.stemming {
            return tokens;
        }
        let stemmer = PorterStemmer::new();
        tokens.iter().map(|t| stemmer.stem(t)).collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(true)
    }
}
