// ============================================================
// Layer 5 — Count Vectorizer
// ============================================================
// Bag-of-words counts over a vocabulary fitted once per pair.
//
//   fit        — analyze every text, collect distinct tokens,
//                index them in sorted order, freeze
//   transform  — analyze one text with the same analyzer and
//                count the tokens the frozen vocabulary knows;
//                unknown tokens are dropped
//
// transform before fit is a ConfigurationError.
//
// Why one vectorizer per pair?
//   Each classifier only ever sees the rows of its own two
//   labels. A vocabulary fitted on all rows would give the
//   positive/negative model columns for words that only occur
//   in neutral tweets, columns that are always zero in its
//   training data and carry no signal.
//
// Why sorted indices?
//   A BTreeSet hands tokens back in byte order, so the same
//   texts always produce the same column layout. Two training
//   runs on the same corpus therefore produce identical
//   model.json files.
//
// Example:
//   fit(["good day"])          → {"dai": 0, "good": 1}
//   transform("good night")    → [0, 1]   ("night" dropped)
//
// Reference: scikit-learn CountVectorizer (fit / transform split)
//            ndarray documentation (Array2 row assignment)

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::data::analyzer::TextAnalyzer;
use crate::domain::error::{ConfigurationError, Result};

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// Frozen token → column index mapping.
///
/// Serialises as a plain `{token: index}` object; deserialising
/// rejects maps whose indices are not exactly `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, usize>", into = "BTreeMap<String, usize>")]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Index every distinct token of `documents` in sorted order.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let distinct: BTreeSet<&String> = documents.iter().flatten().collect();
        let index = distinct
            .into_iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), i))
            .collect();
        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Tokens ordered by column index.
    pub fn tokens(&self) -> Vec<&str> {
        let mut terms = vec![""; self.index.len()];
        for (token, &i) in &self.index {
            terms[i] = token.as_str();
        }
        terms
    }

    /// Count the known tokens of one analyzed document.
    fn count(&self, tokens: &[String]) -> FeatureVector {
        let mut counts = vec![0u32; self.len()];
        for token in tokens {
            if let Some(i) = self.get(token) {
                counts[i] += 1;
            }
        }
        FeatureVector { counts }
    }
}

impl TryFrom<BTreeMap<String, usize>> for Vocabulary {
    type Error = String;

    fn try_from(index: BTreeMap<String, usize>) -> std::result::Result<Self, Self::Error> {
        let mut seen = vec![false; index.len()];
        for (token, &i) in &index {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(format!("vocabulary index {i} for `{token}` is out of range or repeated")),
            }
        }
        Ok(Self { index })
    }
}

impl From<Vocabulary> for BTreeMap<String, usize> {
    fn from(v: Vocabulary) -> Self {
        v.index
    }
}

// ─── FeatureVector ────────────────────────────────────────────────────────────
/// Token counts, one slot per vocabulary column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    counts: Vec<u32>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// True when no vocabulary token occurred.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn to_array(&self) -> Array1<f64> {
        self.counts.iter().map(|&c| f64::from(c)).collect()
    }
}

// ─── CountVectorizer ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountVectorizer {
    analyzer: TextAnalyzer,
    vocabulary: Option<Vocabulary>,
}

impl CountVectorizer {
    pub fn new(analyzer: TextAnalyzer) -> Self {
        Self {
            analyzer,
            vocabulary: None,
        }
    }

    pub fn analyzer(&self) -> TextAnalyzer {
        self.analyzer
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    pub fn n_features(&self) -> Option<usize> {
        self.vocabulary.as_ref().map(Vocabulary::len)
    }

    /// Build and freeze the vocabulary of `texts`.
    ///
    /// # Arguments
    /// * `texts` - The raw (unanalyzed) texts of one pairwise subset
    ///
    /// # Returns
    /// The frozen vocabulary. Calling `fit` again replaces it.
    pub fn fit(&mut self, texts: &[String]) -> &Vocabulary {
        let documents = self.analyze_all(texts);
        self.vocabulary.insert(Vocabulary::from_documents(&documents))
    }

    /// Fit on `texts` and return their count matrix.
    ///
    /// Each text is analyzed once; the token lists are reused for
    /// both the vocabulary and the counts.
    ///
    /// # Returns
    /// An `(n_texts, vocabulary_len)` matrix, row `i` holding the
    /// counts of `texts[i]`.
    pub fn fit_transform(&mut self, texts: &[String]) -> Array2<f64> {
        let documents = self.analyze_all(texts);
        let vocabulary = self.vocabulary.insert(Vocabulary::from_documents(&documents));

        let mut matrix = Array2::zeros((documents.len(), vocabulary.len()));
        for (mut row, doc) in matrix.rows_mut().into_iter().zip(&documents) {
            row.assign(&vocabulary.count(doc).to_array());
        }
        tracing::debug!("Vectorized {} texts over {} terms", documents.len(), vocabulary.len());
        matrix
    }

    /// Count the known tokens of `text`. Never grows the vocabulary.
    ///
    /// # Returns
    /// A vector as long as the vocabulary; all zeros when no token
    /// of `text` was seen at fit time.
    ///
    /// # Errors
    /// `ConfigurationError::NotFitted` if `fit` has not run.
    pub fn transform(&self, text: &str) -> Result<FeatureVector> {
        let vocabulary = self.vocabulary.as_ref().ok_or(ConfigurationError::NotFitted {
            component: "CountVectorizer",
        })?;
        Ok(vocabulary.count(&self.analyzer.analyze(text)))
    }

    fn analyze_all(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.analyzer.analyze(t)).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SentimentError;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_frozen() {
        let mut v = CountVectorizer::new(TextAnalyzer::default());
        v.fit(&texts(&["good day"]));

        let vector = v.transform("good night").unwrap();
        let vocab = v.vocabulary().unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.counts()[vocab.get("good").unwrap()], 1);
        assert!(!vocab.contains("night"));
    }

    #[test]
    fn test_counts_repeated_tokens() {
        let mut v = CountVectorizer::new(TextAnalyzer::default());
        v.fit(&texts(&["win win lose"]));
        let vector = v.transform("win WIN winning").unwrap();
        let win = v.vocabulary().unwrap().get("win").unwrap();
        assert_eq!(vector.counts()[win], 3);
    }

    #[test]
    fn test_sorted_deterministic_indices() {
        let mut v = CountVectorizer::new(TextAnalyzer::new(false));
        v.fit(&texts(&["zebra apple", "mango apple"]));
        assert_eq!(v.vocabulary().unwrap().tokens(), vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_fit_transform_matches_transform() {
        let corpus = texts(&["great day", "terrible loss", "great great"]);
        let mut v = CountVectorizer::new(TextAnalyzer::default());
        let matrix = v.fit_transform(&corpus);
        assert_eq!(matrix.nrows(), 3);
        for (row, text) in matrix.rows().into_iter().zip(&corpus) {
            assert_eq!(row.to_owned(), v.transform(text).unwrap().to_array());
        }
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let v = CountVectorizer::new(TextAnalyzer::default());
        let err = v.transform("anything").unwrap_err();
        assert_eq!(
            err,
            SentimentError::Configuration(ConfigurationError::NotFitted { component: "CountVectorizer" })
        );
    }

    #[test]
    fn test_unknown_text_is_zero_vector() {
        let mut v = CountVectorizer::new(TextAnalyzer::default());
        v.fit(&texts(&["good day"]));
        assert!(v.transform("completely unrelated").unwrap().is_zero());
        assert!(v.transform("").unwrap().is_zero());
    }

    #[test]
    fn test_vocabulary_serde_roundtrip_and_validation() {
        let vocab = Vocabulary::from_documents(&[vec!["b".to_string(), "a".to_string()]]);
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"{"a":0,"b":1}"#);
        assert_eq!(serde_json::from_str::<Vocabulary>(&json).unwrap(), vocab);

        assert!(serde_json::from_str::<Vocabulary>(r#"{"a":0,"b":0}"#).is_err());
        assert!(serde_json::from_str::<Vocabulary>(r#"{"a":0,"b":5}"#).is_err());
    }
}
