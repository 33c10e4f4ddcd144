// ============================================================
// Layer 4 — Pairwise Partitioner
// ============================================================
// Splits the corpus into the three pairwise subsets, each one
// excluding a single label:
//
//   positive/negative  ← every row that is not NEUTRAL
//   positive/neutral   ← every row that is not NEGATIVE
//   negative/neutral   ← every row that is not POSITIVE
//
// A subset is only trainable when it holds at least one row of
// each of its two labels.
//
// Why check both labels, not just "non-empty"?
//   A corpus with only POSITIVE and NEGATIVE rows still gives the
//   positive/neutral subset its positive rows, so that subset is
//   not empty. But a classifier fitted on one class learns nothing
//   and would answer POSITIVE for every input. Reporting
//   MissingClass up front stops that degenerate model from ever
//   being built.
//
// Row order is kept from the corpus, so the same corpus always
// gives the same subsets (and the same vocabularies downstream).
//
// Reference: Rust Book §13 (Iterators: filter, unzip)

use crate::domain::error::{DataError, Result};
use crate::domain::example::LabeledExample;
use crate::domain::label::{Label, Pair};

/// The corpus rows one pairwise classifier is trained on.
#[derive(Debug, Clone)]
pub struct PairwiseSubset {
    pair: Pair,
    texts: Vec<String>,
    labels: Vec<Label>,
}

impl PairwiseSubset {
    /// Keep the rows whose label belongs to `pair`, in corpus order.
    pub fn from_corpus(pair: Pair, corpus: &[LabeledExample]) -> Self {
        let (texts, labels) = corpus
            .iter()
            .filter(|ex| pair.contains(ex.label))
            .map(|ex| (ex.text.clone(), ex.label))
            .unzip();
        Self { pair, texts, labels }
    }

    pub fn pair(&self) -> Pair {
        self.pair
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Binary targets: true where the row carries the pair's scored label.
    pub fn targets(&self) -> Vec<bool> {
        self.labels.iter().map(|&l| l == self.pair.scored()).collect()
    }

    /// Fail unless both of the pair's labels are present.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DataError::EmptySubset { pair: self.pair }.into());
        }
        for label in [self.pair.scored(), self.pair.reference()] {
            if !self.labels.contains(&label) {
                return Err(DataError::MissingClass { pair: self.pair, label }.into());
            }
        }
        Ok(())
    }
}

/// All three subsets of one corpus.
#[derive(Debug, Clone)]
pub struct PairwiseSubsets {
    pub positive_negative: PairwiseSubset,
    pub positive_neutral: PairwiseSubset,
    pub negative_neutral: PairwiseSubset,
}

impl PairwiseSubsets {
    pub fn iter(&self) -> impl Iterator<Item = &PairwiseSubset> {
        [&self.positive_negative, &self.positive_neutral, &self.negative_neutral].into_iter()
    }
}

/// Partition `corpus` and check every subset is trainable.
///
/// # Arguments
/// * `corpus` - Every labelled row, in corpus order
///
/// # Returns
/// The three subsets, or the first `DataError` found, checked in
/// the order positive/negative, positive/neutral, negative/neutral.
///
/// # Example
/// ```ignore
/// let subsets = partition(&corpus)?;
/// assert!(subsets.negative_neutral.labels().iter().all(|l| *l != Label::Positive));
/// ```
pub fn partition(corpus: &[LabeledExample]) -> Result<PairwiseSubsets> {
    let subsets = PairwiseSubsets {
        positive_negative: PairwiseSubset::from_corpus(Pair::PositiveNegative, corpus),
        positive_neutral: PairwiseSubset::from_corpus(Pair::PositiveNeutral, corpus),
        negative_neutral: PairwiseSubset::from_corpus(Pair::NegativeNeutral, corpus),
    };

    for subset in subsets.iter() {
        subset.validate()?;
        tracing::debug!("Subset {}: {} rows", subset.pair(), subset.len());
    }

    Ok(subsets)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SentimentError;

    fn corpus() -> Vec<LabeledExample> {
        vec![
            LabeledExample::new("yay", Label::Positive),
            LabeledExample::new("boo", Label::Negative),
            LabeledExample::new("hmm", Label::Neutral),
            LabeledExample::new("woo", Label::Positive),
        ]
    }

    #[test]
    fn test_subsets_exclude_one_label() {
        let s = partition(&corpus()).unwrap();
        assert_eq!(s.positive_negative.texts(), ["yay", "boo", "woo"]);
        assert_eq!(s.positive_neutral.texts(), ["yay", "hmm", "woo"]);
        assert_eq!(s.negative_neutral.texts(), ["boo", "hmm"]);
    }

    #[test]
    fn test_targets_follow_scored_label() {
        let s = partition(&corpus()).unwrap();
        assert_eq!(s.positive_negative.targets(), vec![true, false, true]);
        assert_eq!(s.negative_neutral.targets(), vec![true, false]);
    }

    #[test]
    fn test_missing_neutral_is_data_error() {
        let only_polar: Vec<_> = corpus().into_iter().filter(|e| e.label != Label::Neutral).collect();
        let err = partition(&only_polar).unwrap_err();
        assert_eq!(
            err,
            SentimentError::Data(DataError::MissingClass {
                pair: Pair::PositiveNeutral,
                label: Label::Neutral,
            })
        );
    }

    #[test]
    fn test_empty_corpus_is_data_error() {
        let err = partition(&[]).unwrap_err();
        assert_eq!(
            err,
            SentimentError::Data(DataError::EmptySubset { pair: Pair::PositiveNegative })
        );
    }
}
