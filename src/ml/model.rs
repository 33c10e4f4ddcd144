// ============================================================
// Layer 5 — Pairwise Models and the Trained Model
// ============================================================
// A PairModel owns everything one binary sub-problem needs:
// its own CountVectorizer (and so its own vocabulary) and its
// own classifier. Nothing is shared between pairs.
//
// TrainedModel bundles the three pairs with the classifier each
// one uses:
//
//   positive/negative → LogisticRegression
//   positive/neutral  → MultinomialNb
//   negative/neutral  → LinearSvm
//
// After training nothing is mutated again; `predict` takes &self
// and the model can be shared across threads as-is.

use serde::{Deserialize, Serialize};

use crate::data::analyzer::TextAnalyzer;
use crate::data::partition::PairwiseSubset;
use crate::domain::error::{ConfigurationError, Result};
use crate::domain::example::{PredictionResult, Verdicts};
use crate::domain::label::{Label, Pair};
use crate::domain::traits::SentimentPredictor;
use crate::ml::classifier::BinaryClassifier;
use crate::ml::logistic::LogisticRegression;
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::svm::LinearSvm;
use crate::ml::vectorizer::{CountVectorizer, FeatureVector, Vocabulary};

// ─── PairModel ────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairModel<C> {
    pair: Pair,
    vectorizer: CountVectorizer,
    classifier: C,
}

impl<C: BinaryClassifier> PairModel<C> {
    pub fn new(pair: Pair, analyzer: TextAnalyzer, classifier: C) -> Self {
        Self {
            pair,
            vectorizer: CountVectorizer::new(analyzer),
            classifier,
        }
    }

    pub fn pair(&self) -> Pair {
        self.pair
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vectorizer.vocabulary()
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Fit the vocabulary on the subset's texts, then the classifier
    /// on the resulting counts.
    pub fn fit(&mut self, subset: &PairwiseSubset) -> Result<()> {
        if subset.pair() != self.pair {
            return Err(ConfigurationError::InvalidParameter {
                name: "subset",
                reason: format!("{} model given the {} subset", self.pair, subset.pair()),
            }
            .into());
        }
        subset.validate()?;

        let features = self.vectorizer.fit_transform(subset.texts());
        self.classifier.fit(&features, &subset.targets())?;

        tracing::info!(
            "Trained {} pair with {}: {} rows, {} terms",
            self.pair,
            C::NAME,
            subset.len(),
            features.ncols()
        );
        Ok(())
    }

    pub fn vectorize(&self, text: &str) -> Result<FeatureVector> {
        self.vectorizer.transform(text)
    }

    /// One of exactly this pair's two labels.
    pub fn predict_features(&self, features: &FeatureVector) -> Result<Label> {
        let scored = self.classifier.predict(features.to_array().view())?;
        Ok(self.pair.label_for(scored))
    }

    pub fn predict(&self, text: &str) -> Result<Label> {
        self.predict_features(&self.vectorize(text)?)
    }

    /// Vectorizer and classifier are both fitted and agree on width.
    pub fn check_consistency(&self) -> Result<()> {
        let vocab = self.vectorizer.n_features().ok_or(ConfigurationError::NotFitted {
            component: "CountVectorizer",
        })?;
        let input = self
            .classifier
            .n_features()
            .ok_or(ConfigurationError::NotFitted { component: C::NAME })?;
        if vocab != input {
            return Err(ConfigurationError::DimensionMismatch {
                expected: input,
                got: vocab,
            }
            .into());
        }
        Ok(())
    }
}

// ─── TrainedModel ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    positive_negative: PairModel<LogisticRegression>,
    positive_neutral: PairModel<MultinomialNb>,
    negative_neutral: PairModel<LinearSvm>,
}

impl TrainedModel {
    /// Bundle three fitted pairs. Fails if any pair is unfitted,
    /// inconsistent, or sits in the wrong slot.
    pub fn from_parts(
        positive_negative: PairModel<LogisticRegression>,
        positive_neutral: PairModel<MultinomialNb>,
        negative_neutral: PairModel<LinearSvm>,
    ) -> Result<Self> {
        let model = Self {
            positive_negative,
            positive_neutral,
            negative_neutral,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        let slots = [
            (self.positive_negative.pair(), Pair::PositiveNegative),
            (self.positive_neutral.pair(), Pair::PositiveNeutral),
            (self.negative_neutral.pair(), Pair::NegativeNeutral),
        ];
        for (actual, expected) in slots {
            if actual != expected {
                return Err(ConfigurationError::InvalidParameter {
                    name: "pair",
                    reason: format!("{actual} model stored in the {expected} slot"),
                }
                .into());
            }
        }
        self.positive_negative.check_consistency()?;
        self.positive_neutral.check_consistency()?;
        self.negative_neutral.check_consistency()
    }

    pub fn positive_negative(&self) -> &PairModel<LogisticRegression> {
        &self.positive_negative
    }

    pub fn positive_neutral(&self) -> &PairModel<MultinomialNb> {
        &self.positive_neutral
    }

    pub fn negative_neutral(&self) -> &PairModel<LinearSvm> {
        &self.negative_neutral
    }

    /// The three binary verdicts for `text`.
    pub fn verdicts(&self, text: &str) -> Result<Verdicts> {
        Ok(Verdicts {
            positive_negative: self.positive_negative.predict(text)?,
            positive_neutral: self.positive_neutral.predict(text)?,
            negative_neutral: self.negative_neutral.predict(text)?,
        })
    }

    pub fn predict(&self, text: &str) -> Result<PredictionResult> {
        let verdicts = self.verdicts(text)?;
        let label = verdicts.arbitrate();
        tracing::debug!(
            "verdicts pos/neg={} pos/neu={} neg/neu={} → {}",
            verdicts.positive_negative,
            verdicts.positive_neutral,
            verdicts.negative_neutral,
            label
        );
        Ok(PredictionResult { label, verdicts })
    }

    pub fn classify(&self, text: &str) -> Result<Label> {
        Ok(self.predict(text)?.label)
    }
}

impl SentimentPredictor for TrainedModel {
    fn predict(&self, text: &str) -> Result<PredictionResult> {
        TrainedModel::predict(self, text)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SentimentError;
    use crate::domain::example::LabeledExample;

    fn subset(pair: Pair) -> PairwiseSubset {
        let corpus = vec![
            LabeledExample::new("great day", Label::Positive),
            LabeledExample::new("terrible loss", Label::Negative),
            LabeledExample::new("report filed", Label::Neutral),
        ];
        PairwiseSubset::from_corpus(pair, &corpus)
    }

    #[test]
    fn test_pair_model_returns_only_its_labels() {
        let mut m = PairModel::new(Pair::PositiveNeutral, TextAnalyzer::default(), MultinomialNb::default());
        m.fit(&subset(Pair::PositiveNeutral)).unwrap();

        for text in ["great", "report", "terrible", "", "zzz"] {
            let label = m.predict(text).unwrap();
            assert!(Pair::PositiveNeutral.contains(label), "{text} → {label}");
        }
        assert_eq!(m.predict("great great").unwrap(), Label::Positive);
    }

    #[test]
    fn test_pair_model_rejects_foreign_subset() {
        let mut m = PairModel::new(Pair::PositiveNegative, TextAnalyzer::default(), LogisticRegression::default());
        let err = m.fit(&subset(Pair::NegativeNeutral)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unfitted_pair_model_fails_fast() {
        let m = PairModel::new(Pair::NegativeNeutral, TextAnalyzer::default(), LinearSvm::default());
        assert_eq!(
            m.predict("anything").unwrap_err(),
            SentimentError::Configuration(ConfigurationError::NotFitted { component: "CountVectorizer" })
        );
        assert!(m.check_consistency().is_err());
    }

    #[test]
    fn test_from_parts_rejects_unfitted_pairs() {
        let analyzer = TextAnalyzer::default();
        let err = TrainedModel::from_parts(
            PairModel::new(Pair::PositiveNegative, analyzer, LogisticRegression::default()),
            PairModel::new(Pair::PositiveNeutral, analyzer, MultinomialNb::default()),
            PairModel::new(Pair::NegativeNeutral, analyzer, LinearSvm::default()),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }
}
