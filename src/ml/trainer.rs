// ============================================================
// Layer 5 — Trainer
// ============================================================
// Turns a labelled corpus into a TrainedModel:
//
//   Step 1: partition the corpus into the three pairwise subsets
//   Step 2: fit each pair's vectorizer on its subset's texts
//   Step 3: fit each pair's classifier on the counts
//
// Training is all-or-nothing. Any error aborts before a
// TrainedModel exists, so a half-fitted model is never returned.

use serde::{Deserialize, Serialize};

use crate::data::analyzer::TextAnalyzer;
use crate::data::partition::partition;
use crate::domain::error::Result;
use crate::domain::example::LabeledExample;
use crate::domain::label::Pair;
use crate::ml::logistic::LogisticRegression;
use crate::ml::model::{PairModel, TrainedModel};
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::svm::LinearSvm;

/// Every knob the three classifiers and the analyzer expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperParams {
    pub stemming: bool,
    /// Seeds the SVM's coordinate order
    pub seed: u64,
    pub lr_learning_rate: f64,
    pub lr_max_iter: usize,
    /// Stop once the cost moves less than this between iterations
    pub lr_tolerance: f64,
    pub lr_c: f64,
    pub nb_alpha: f64,
    pub svm_c: f64,
    pub svm_max_epochs: usize,
    pub svm_tolerance: f64,
    pub svm_fit_intercept: bool,
}

impl Default for HyperParams {
    fn default() -> Self {
        Self {
            stemming: true,
            seed: 0,
            lr_learning_rate: 0.5,
            lr_max_iter: 1000,
            lr_tolerance: 1e-8,
            lr_c: 1.0,
            nb_alpha: 1.0,
            svm_c: 1.0,
            svm_max_epochs: 1000,
            svm_tolerance: 1e-4,
            svm_fit_intercept: false,
        }
    }
}

/// Train with default hyperparameters.
pub fn train(corpus: &[LabeledExample]) -> Result<TrainedModel> {
    train_with(corpus, &HyperParams::default())
}

pub fn train_with(corpus: &[LabeledExample], params: &HyperParams) -> Result<TrainedModel> {
    tracing::info!("Training on {} examples", corpus.len());

    // ── Step 1: Partition ────────────────────────────────────────────────────
    let subsets = partition(corpus)?;

    // ── Step 2 + 3: Fit each pair ────────────────────────────────────────────
    let analyzer = TextAnalyzer::new(params.stemming);

    let mut positive_negative = PairModel::new(
        Pair::PositiveNegative,
        analyzer,
        LogisticRegression::new(
            params.lr_learning_rate,
            params.lr_max_iter,
            params.lr_tolerance,
            params.lr_c,
        ),
    );
    positive_negative.fit(&subsets.positive_negative)?;

    let mut positive_neutral =
        PairModel::new(Pair::PositiveNeutral, analyzer, MultinomialNb::new(params.nb_alpha));
    positive_neutral.fit(&subsets.positive_neutral)?;

    let mut negative_neutral = PairModel::new(
        Pair::NegativeNeutral,
        analyzer,
        LinearSvm::new(
            params.svm_c,
            params.svm_max_epochs,
            params.svm_tolerance,
            params.svm_fit_intercept,
            params.seed,
        ),
    );
    negative_neutral.fit(&subsets.negative_neutral)?;

    TrainedModel::from_parts(positive_negative, positive_neutral, negative_neutral)
}
