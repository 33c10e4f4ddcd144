// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates a training run:
//
//   Step 1: Load the labelled corpus      (Layer 4 - data)
//   Step 2: Fit the three pairwise models (Layer 5 - ml)
//   Step 3: Save model, then config       (Layer 6 - infra)
//
// Nothing is written unless training succeeds, so a failed run
// never leaves a half-fitted model.json behind.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::CorpusLoader;
use crate::domain::traits::CorpusSource;
use crate::infra::checkpoint::ModelStore;
use crate::ml::model::TrainedModel;
use crate::ml::trainer::{train_with, HyperParams};

// ─── Training Configuration ──────────────────────────────────────────────────
// Saved next to the model as train_config.json so a run can be
// reproduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub corpus_path: String,
    pub model_dir: String,
    pub seed: u64,
    pub stemming: bool,
    pub lr_learning_rate: f64,
    pub lr_max_iter: usize,
    pub lr_tolerance: f64,
    pub lr_c: f64,
    pub nb_alpha: f64,
    pub svm_c: f64,
    pub svm_max_epochs: usize,
    pub svm_tolerance: f64,
    pub svm_fit_intercept: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        let p = HyperParams::default();
        Self {
            corpus_path: "data/corpus.json".to_string(),
            model_dir: "models".to_string(),
            seed: p.seed,
            stemming: p.stemming,
            lr_learning_rate: p.lr_learning_rate,
            lr_max_iter: p.lr_max_iter,
            lr_tolerance: p.lr_tolerance,
            lr_c: p.lr_c,
            nb_alpha: p.nb_alpha,
            svm_c: p.svm_c,
            svm_max_epochs: p.svm_max_epochs,
            svm_tolerance: p.svm_tolerance,
            svm_fit_intercept: p.svm_fit_intercept,
        }
    }
}

impl From<&TrainConfig> for HyperParams {
    fn from(c: &TrainConfig) -> Self {
        HyperParams {
            stemming: c.stemming,
            seed: c.seed,
            lr_learning_rate: c.lr_learning_rate,
            lr_max_iter: c.lr_max_iter,
            lr_tolerance: c.lr_tolerance,
            lr_c: c.lr_c,
            nb_alpha: c.nb_alpha,
            svm_c: c.svm_c,
            svm_max_epochs: c.svm_max_epochs,
            svm_tolerance: c.svm_tolerance,
            svm_fit_intercept: c.svm_fit_intercept,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Train on the configured corpus file.
    pub fn execute(&self) -> Result<TrainedModel> {
        let loader = CorpusLoader::new(&self.config.corpus_path);
        self.execute_with(&loader)
    }

    /// Train on any corpus source and persist the result.
    pub fn execute_with(&self, source: &dyn CorpusSource) -> Result<TrainedModel> {
        let cfg = &self.config;

        // ── Step 1: Load the corpus ──────────────────────────────────────────
        let corpus = source.load_all()?;

        // ── Step 2: Train ────────────────────────────────────────────────────
        let model = train_with(&corpus, &HyperParams::from(cfg))
            .with_context(|| format!("Training failed on {} rows", corpus.len()))?;

        // ── Step 3: Persist ──────────────────────────────────────────────────
        let store = ModelStore::new(&cfg.model_dir);
        // train_config.json only ever sits next to a model.json
        store.save_model(&model)?;
        store.save_config(cfg)?;

        Ok(model)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::LabeledExample;
    use crate::domain::label::Label;

    #[test]
    fn test_config_maps_to_hyperparams() {
        let cfg = TrainConfig {
            seed: 9,
            nb_alpha: 0.5,
            lr_tolerance: 1e-6,
            stemming: false,
            ..TrainConfig::default()
        };
        let p = HyperParams::from(&cfg);
        assert_eq!(p.seed, 9);
        assert_eq!(p.nb_alpha, 0.5);
        assert_eq!(p.lr_tolerance, 1e-6);
        assert!(!p.stemming);
        assert_eq!(p.svm_c, HyperParams::default().svm_c);
    }

    #[test]
    fn test_failed_training_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            model_dir: dir.path().join("m").to_string_lossy().into_owned(),
            ..TrainConfig::default()
        };
        let corpus = vec![
            LabeledExample::new("good", Label::Positive),
            LabeledExample::new("bad", Label::Negative),
        ];

        assert!(TrainUseCase::new(cfg).execute_with(&corpus).is_err());
        assert!(!dir.path().join("m").exists());
    }

    #[test]
    fn test_failed_model_write_leaves_no_config() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on model.json makes the model write fail
        std::fs::create_dir_all(dir.path().join("model.json")).unwrap();
        let cfg = TrainConfig {
            model_dir: dir.path().to_string_lossy().into_owned(),
            ..TrainConfig::default()
        };
        let corpus = vec![
            LabeledExample::new("good", Label::Positive),
            LabeledExample::new("bad", Label::Negative),
            LabeledExample::new("okay", Label::Neutral),
        ];

        assert!(TrainUseCase::new(cfg).execute_with(&corpus).is_err());
        assert!(!dir.path().join("train_config.json").exists());
    }
}
