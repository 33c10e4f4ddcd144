// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Measures how well the configured training run generalises:
//
//   Step 1: Load the labelled corpus          (Layer 4 - data)
//   Step 2: Seeded train/validation split     (Layer 4 - data)
//   Step 3: Train on the training part        (Layer 5 - ml)
//   Step 4: Classify every validation row     (Layer 5 - ml)
//   Step 5: Append the scores to metrics.csv  (Layer 6 - infra)
//
// The model trained here is thrown away; only the metrics are
// kept. Use `train` to produce the model that gets deployed.

use anyhow::{ensure, Context, Result};

use crate::application::train_use_case::TrainConfig;
use crate::data::loader::CorpusLoader;
use crate::data::splitter::split_train_val;
use crate::domain::label::Label;
use crate::domain::traits::CorpusSource;
use crate::infra::metrics::{ConfusionMatrix, EvaluationMetrics, MetricsLogger};
use crate::ml::trainer::{train_with, HyperParams};

pub struct EvaluateUseCase {
    config: TrainConfig,
    train_fraction: f64,
}

impl EvaluateUseCase {
    pub fn new(config: TrainConfig, train_fraction: f64) -> Self {
        Self {
            config,
            train_fraction,
        }
    }

    pub fn execute(&self) -> Result<EvaluationMetrics> {
        let loader = CorpusLoader::new(&self.config.corpus_path);
        self.execute_with(&loader)
    }

    pub fn execute_with(&self, source: &dyn CorpusSource) -> Result<EvaluationMetrics> {
        let cfg = &self.config;
        ensure!(
            self.train_fraction > 0.0 && self.train_fraction < 1.0,
            "train fraction must be strictly between 0 and 1, got {}",
            self.train_fraction
        );

        // ── Step 1: Load ─────────────────────────────────────────────────────
        let corpus = source.load_all()?;

        // ── Step 2: Split ────────────────────────────────────────────────────
        let (train_rows, val_rows) = split_train_val(corpus, self.train_fraction, cfg.seed);
        ensure!(!val_rows.is_empty(), "Validation split is empty; the corpus is too small");
        tracing::info!("Split: {} train, {} validation", train_rows.len(), val_rows.len());

        // ── Step 3: Train ────────────────────────────────────────────────────
        let model = train_with(&train_rows, &HyperParams::from(cfg))
            .context("Training on the training split failed")?;

        // ── Step 4: Score ────────────────────────────────────────────────────
        let confusion = val_rows
            .iter()
            .map(|row| -> Result<(Label, Label)> { Ok((row.label, model.classify(&row.text)?)) })
            .collect::<Result<ConfusionMatrix>>()?;

        let metrics = EvaluationMetrics {
            seed: cfg.seed,
            train_size: train_rows.len(),
            val_size: val_rows.len(),
            confusion,
        };
        tracing::info!(
            "Validation accuracy {:.4} ({}/{})",
            metrics.accuracy(),
            confusion.correct(),
            confusion.total()
        );

        // ── Step 5: Log ──────────────────────────────────────────────────────
        MetricsLogger::new(&cfg.model_dir)?.log(&metrics)?;

        Ok(metrics)
    }
}
