// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The application layer only talks to these; concrete loaders,
// models and stores live in Layers 4–6.

use std::path::Path;

use anyhow::Result;

use crate::domain::error;
use crate::domain::example::{LabeledExample, PredictionResult};
use crate::domain::label::Label;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can supply labelled training rows.
///
/// Implementations:
///   - CorpusLoader → JSON or CSV file on disk
///   - Vec<LabeledExample> → in-memory corpus (tests, embedding callers)
pub trait CorpusSource {
    fn load_all(&self) -> Result<Vec<LabeledExample>>;
}

impl CorpusSource for Vec<LabeledExample> {
    fn load_all(&self) -> Result<Vec<LabeledExample>> {
        Ok(self.clone())
    }
}

// ─── SentimentPredictor ───────────────────────────────────────────────────────
/// The single-text inference entry point.
pub trait SentimentPredictor {
    /// Classify one text, keeping the pairwise verdicts.
    fn predict(&self, text: &str) -> error::Result<PredictionResult>;

    /// Classify one text, returning only the final label.
    fn classify(&self, text: &str) -> error::Result<Label> {
        Ok(self.predict(text)?.label)
    }
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
pub trait Persistable: Sized {
    fn save(&self, path: &Path) -> Result<()>;

    fn load(path: &Path) -> Result<Self>;
}
