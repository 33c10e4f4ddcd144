// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores a TrainedModel as JSON.
//
// Layout of a model directory:
//   models/
//     model.json          ← the three (vocabulary, classifier) pairs
//     train_config.json   ← the TrainConfig that produced them
//     metrics.csv         ← written by the evaluate command
//
// serde_json is built with `float_roundtrip`, so every f64
// parameter reloads bit-for-bit. Vocabularies are plain
// token → index objects and are re-validated on load, as is
// the agreement between each vocabulary and its classifier.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::train_use_case::TrainConfig;
use crate::domain::traits::Persistable;
use crate::ml::model::TrainedModel;

pub const MODEL_FILE: &str = "model.json";
pub const CONFIG_FILE: &str = "train_config.json";

impl Persistable for TrainedModel {
    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write model to '{}'", path.display()))
    }

    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read model from '{}'", path.display()))?;
        let model: TrainedModel = serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid model file", path.display()))?;
        model.validate()?;
        Ok(model)
    }
}

/// Reads and writes the files of one model directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Create the directory if needed and write model.json.
    pub fn save_model(&self, model: &TrainedModel) -> Result<()> {
        self.ensure_dir()?;
        let path = self.model_path();
        model.save(&path)?;
        tracing::info!("Saved model to '{}'", path.display());
        Ok(())
    }

    pub fn load_model(&self) -> Result<TrainedModel> {
        let path = self.model_path();
        let model = TrainedModel::load(&path).with_context(|| {
            format!(
                "No usable model in '{}'. Have you run 'train' first?",
                self.dir.display()
            )
        })?;
        tracing::info!("Loaded model from '{}'", path.display());
        Ok(model)
    }

    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        self.ensure_dir()?;
        let path = self.config_path();
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.config_path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::LabeledExample;
    use crate::domain::label::Label;
    use crate::ml::trainer::train;

    fn model() -> TrainedModel {
        let corpus = vec![
            LabeledExample::new("great day", Label::Positive),
            LabeledExample::new("terrible loss", Label::Negative),
            LabeledExample::new("report filed", Label::Neutral),
        ];
        train(&corpus).unwrap()
    }

    #[test]
    fn test_model_roundtrip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nested"));
        let original = model();

        store.save_model(&original).unwrap();
        let reloaded = store.load_model().unwrap();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let cfg = TrainConfig {
            seed: 42,
            ..TrainConfig::default()
        };
        store.save_config(&cfg).unwrap();
        assert_eq!(store.load_config().unwrap(), cfg);
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ModelStore::new(dir.path()).load_model().is_err());
    }

    #[test]
    fn test_corrupt_vocabulary_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        store.save_model(&model()).unwrap();

        let mut json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.model_path()).unwrap()).unwrap();
        json["positive_negative"]["vectorizer"]["vocabulary"] = serde_json::json!({"a": 0, "b": 0});
        fs::write(store.model_path(), json.to_string()).unwrap();

        assert!(store.load_model().is_err());
    }

    #[test]
    fn test_mismatched_naive_bayes_widths_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        store.save_model(&model()).unwrap();

        let mut json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.model_path()).unwrap()).unwrap();
        json["positive_neutral"]["classifier"]["reference"]["features"] =
            serde_json::json!({"v": 1, "dim": [1], "data": [-1.0]});
        fs::write(store.model_path(), json.to_string()).unwrap();

        assert!(store.load_model().is_err());
    }
}
