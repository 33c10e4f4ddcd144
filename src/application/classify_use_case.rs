// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Loads a trained model once and classifies texts with it.
//
// Batch input (JSON) is either
//   ["first tweet", "second tweet", ...]
// or
//   [{"full_text": "first tweet", ...}, {"text": "second tweet"}, ...]
// Records without text are classified as the empty string.
//
// Batch output is a JSON array of {text, label, verdicts}, in
// input order. The output path must end in .json; that is
// checked before the model or the input is touched.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::example::{PredictionResult, Verdicts};
use crate::domain::label::Label;
use crate::infra::checkpoint::ModelStore;
use crate::ml::model::TrainedModel;

pub const DEFAULT_OUTFILE: &str = "output_sentiments.json";

/// One classified input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedText {
    pub text: String,
    pub label: Label,
    pub verdicts: Verdicts,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputRecord {
    Text(String),
    Record {
        #[serde(default, alias = "full_text")]
        text: Option<String>,
    },
}

pub struct ClassifyUseCase {
    model: TrainedModel,
}

impl ClassifyUseCase {
    /// Load the model saved in `model_dir`.
    pub fn new(model_dir: impl Into<PathBuf>) -> Result<Self> {
        let model = ModelStore::new(model_dir).load_model()?;
        Ok(Self { model })
    }

    pub fn from_model(model: TrainedModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn classify_text(&self, text: &str) -> Result<PredictionResult> {
        Ok(self.model.predict(text)?)
    }

    pub fn classify_batch(&self, texts: &[String]) -> Result<Vec<ClassifiedText>> {
        texts
            .iter()
            .map(|text| -> Result<ClassifiedText> {
                let result = self.classify_text(text)?;
                Ok(ClassifiedText {
                    text: text.clone(),
                    label: result.label,
                    verdicts: result.verdicts,
                })
            })
            .collect()
    }

    /// Classify every text in `infile` and write the results to `outfile`.
    pub fn classify_file(&self, infile: &Path, outfile: &Path) -> Result<Vec<ClassifiedText>> {
        check_output_path(outfile)?;

        let texts = read_input(infile)?;
        tracing::info!("Classifying {} texts from '{}'", texts.len(), infile.display());

        let results = self.classify_batch(&texts)?;
        write_output(outfile, &results)?;

        tracing::info!("Wrote {} results to '{}'", results.len(), outfile.display());
        Ok(results)
    }
}

/// Fail unless `path` has a .json extension.
pub fn check_output_path(path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if !is_json {
        bail!("Output file '{}' must have a .json extension", path.display());
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<String>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read input '{}'", path.display()))?;
    let records: Vec<InputRecord> = serde_json::from_str(&json).with_context(|| {
        format!(
            "'{}' must be a JSON array of strings or of objects with a text field",
            path.display()
        )
    })?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| match record {
            InputRecord::Text(text) => text,
            InputRecord::Record { text: Some(text) } => text,
            InputRecord::Record { text: None } => {
                tracing::warn!("Input row {} has no text; classifying it as empty", i + 1);
                String::new()
            }
        })
        .collect())
}

fn write_output(path: &Path, results: &[ClassifiedText]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).with_context(|| format!("Cannot write output '{}'", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::LabeledExample;
    use crate::ml::trainer::train;

    fn use_case() -> ClassifyUseCase {
        let corpus = vec![
            LabeledExample::new("great day", Label::Positive),
            LabeledExample::new("amazing", Label::Positive),
            LabeledExample::new("terrible loss", Label::Negative),
            LabeledExample::new("awful", Label::Negative),
            LabeledExample::new("the sky is blue", Label::Neutral),
            LabeledExample::new("report filed", Label::Neutral),
        ];
        ClassifyUseCase::from_model(train(&corpus).unwrap())
    }

    #[test]
    fn test_output_path_must_be_json() {
        assert!(check_output_path(Path::new("out.json")).is_ok());
        assert!(check_output_path(Path::new("dir/OUT.JSON")).is_ok());
        assert!(check_output_path(Path::new("out.csv")).is_err());
        assert!(check_output_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_bad_outfile_fails_before_reading_input() {
        let err = use_case()
            .classify_file(Path::new("does/not/exist.json"), Path::new("out.txt"))
            .unwrap_err();
        assert!(err.to_string().contains(".json"));
    }

    #[test]
    fn test_classify_file_accepts_both_input_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("in.json");
        let outfile = dir.path().join("out").join("result.json");
        fs::write(
            &infile,
            r#"["great", {"full_text": "zebras juggle"}, {"text": "great"}, {"id": 4}]"#,
        )
        .unwrap();

        let results = use_case().classify_file(&infile, &outfile).unwrap();
        let labels: Vec<Label> = results.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![Label::Positive, Label::Neutral, Label::Positive, Label::Neutral]);
        assert_eq!(results[3].text, "");

        let written: Vec<ClassifiedText> =
            serde_json::from_str(&fs::read_to_string(&outfile).unwrap()).unwrap();
        assert_eq!(written, results);
    }

    #[test]
    fn test_rejects_non_array_input() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("in.json");
        fs::write(&infile, r#"{"text": "great"}"#).unwrap();
        assert!(use_case().classify_file(&infile, &dir.path().join("o.json")).is_err());
    }
}
