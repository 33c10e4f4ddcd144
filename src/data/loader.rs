// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads the labelled training corpus from disk.
//
// Supported formats (picked by file extension):
//   .json — an array of records
//   .csv  — a header row, then one record per line
//
// Record fields:
//   text  (alias full_text)        — missing or null → ""
//   label (alias SentimentoFinal)  — numeric code 0/1/2 or a label name
//
// Any row that cannot be read, or carries a label outside the three
// recognised values, fails the whole load. Row numbers in errors are
// 1-based and count data rows only.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::error::{DataError, SentimentError};
use crate::domain::example::LabeledExample;
use crate::domain::label::Label;
use crate::domain::traits::CorpusSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    Csv,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Some(CorpusFormat::Json),
            Some("csv") => Some(CorpusFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Code(f64),
    Name(String),
}

impl RawLabel {
    fn into_label(self) -> std::result::Result<Label, DataError> {
        match self {
            RawLabel::Code(v) if v.fract() == 0.0 => Label::from_code(v as i64),
            RawLabel::Code(v) => Err(DataError::UnknownLabel(v.to_string())),
            RawLabel::Name(s) => s.parse(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default, alias = "full_text")]
    text: Option<String>,
    #[serde(alias = "SentimentoFinal")]
    label: RawLabel,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default, alias = "full_text")]
    text: Option<String>,
    #[serde(alias = "SentimentoFinal")]
    label: String,
}

/// Loads a labelled corpus file. Implements `CorpusSource`.
pub struct CorpusLoader {
    path: PathBuf,
}

impl CorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for CorpusLoader {
    fn load_all(&self) -> Result<Vec<LabeledExample>> {
        let format = CorpusFormat::from_path(&self.path).with_context(|| {
            format!("Unsupported corpus format '{}': expected .json or .csv", self.path.display())
        })?;

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus '{}'", self.path.display()))?;

        let corpus = match format {
            CorpusFormat::Json => parse_json(&contents),
            CorpusFormat::Csv => parse_csv(&contents),
        }
        .with_context(|| format!("Invalid corpus '{}'", self.path.display()))?;

        tracing::info!("Loaded {} labelled rows from '{}'", corpus.len(), self.path.display());
        Ok(corpus)
    }
}

/// Parse a JSON array of corpus records.
pub fn parse_json(contents: &str) -> std::result::Result<Vec<LabeledExample>, SentimentError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(contents).map_err(|e| {
        DataError::MalformedRow {
            row: 0,
            reason: format!("expected a JSON array of records: {e}"),
        }
    })?;

    rows.into_iter()
        .enumerate()
        .map(|(i, value)| -> std::result::Result<LabeledExample, SentimentError> {
            let record: JsonRecord = serde_json::from_value(value).map_err(|e| {
                DataError::MalformedRow {
                    row: i + 1,
                    reason: e.to_string(),
                }
            })?;
            let label = record.label.into_label()?;
            Ok(LabeledExample::new(record.text.unwrap_or_default(), label))
        })
        .collect()
}

/// Parse CSV with a header row naming the text and label columns.
pub fn parse_csv(contents: &str) -> std::result::Result<Vec<LabeledExample>, SentimentError> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());

    reader
        .deserialize::<CsvRecord>()
        .enumerate()
        .map(|(i, record)| -> std::result::Result<LabeledExample, SentimentError> {
            let record = record.map_err(|e| DataError::MalformedRow {
                row: i + 1,
                reason: e.to_string(),
            })?;
            let label = record.label.parse::<Label>()?;
            Ok(LabeledExample::new(record.text.unwrap_or_default(), label))
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_codes_names_and_aliases() {
        let corpus = parse_json(
            r#"[
                {"text": "good", "label": 1},
                {"full_text": "bad", "SentimentoFinal": 0.0},
                {"text": "meh", "label": "neutral"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            corpus,
            vec![
                LabeledExample::new("good", Label::Positive),
                LabeledExample::new("bad", Label::Negative),
                LabeledExample::new("meh", Label::Neutral),
            ]
        );
    }

    #[test]
    fn test_json_missing_text_is_empty() {
        let corpus = parse_json(r#"[{"label": 2}, {"text": null, "label": 1}]"#).unwrap();
        assert_eq!(corpus[0].text, "");
        assert_eq!(corpus[1].text, "");
    }

    #[test]
    fn test_json_unknown_label_rejected() {
        let err = parse_json(r#"[{"text": "x", "label": 7}]"#).unwrap_err();
        assert_eq!(err, SentimentError::Data(DataError::UnknownLabel("7".to_string())));
    }

    #[test]
    fn test_json_malformed_row_numbered() {
        let err = parse_json(r#"[{"text": "x", "label": 1}, {"text": "y"}]"#).unwrap_err();
        match err {
            SentimentError::Data(DataError::MalformedRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_rows() {
        let corpus = parse_csv("full_text,SentimentoFinal\ngreat day,1\n,2\nawful,negative\n").unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus[0], LabeledExample::new("great day", Label::Positive));
        assert_eq!(corpus[1], LabeledExample::new("", Label::Neutral));
        assert_eq!(corpus[2].label, Label::Negative);
    }

    #[test]
    fn test_csv_unknown_label_rejected() {
        let err = parse_csv("text,label\nhello,5\n").unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CorpusFormat::from_path(Path::new("a/b.JSON")), Some(CorpusFormat::Json));
        assert_eq!(CorpusFormat::from_path(Path::new("b.csv")), Some(CorpusFormat::Csv));
        assert_eq!(CorpusFormat::from_path(Path::new("b.xlsx")), None);
    }

    #[test]
    fn test_loader_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(&path, r#"[{"text": "fine", "label": "POSITIVE"}]"#).unwrap();

        let corpus = CorpusLoader::new(&path).load_all().unwrap();
        assert_eq!(corpus, vec![LabeledExample::new("fine", Label::Positive)]);
    }
}
