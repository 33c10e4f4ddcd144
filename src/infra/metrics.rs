// ============================================================
// Layer 6 — Evaluation Metrics
// ============================================================
// Scores a model on held-out rows and records one CSV row per
// evaluate run.
//
// Confusion matrix rows are the true label, columns the
// predicted label, both indexed by the label code
// (NEGATIVE=0, POSITIVE=1, NEUTRAL=2).
//
// Output file: <model_dir>/metrics.csv
//
//   seed,train_size,val_size,accuracy,negative_recall,positive_recall,neutral_recall
//   0,960,240,0.712500,0.650000,0.701000,0.774000

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::label::Label;

pub const METRICS_FILE: &str = "metrics.csv";

// ─── ConfusionMatrix ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; 3]; 3],
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, actual: Label, predicted: Label) {
        self.counts[actual.code() as usize][predicted.code() as usize] += 1;
    }

    pub fn count(&self, actual: Label, predicted: Label) -> usize {
        self.counts[actual.code() as usize][predicted.code() as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        Label::ALL.iter().map(|&l| self.count(l, l)).sum()
    }

    /// 0.0 for an empty matrix
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    /// Share of `label` rows predicted as `label`.
    pub fn recall(&self, label: Label) -> f64 {
        let row: usize = Label::ALL.iter().map(|&p| self.count(label, p)).sum();
        ratio(self.count(label, label), row)
    }

    /// Share of `label` predictions that were right.
    pub fn precision(&self, label: Label) -> f64 {
        let column: usize = Label::ALL.iter().map(|&a| self.count(a, label)).sum();
        ratio(self.count(label, label), column)
    }
}

impl FromIterator<(Label, Label)> for ConfusionMatrix {
    fn from_iter<I: IntoIterator<Item = (Label, Label)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (actual, predicted) in iter {
            m.record(actual, predicted);
        }
        m
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

// ─── EvaluationMetrics ────────────────────────────────────────────────────────
/// One evaluate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub seed: u64,
    pub train_size: usize,
    pub val_size: usize,
    pub confusion: ConfusionMatrix,
}

impl EvaluationMetrics {
    pub fn accuracy(&self) -> f64 {
        self.confusion.accuracy()
    }
}

// ─── MetricsLogger ────────────────────────────────────────────────────────────
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;

        let csv_path = dir.join(METRICS_FILE);
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
            writeln!(
                f,
                "seed,train_size,val_size,accuracy,negative_recall,positive_recall,neutral_recall"
            )?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one run as a new row.
    pub fn log(&self, m: &EvaluationMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(
            f,
            "{},{},{},{:.6},{:.6},{:.6},{:.6}",
            m.seed,
            m.train_size,
            m.val_size,
            m.accuracy(),
            m.confusion.recall(Label::Negative),
            m.confusion.recall(Label::Positive),
            m.confusion.recall(Label::Neutral),
        )?;

        tracing::debug!("Logged evaluation: accuracy={:.4}", m.accuracy());
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
