// ============================================================
// Layer 3 — Corpus Rows and Predictions
// ============================================================

use serde::{Deserialize, Serialize};

use crate::domain::label::Label;

/// A labelled training row. Created once by the corpus loader
/// and only read after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub text: String,
    pub label: Label,
}

impl LabeledExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// The three binary verdicts that fed one final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdicts {
    pub positive_negative: Label,
    pub positive_neutral: Label,
    pub negative_neutral: Label,
}

/// Final label for one text, with the pairwise verdicts kept for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Label,
    pub verdicts: Verdicts,
}
