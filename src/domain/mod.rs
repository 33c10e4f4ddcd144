// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what the classifier works with:
// the three sentiment labels, labelled training rows, the
// pairwise splits, prediction results and the error taxonomy.
//
// Nothing in here touches ndarray, the filesystem or clap.

/// Sentiment labels and the three label pairs
pub mod label;

/// Labelled corpus rows and prediction results
pub mod example;

/// Configuration and data error families
pub mod error;

/// Core abstractions (traits) that other layers implement
pub mod traits;

pub use error::{ConfigurationError, DataError, Result, SentimentError};
pub use example::{LabeledExample, PredictionResult, Verdicts};
pub use label::{Label, Pair};
