// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Two fatal families:
//   ConfigurationError — the caller wired components wrong
//                        (used before fit, wrong vector size)
//   DataError          — the training data cannot produce a model
//
// Nothing in the core is retryable. Application code wraps these
// in anyhow with file/step context.

use thiserror::Error;

use crate::domain::label::{Label, Pair};

/// Programming errors: a component was used out of order or with
/// input of the wrong shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("{component} used before fit")]
    NotFitted { component: &'static str },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Training data that cannot be turned into a usable model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("pairwise subset {pair} is empty")]
    EmptySubset { pair: Pair },

    #[error("pairwise subset {pair} has no {label} examples")]
    MissingClass { pair: Pair, label: Label },

    #[error("unrecognised label `{0}`")]
    UnknownLabel(String),

    #[error("malformed corpus row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("{features} feature rows but {targets} targets")]
    LengthMismatch { features: usize, targets: usize },

    #[error("{classifier} needs examples of both classes")]
    SingleClass { classifier: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("data error: {0}")]
    Data(#[from] DataError),
}

impl SentimentError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SentimentError::Configuration(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, SentimentError::Data(_))
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
