// ============================================================
// tweet_sentiment — Tri-class Tweet Sentiment
// ============================================================
// Six layers, each only calling the ones below it:
//
//   Layer 1  cli          — clap commands (binary entry point)
//   Layer 2  application  — train / classify / evaluate use cases
//   Layer 3  domain       — Label, Pair, errors, core traits
//   Layer 4  data         — corpus loading and text pipeline
//   Layer 5  ml           — vectorizers, classifiers, arbitration
//   Layer 6  infra        — model store and metrics CSV
//
// Inference path:
//   text → TextAnalyzer → 3 × CountVectorizer → 3 × classifier
//        → arbitrate → Label

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use data::analyzer::TextAnalyzer;
pub use data::normalizer::normalize;
pub use data::stemmer::stem;
pub use domain::{
    ConfigurationError, DataError, Label, LabeledExample, Pair, PredictionResult, Result,
    SentimentError, Verdicts,
};
pub use domain::traits::{CorpusSource, Persistable, SentimentPredictor};
pub use infra::checkpoint::ModelStore;
pub use ml::arbitration::arbitrate;
pub use ml::classifier::BinaryClassifier;
pub use ml::model::{PairModel, TrainedModel};
pub use ml::trainer::{train, train_with, HyperParams};
pub use ml::vectorizer::{CountVectorizer, FeatureVector, Vocabulary};
