// ============================================================
// Layer 5 — ML Layer
// ============================================================
// Vectorizers, the three binary classifiers, the arbitration
// rule, and the trainer that wires them together.
//
//   vectorizer.rs   — per-pair vocabulary and token counts
//   classifier.rs   — BinaryClassifier trait shared by all three
//   logistic.rs     — positive/negative
//   naive_bayes.rs  — positive/neutral
//   svm.rs          — negative/neutral
//   arbitration.rs  — three verdicts → one label
//   model.rs        — PairModel and TrainedModel
//   trainer.rs      — corpus → TrainedModel
//
// Only ndarray math lives here; nothing in this layer touches
// the filesystem.

pub mod vectorizer;

pub mod classifier;

pub mod logistic;

pub mod naive_bayes;

pub mod svm;

pub mod arbitration;

pub mod model;

pub mod trainer;
