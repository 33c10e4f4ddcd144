// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem concerns shared by the use cases:
//
//   checkpoint.rs — ModelStore: model.json and train_config.json
//                   in the model directory. A reloaded model
//                   predicts exactly what it predicted before it
//                   was saved.
//
//   metrics.rs    — confusion matrix / accuracy for the evaluate
//                   command, appended to metrics.csv per run.

/// Trained model and config persistence
pub mod checkpoint;

/// Evaluation metrics and their CSV logger
pub mod metrics;
