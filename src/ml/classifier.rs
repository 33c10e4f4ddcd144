// ============================================================
// Layer 5 — Binary Classifier Seam
// ============================================================
// The three pairwise models share one shape: fit on a count
// matrix with boolean targets (true = the pair's scored label),
// then score a single count vector. A positive score means the
// scored label; zero or below means the reference label.

use ndarray::{Array2, ArrayView1};

use crate::domain::error::{ConfigurationError, DataError, Result};

pub trait BinaryClassifier {
    /// Short name used in logs and errors
    const NAME: &'static str;

    /// Train on `features` (one row per example). Called once.
    fn fit(&mut self, features: &Array2<f64>, targets: &[bool]) -> Result<()>;

    /// Signed decision score for one feature vector.
    fn decision_function(&self, features: ArrayView1<'_, f64>) -> Result<f64>;

    /// Input width learned at fit time; None until fitted.
    fn n_features(&self) -> Option<usize>;

    fn predict(&self, features: ArrayView1<'_, f64>) -> Result<bool> {
        Ok(self.decision_function(features)? > 0.0)
    }
}

/// Shape checks shared by every `fit`.
pub(crate) fn check_training_set(
    classifier: &'static str,
    features: &Array2<f64>,
    targets: &[bool],
) -> Result<()> {
    if features.nrows() != targets.len() {
        return Err(DataError::LengthMismatch {
            features: features.nrows(),
            targets: targets.len(),
        }
        .into());
    }
    let scored = targets.iter().filter(|&&t| t).count();
    if scored == 0 || scored == targets.len() {
        return Err(DataError::SingleClass { classifier }.into());
    }
    Ok(())
}

/// Input width check shared by every `decision_function`.
pub(crate) fn check_dimension(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(ConfigurationError::DimensionMismatch { expected, got }.into());
    }
    Ok(())
}

pub(crate) fn not_fitted(component: &'static str) -> ConfigurationError {
    ConfigurationError::NotFitted { component }
}
