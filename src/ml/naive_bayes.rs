// ============================================================
// Layer 5 — Multinomial Naive Bayes
// ============================================================
// Count-based probabilistic classifier used for positive/neutral.
//
//   log P(c)          = ln(rows of c / rows)
//   log P(token | c)  = ln((count(token, c) + α) / (total(c) + α·V))
//
// Decision score = log-posterior of the scored class minus that of
// the reference class (evidence terms shared by both cancel out).
// A vector with no known tokens is therefore decided by the priors.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigurationError, Result};
use crate::ml::classifier::{check_dimension, check_training_set, not_fitted, BinaryClassifier};

/// Log-probabilities learned for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ClassLogProb {
    prior: f64,
    features: Array1<f64>,
}

impl ClassLogProb {
    fn joint(&self, x: &ArrayView1<'_, f64>) -> f64 {
        self.prior + self.features.dot(x)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Additive (Laplace/Lidstone) smoothing
    alpha: f64,
    reference: Option<ClassLogProb>,
    scored: Option<ClassLogProb>,
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            reference: None,
            scored: None,
        }
    }

    /// P(scored class | x), normalised over the two classes.
    pub fn predict_proba(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        let d = self.decision_function(features)?;
        Ok(1.0 / (1.0 + (-d).exp()))
    }

    fn class_log_prob(&self, rows: &Array2<f64>, n_total: usize) -> ClassLogProb {
        let counts = rows.sum_axis(Axis(0));
        let vocab = counts.len() as f64;
        let denominator = counts.sum() + self.alpha * vocab;
        ClassLogProb {
            prior: (rows.nrows() as f64 / n_total as f64).ln(),
            features: counts.mapv(|c| ((c + self.alpha) / denominator).ln()),
        }
    }
}

impl BinaryClassifier for MultinomialNb {
    const NAME: &'static str = "MultinomialNb";

    fn fit(&mut self, features: &Array2<f64>, targets: &[bool]) -> Result<()> {
        if !(self.alpha > 0.0) {
            return Err(ConfigurationError::InvalidParameter {
                name: "alpha",
                reason: "must be positive".to_string(),
            }
            .into());
        }
        check_training_set(Self::NAME, features, targets)?;

        let split = |want: bool| -> Vec<usize> {
            targets
                .iter()
                .enumerate()
                .filter(|(_, &t)| t == want)
                .map(|(i, _)| i)
                .collect()
        };
        let scored_rows = features.select(Axis(0), &split(true));
        let reference_rows = features.select(Axis(0), &split(false));

        self.scored = Some(self.class_log_prob(&scored_rows, targets.len()));
        self.reference = Some(self.class_log_prob(&reference_rows, targets.len()));

        tracing::debug!(
            "{} fitted: {} scored rows, {} reference rows, {} features",
            Self::NAME,
            scored_rows.nrows(),
            reference_rows.nrows(),
            features.ncols()
        );
        Ok(())
    }

    fn decision_function(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        let (Some(scored), Some(reference)) = (&self.scored, &self.reference) else {
            return Err(not_fitted(Self::NAME).into());
        };
        check_dimension(scored.features.len(), features.len())?;
        check_dimension(reference.features.len(), features.len())?;
        Ok(scored.joint(&features) - reference.joint(&features))
    }

    /// None until fitted, and for a model whose two classes disagree
    /// on width (only possible in a damaged model file).
    fn n_features(&self) -> Option<usize> {
        match (&self.scored, &self.reference) {
            (Some(s), Some(r)) if s.features.len() == r.features.len() => Some(s.features.len()),
            _ => None,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_keyword_counts_decide() {
        // columns: moon, crash, today
        let x = array![[2.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.0], [0.0, 2.0, 0.0]];
        let y = [true, true, false, false];

        let mut nb = MultinomialNb::default();
        nb.fit(&x, &y).unwrap();

        assert!(nb.predict(array![1.0, 0.0, 0.0].view()).unwrap());
        assert!(!nb.predict(array![0.0, 1.0, 0.0].view()).unwrap());
        assert!(nb.predict_proba(array![3.0, 0.0, 0.0].view()).unwrap() > 0.9);
    }

    #[test]
    fn test_zero_vector_with_equal_priors_is_a_tie() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let mut nb = MultinomialNb::default();
        nb.fit(&x, &[true, false]).unwrap();

        let score = nb.decision_function(array![0.0, 0.0].view()).unwrap();
        assert_eq!(score, 0.0);
        assert!(!nb.predict(array![0.0, 0.0].view()).unwrap());
    }

    #[test]
    fn test_zero_vector_follows_majority_prior() {
        let x = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let mut nb = MultinomialNb::default();
        nb.fit(&x, &[true, true, false]).unwrap();
        assert!(nb.predict(array![0.0, 0.0].view()).unwrap());
    }

    #[test]
    fn test_errors() {
        let nb = MultinomialNb::default();
        assert!(nb.decision_function(array![1.0].view()).unwrap_err().is_configuration());

        let mut nb = MultinomialNb::new(0.0);
        let x = array![[1.0], [0.0]];
        assert!(nb.fit(&x, &[true, false]).unwrap_err().is_configuration());

        let mut nb = MultinomialNb::default();
        nb.fit(&x, &[true, false]).unwrap();
        assert!(nb.decision_function(array![1.0, 2.0].view()).unwrap_err().is_configuration());
    }

    #[test]
    fn test_classes_of_different_width_fail_without_panicking() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let mut nb = MultinomialNb::default();
        nb.fit(&x, &[true, false]).unwrap();
        assert_eq!(nb.n_features(), Some(2));

        if let Some(reference) = nb.reference.as_mut() {
            reference.features = array![-1.0];
        }
        assert_eq!(nb.n_features(), None);
        assert!(nb.decision_function(array![1.0, 0.0].view()).unwrap_err().is_configuration());
    }
}
