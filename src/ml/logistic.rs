// ============================================================
// Layer 5 — Logistic Regression
// ============================================================
// Linear probabilistic classifier used for positive/negative.
//
// Objective (minimised by full-batch gradient descent):
//   mean log-loss + ||w||² / (2·C·n)
// The intercept is not penalised. Starting from zero weights with
// no sampling makes training fully deterministic.
//
// Decision score = w·x + b, the log-odds of the scored label.

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigurationError, Result};
use crate::ml::classifier::{check_dimension, check_training_set, not_fitted, BinaryClassifier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    learning_rate: f64,
    max_iter: usize,
    tolerance: f64,
    /// Inverse regularisation strength
    c: f64,
    coefficients: Option<Array1<f64>>,
    intercept: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.5, 1000, 1e-8, 1.0)
    }
}

impl LogisticRegression {
    pub fn new(learning_rate: f64, max_iter: usize, tolerance: f64, c: f64) -> Self {
        Self {
            learning_rate,
            max_iter,
            tolerance,
            c,
            coefficients: None,
            intercept: 0.0,
        }
    }

    pub fn coefficients(&self) -> Option<&Array1<f64>> {
        self.coefficients.as_ref()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// P(scored label | x)
    pub fn predict_proba(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        Ok(sigmoid(self.decision_function(features)?))
    }

    fn validate_params(&self) -> Result<()> {
        if !(self.learning_rate > 0.0) {
            return Err(invalid("learning_rate", "must be positive"));
        }
        if !(self.c > 0.0) {
            return Err(invalid("c", "must be positive"));
        }
        Ok(())
    }
}

impl BinaryClassifier for LogisticRegression {
    const NAME: &'static str = "LogisticRegression";

    fn fit(&mut self, features: &Array2<f64>, targets: &[bool]) -> Result<()> {
        self.validate_params()?;
        check_training_set(Self::NAME, features, targets)?;

        let n = features.nrows() as f64;
        let y: Array1<f64> = targets.iter().map(|&t| if t { 1.0 } else { 0.0 }).collect();
        let penalty = 1.0 / (self.c * n);

        let mut weights = Array1::<f64>::zeros(features.ncols());
        let mut bias = 0.0;
        let mut prev_cost = f64::INFINITY;
        let mut iterations = 0;

        for _ in 0..self.max_iter {
            iterations += 1;
            let predictions = (features.dot(&weights) + bias).mapv(sigmoid);

            let errors = &predictions - &y;
            let dw = features.t().dot(&errors) / n + &weights * penalty;
            let db = errors.sum() / n;

            weights.scaled_add(-self.learning_rate, &dw);
            bias -= self.learning_rate * db;

            let cost = log_loss(&y, &predictions) + 0.5 * penalty * weights.dot(&weights);
            if (prev_cost - cost).abs() < self.tolerance {
                break;
            }
            prev_cost = cost;
        }

        tracing::debug!("{} converged after {} iterations", Self::NAME, iterations);
        self.coefficients = Some(weights);
        self.intercept = bias;
        Ok(())
    }

    fn decision_function(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        let w = self.coefficients.as_ref().ok_or_else(|| not_fitted(Self::NAME))?;
        check_dimension(w.len(), features.len())?;
        Ok(w.dot(&features) + self.intercept)
    }

    fn n_features(&self) -> Option<usize> {
        self.coefficients.as_ref().map(Array1::len)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

fn log_loss(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
    let eps = 1e-15;
    let n = y_true.len() as f64;
    -y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&y, &p)| {
            let p = p.clamp(eps, 1.0 - eps);
            y * p.ln() + (1.0 - y) * (1.0 - p).ln()
        })
        .sum::<f64>()
        / n
}

fn invalid(name: &'static str, reason: &str) -> crate::domain::error::SentimentError {
    ConfigurationError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
    .into()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SentimentError;
    use ndarray::array;

    fn toy() -> (Array2<f64>, Vec<bool>) {
        // columns: good, bad
        let x = array![[2.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 2.0]];
        (x, vec![true, true, false, false])
    }

    #[test]
    fn test_separates_keywords() {
        let (x, y) = toy();
        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();

        assert!(model.predict(array![1.0, 0.0].view()).unwrap());
        assert!(!model.predict(array![0.0, 1.0].view()).unwrap());
        assert!(model.predict_proba(array![3.0, 0.0].view()).unwrap() > 0.5);
    }

    #[test]
    fn test_deterministic_fit() {
        let (x, y) = toy();
        let mut a = LogisticRegression::default();
        let mut b = LogisticRegression::default();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unfitted_and_wrong_dimension() {
        let model = LogisticRegression::default();
        assert!(model.predict(array![1.0].view()).unwrap_err().is_configuration());

        let (x, y) = toy();
        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();
        let err = model.decision_function(array![1.0, 0.0, 0.0].view()).unwrap_err();
        assert_eq!(
            err,
            SentimentError::from(ConfigurationError::DimensionMismatch { expected: 2, got: 3 })
        );
    }

    #[test]
    fn test_single_class_rejected() {
        let (x, _) = toy();
        let mut model = LogisticRegression::default();
        assert!(model.fit(&x, &[true; 4]).unwrap_err().is_data());
    }

    #[test]
    fn test_invalid_c_rejected() {
        let (x, y) = toy();
        let mut model = LogisticRegression::new(0.5, 10, 1e-8, 0.0);
        assert!(model.fit(&x, &y).unwrap_err().is_configuration());
    }
}
