// ============================================================
// Layer 5 — Linear SVM
// ============================================================
// Maximum-margin linear classifier used for negative/neutral.
//
// Solves the L2-regularised hinge-loss problem
//   min ½||w||² + C Σ max(0, 1 − yᵢ (w·xᵢ + b))
// in its dual by coordinate descent (Hsieh et al., 2008):
//   for each example i, in a seeded random order per epoch,
//     G  = yᵢ (w·xᵢ + b) − 1
//     αᵢ ← clamp(αᵢ − G / Qᵢᵢ, 0, C)
//     w  += (Δαᵢ yᵢ) xᵢ
// stopping when the projected-gradient spread drops below `tolerance`.
//
// With `fit_intercept` the bias is learned as the weight of a
// constant extra feature (so it is regularised too). It is off by
// default, which puts the decision of an all-zero vector at exactly 0.

use ndarray::{Array1, Array2, ArrayView1};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigurationError, Result};
use crate::ml::classifier::{check_dimension, check_training_set, not_fitted, BinaryClassifier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSvm {
    /// Penalty on margin violations
    c: f64,
    max_epochs: usize,
    tolerance: f64,
    fit_intercept: bool,
    seed: u64,
    weights: Option<Array1<f64>>,
    intercept: f64,
}

impl Default for LinearSvm {
    fn default() -> Self {
        Self::new(1.0, 1000, 1e-4, false, 0)
    }
}

impl LinearSvm {
    pub fn new(c: f64, max_epochs: usize, tolerance: f64, fit_intercept: bool, seed: u64) -> Self {
        Self {
            c,
            max_epochs,
            tolerance,
            fit_intercept,
            seed,
            weights: None,
            intercept: 0.0,
        }
    }

    pub fn weights(&self) -> Option<&Array1<f64>> {
        self.weights.as_ref()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl BinaryClassifier for LinearSvm {
    const NAME: &'static str = "LinearSvm";

    fn fit(&mut self, features: &Array2<f64>, targets: &[bool]) -> Result<()> {
        if !(self.c > 0.0) {
            return Err(ConfigurationError::InvalidParameter {
                name: "c",
                reason: "must be positive".to_string(),
            }
            .into());
        }
        check_training_set(Self::NAME, features, targets)?;

        let bias_term = if self.fit_intercept { 1.0 } else { 0.0 };
        let y: Vec<f64> = targets.iter().map(|&t| if t { 1.0 } else { -1.0 }).collect();
        let q_diag: Vec<f64> = features
            .rows()
            .into_iter()
            .map(|row| row.dot(&row) + bias_term)
            .collect();

        let mut alpha = vec![0.0; y.len()];
        let mut w = Array1::<f64>::zeros(features.ncols());
        let mut b = 0.0;
        let mut order: Vec<usize> = (0..y.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut epochs = 0;

        for _ in 0..self.max_epochs {
            epochs += 1;
            order.shuffle(&mut rng);

            let mut pg_max = f64::NEG_INFINITY;
            let mut pg_min = f64::INFINITY;

            for &i in &order {
                // An all-zero row without intercept cannot move w
                if q_diag[i] == 0.0 {
                    continue;
                }
                let row = features.row(i);
                let g = y[i] * (w.dot(&row) + b) - 1.0;

                let pg = if alpha[i] == 0.0 {
                    g.min(0.0)
                } else if alpha[i] == self.c {
                    g.max(0.0)
                } else {
                    g
                };
                pg_max = pg_max.max(pg);
                pg_min = pg_min.min(pg);

                if pg.abs() > 1e-12 {
                    let old = alpha[i];
                    alpha[i] = (old - g / q_diag[i]).clamp(0.0, self.c);
                    let delta = (alpha[i] - old) * y[i];
                    w.scaled_add(delta, &row);
                    b += delta * bias_term;
                }
            }

            if pg_max - pg_min < self.tolerance {
                break;
            }
        }

        let support = alpha.iter().filter(|&&a| a > 0.0).count();
        tracing::debug!(
            "{} fitted in {} epochs with {} support vectors",
            Self::NAME,
            epochs,
            support
        );

        self.weights = Some(w);
        self.intercept = b;
        Ok(())
    }

    fn decision_function(&self, features: ArrayView1<'_, f64>) -> Result<f64> {
        let w = self.weights.as_ref().ok_or_else(|| not_fitted(Self::NAME))?;
        check_dimension(w.len(), features.len())?;
        Ok(w.dot(&features) + self.intercept)
    }

    fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(Array1::len)
    }
}
