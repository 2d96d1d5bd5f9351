//! Core traits for regression estimators.

use crate::core::{OptionsError, RegressionResult};
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur while fitting or evaluating a line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("predictor has zero variance: all x values are identical")]
    ZeroPredictorVariance,

    #[error("non-finite value in sample {index}")]
    NonFiniteInput { index: usize },

    #[error("non-finite input value {value}")]
    NonFiniteValue { value: f64 },

    #[error("result is not finite")]
    NonFiniteOutput,

    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("simple regression needs exactly one feature, got {n_features}")]
    InvalidDesign { n_features: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

impl RegressionError {
    /// Whether the data itself cannot define a line (too few samples or a
    /// constant predictor), as opposed to malformed input or configuration.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientObservations { .. } | Self::ZeroPredictorVariance
        )
    }
}

/// A regression estimator that can be fit to data.
///
/// Fitting returns a separate fitted model that makes predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, 1)
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Predict for every row of a single-column matrix.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError>;

    /// Access the regression results.
    fn result(&self) -> &RegressionResult;

    /// Intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    /// Slope (convenience method).
    fn slope(&self) -> f64 {
        self.result().slope
    }

    /// R² on the training data (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate R² on new data.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        let n = y.nrows();
        if n == 0 {
            return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
        }
        let predictions = self.predict(x)?;

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        Ok(crate::core::r_squared(rss, tss))
    }
}
