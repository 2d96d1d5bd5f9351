//! Result of a simple linear regression fit.

use faer::Col;

/// Everything computed while fitting a line to the training data.
///
/// `fitted_values` and `residuals` are aligned with the input samples.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Intercept β₀.
    pub intercept: f64,
    /// Slope β₁.
    pub slope: f64,
    /// Mean of the predictor.
    pub x_mean: f64,
    /// Mean of the outcome.
    pub y_mean: f64,
    /// Σ(x − x̄)².
    pub sxx: f64,
    /// Σ(x − x̄)(y − ȳ).
    pub sxy: f64,
    /// Σ(y − ȳ)².
    pub syy: f64,
    /// Total sum of squares; equals `syy` for a model with an intercept.
    pub tss: f64,
    /// Σ(y − ŷ)², the residual sum of squares.
    pub rss: f64,
    /// Coefficient of determination, 1 − RSS/TSS.
    pub r_squared: f64,
    /// ŷ for each training sample.
    pub fitted_values: Col<f64>,
    /// y − ŷ for each training sample.
    pub residuals: Col<f64>,
    /// Number of observations.
    pub n_observations: usize,
}

impl RegressionResult {
    /// Residual degrees of freedom (n − 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Mean squared residual, RSS / n.
    pub fn mse(&self) -> f64 {
        if self.n_observations == 0 {
            return f64::NAN;
        }
        self.rss / self.n_observations as f64
    }

    /// Root mean squared residual.
    pub fn rmse(&self) -> f64 {
        self.mse().sqrt()
    }
}

/// R² from residual and total sums of squares.
///
/// A constant outcome has TSS = 0; the fit then counts as perfect only if
/// it reproduces every value exactly.
pub(crate) fn r_squared(rss: f64, tss: f64) -> f64 {
    if tss == 0.0 {
        if rss == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - rss / tss
    }
}

/// One row of the fitted table: observation, prediction and residual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Predictor value.
    pub x: f64,
    /// Observed outcome.
    pub y: f64,
    /// Fitted outcome ŷ.
    pub fitted: f64,
    /// y − ŷ.
    pub residual: f64,
}
