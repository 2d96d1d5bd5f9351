//! The fitted line ŷ = β₀ + β₁·x.

use crate::core::Sample;
use crate::solvers::RegressionError;
use faer::Col;
use std::fmt;

/// Intercept and slope of a straight line.
///
/// Produced by the OLS fit, or built directly with [`Line::new`] to evaluate
/// an arbitrary candidate line against the same data. Values are read-only;
/// a new dataset needs a new fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    intercept: f64,
    slope: f64,
}

impl Line {
    /// Create a line from its intercept (β₀) and slope (β₁).
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// The intercept β₀: predicted outcome at x = 0.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The slope β₁: change in outcome per unit change in x.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Predict the outcome at `x`.
    ///
    /// # Errors
    /// `NonFiniteValue` for NaN/∞ `x`, `NonFiniteOutput` if the result overflows.
    pub fn predict(&self, x: f64) -> Result<f64, RegressionError> {
        if !x.is_finite() {
            return Err(RegressionError::NonFiniteValue { value: x });
        }
        let y_hat = self.intercept + self.slope * x;
        if !y_hat.is_finite() {
            return Err(RegressionError::NonFiniteOutput);
        }
        Ok(y_hat)
    }

    /// Residual y − ŷ for one sample.
    ///
    /// # Errors
    /// `NonFiniteValue` for NaN/∞ `x` or `y`, `NonFiniteOutput` on overflow.
    pub fn residual(&self, sample: Sample) -> Result<f64, RegressionError> {
        if !sample.y.is_finite() {
            return Err(RegressionError::NonFiniteValue { value: sample.y });
        }
        let r = sample.y - self.predict(sample.x)?;
        if !r.is_finite() {
            return Err(RegressionError::NonFiniteOutput);
        }
        Ok(r)
    }

    /// Residuals for every sample, in input order.
    ///
    /// # Errors
    /// `NonFiniteInput` naming the first offending sample.
    pub fn residuals(&self, samples: &[Sample]) -> Result<Col<f64>, RegressionError> {
        let mut out = Col::zeros(samples.len());
        for (i, &s) in samples.iter().enumerate() {
            out[i] = self.residual(s).map_err(|e| match e {
                RegressionError::NonFiniteValue { .. } => {
                    RegressionError::NonFiniteInput { index: i }
                }
                other => other,
            })?;
        }
        Ok(out)
    }

    /// Sum of squared residuals of this line over `samples`.
    pub fn residual_sum_of_squares(&self, samples: &[Sample]) -> Result<f64, RegressionError> {
        let residuals = self.residuals(samples)?;
        Ok(residuals.iter().map(|r| r * r).sum())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slope.is_sign_negative() {
            write!(f, "y = {} - {}x", self.intercept, -self.slope)
        } else {
            write!(f, "y = {} + {}x", self.intercept, self.slope)
        }
    }
}
