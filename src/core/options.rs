//! Estimator configuration.

use thiserror::Error;

/// How the means and second-moment sums are accumulated.
///
/// All three produce the same closed-form estimate; they differ in how much
/// rounding error reaches the slope for large or badly scaled data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accumulation {
    /// Textbook two-pass formula with left-to-right sums.
    ///
    /// Fine for small datasets; rounding error grows linearly with n.
    Naive,
    /// Two-pass formula with pairwise summation of every reduction.
    Pairwise,
    /// Single pass with running means and co-moments (Welford).
    ///
    /// This is the default. Constant predictors produce an exactly zero
    /// second moment.
    #[default]
    Welford,
}

/// Invalid estimator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("variance tolerance must be finite and non-negative, got {0}")]
    InvalidVarianceTolerance(f64),
}

/// Options controlling an OLS fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionOptions {
    /// Accumulation strategy for the moment sums.
    pub accumulation: Accumulation,
    /// Σ(x − x̄)² at or below this value is treated as zero predictor variance.
    pub variance_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            accumulation: Accumulation::Welford,
            variance_tolerance: 0.0,
        }
    }
}

impl RegressionOptions {
    /// Create a builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.variance_tolerance.is_finite() || self.variance_tolerance < 0.0 {
            return Err(OptionsError::InvalidVarianceTolerance(
                self.variance_tolerance,
            ));
        }
        Ok(())
    }
}

/// Builder for [`RegressionOptions`].
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Set the accumulation strategy.
    ///
    /// Default is `Welford`.
    pub fn accumulation(mut self, accumulation: Accumulation) -> Self {
        self.options.accumulation = accumulation;
        self
    }

    /// Set the zero-variance tolerance for the predictor.
    ///
    /// Default is 0.0, so only an exactly zero Σ(x − x̄)² is rejected.
    pub fn variance_tolerance(mut self, tol: f64) -> Self {
        self.options.variance_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
