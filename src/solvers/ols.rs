//! Ordinary Least Squares for a single predictor.
//!
//! Fits y = β₀ + β₁·x by minimising the residual sum of squares. With one
//! predictor the normal equations have the closed-form solution
//!
//! ```text
//! β₁ = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
//! β₀ = ȳ − β₁·x̄
//! ```
//!
//! so the fit is a single reduction over the data with no iteration. The
//! solution exists and is unique whenever the predictor is not constant.
//!
//! # References
//!
//! - Legendre, A. M. (1805). Nouvelles méthodes pour la détermination des
//!   orbites des comètes.
//! - Validated against R's `lm(y ~ x)`.

use crate::core::{
    r_squared, samples_from_columns, Accumulation, Line, Observation, RegressionOptions,
    RegressionResult, Sample,
};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{pairwise_sum, sequential_sum, Moments};
use faer::{Col, Mat};
use log::{debug, trace};

/// Minimum number of observations for a defined slope.
const MIN_OBSERVATIONS: usize = 2;

/// Fit the least-squares line to `samples` with default options.
///
/// Accepts `Sample`s or `(x, y)` tuples.
///
/// # Example
///
/// ```rust,ignore
/// let line = simple_ols::fit(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)])?;
/// assert!((line.slope() - 2.0).abs() < 1e-12);
/// ```
pub fn fit<S>(samples: &[S]) -> Result<Line, RegressionError>
where
    S: Copy + Into<Sample>,
{
    let samples = to_samples(samples);
    OlsRegressor::new().fit_line(&samples)
}

/// Predict the outcome at `x` from a fitted line.
pub fn predict(model: &Line, x: f64) -> Result<f64, RegressionError> {
    model.predict(x)
}

/// Residuals y − ŷ of `samples` under `model`, in input order.
pub fn residuals<S>(model: &Line, samples: &[S]) -> Result<Col<f64>, RegressionError>
where
    S: Copy + Into<Sample>,
{
    model.residuals(&to_samples(samples))
}

fn to_samples<S: Copy + Into<Sample>>(samples: &[S]) -> Vec<Sample> {
    samples.iter().map(|&s| s.into()).collect()
}

/// Simple linear regression estimator.
///
/// # Example
///
/// ```rust,ignore
/// use simple_ols::prelude::*;
///
/// let samples = [(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)]
///     .map(Sample::from);
///
/// let fitted = OlsRegressor::builder()
///     .accumulation(Accumulation::Pairwise)
///     .build()
///     .fit_samples(&samples)?;
///
/// println!("{}", fitted.line());
/// for row in fitted.observations() {
///     println!("{:>6.2} {:>6.2} {:>6.2} {:>6.2}", row.x, row.y, row.fitted, row.residual);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a regressor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a regressor from existing options.
    pub fn with_options(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// The options this regressor fits with.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Fit and return only the line.
    pub fn fit_line(&self, samples: &[Sample]) -> Result<Line, RegressionError> {
        self.estimate(samples).map(|(line, _)| line)
    }

    /// Fit the line and compute fitted values and residuals for `samples`.
    pub fn fit_samples(&self, samples: &[Sample]) -> Result<FittedOls, RegressionError> {
        let (line, moments) = self.estimate(samples)?;
        let n = samples.len();

        let mut fitted_values = Col::zeros(n);
        let mut residuals = Col::zeros(n);
        for (i, s) in samples.iter().enumerate() {
            fitted_values[i] = line.predict(s.x)?;
            residuals[i] = line.residual(*s)?;
        }

        let squared: Vec<f64> = residuals.iter().map(|r| r * r).collect();
        let rss = match self.options.accumulation {
            Accumulation::Naive => sequential_sum(&squared),
            Accumulation::Pairwise | Accumulation::Welford => pairwise_sum(&squared),
        };
        let tss = moments.syy;
        let r_squared = r_squared(rss, tss);
        if !rss.is_finite() || !tss.is_finite() || !r_squared.is_finite() {
            debug!("rejecting fit: rss={} tss={} r²={}", rss, tss, r_squared);
            return Err(RegressionError::NonFiniteOutput);
        }

        let result = RegressionResult {
            intercept: line.intercept(),
            slope: line.slope(),
            x_mean: moments.x_mean,
            y_mean: moments.y_mean,
            sxx: moments.sxx,
            sxy: moments.sxy,
            syy: moments.syy,
            tss,
            rss,
            r_squared,
            fitted_values,
            residuals,
            n_observations: n,
        };

        Ok(FittedOls {
            line,
            samples: samples.to_vec(),
            result,
        })
    }

    /// Fit on separate predictor and outcome columns.
    pub fn fit_1d(&self, x: &Col<f64>, y: &Col<f64>) -> Result<FittedOls, RegressionError> {
        let samples = samples_from_columns(x, y)?;
        self.fit_samples(&samples)
    }

    fn estimate(&self, samples: &[Sample]) -> Result<(Line, Moments), RegressionError> {
        self.options.validate()?;

        let n = samples.len();
        debug!(
            "fitting OLS line: n={}, accumulation={:?}",
            n, self.options.accumulation
        );

        if n < MIN_OBSERVATIONS {
            debug!("rejecting dataset: {} observation(s)", n);
            return Err(RegressionError::InsufficientObservations {
                needed: MIN_OBSERVATIONS,
                got: n,
            });
        }

        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            debug!("rejecting dataset: non-finite sample at index {}", index);
            return Err(RegressionError::NonFiniteInput { index });
        }

        // Identical x values are caught exactly; two-pass means of a constant
        // column can leave a tiny positive Σ(x − x̄)².
        let first_x = samples[0].x;
        if samples.iter().all(|s| s.x == first_x) {
            debug!("rejecting dataset: constant predictor x={}", first_x);
            return Err(RegressionError::ZeroPredictorVariance);
        }

        let moments = Moments::compute(samples, self.options.accumulation).ok_or(
            RegressionError::InsufficientObservations {
                needed: MIN_OBSERVATIONS,
                got: n,
            },
        )?;
        trace!("moments: {:?}", moments);

        if !moments.sxx.is_finite() || !moments.sxy.is_finite() {
            return Err(RegressionError::NonFiniteOutput);
        }
        if moments.sxx <= self.options.variance_tolerance {
            debug!(
                "rejecting dataset: sxx={} within tolerance {}",
                moments.sxx, self.options.variance_tolerance
            );
            return Err(RegressionError::ZeroPredictorVariance);
        }

        let slope = moments.sxy / moments.sxx;
        let intercept = moments.y_mean - slope * moments.x_mean;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(RegressionError::NonFiniteOutput);
        }

        let line = Line::new(intercept, slope);
        debug!("fitted {}", line);
        Ok((line, moments))
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        if x.ncols() != 1 {
            return Err(RegressionError::InvalidDesign {
                n_features: x.ncols(),
            });
        }
        let x_col = Col::from_fn(x.nrows(), |i| x[(i, 0)]);
        self.fit_1d(&x_col, y)
    }
}

/// A fitted simple linear regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    line: Line,
    samples: Vec<Sample>,
    result: RegressionResult,
}

impl FittedOls {
    /// The fitted line.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Fitted values for the training samples.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.result.fitted_values
    }

    /// Residuals for the training samples.
    pub fn residuals(&self) -> &Col<f64> {
        &self.result.residuals
    }

    /// Training samples the model was fitted on.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Training rows with their fitted value and residual, in input order.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.samples.iter().enumerate().map(|(i, s)| Observation {
            x: s.x,
            y: s.y,
            fitted: self.result.fitted_values[i],
            residual: self.result.residuals[i],
        })
    }

    /// Predict for a single x value.
    pub fn predict_single(&self, x: f64) -> Result<f64, RegressionError> {
        self.line.predict(x)
    }

    /// Predict for every value of a column.
    pub fn predict_1d(&self, x: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        let mut out = Col::zeros(x.nrows());
        for i in 0..x.nrows() {
            out[i] = self.line.predict(x[i]).map_err(|e| match e {
                RegressionError::NonFiniteValue { .. } => {
                    RegressionError::NonFiniteInput { index: i }
                }
                other => other,
            })?;
        }
        Ok(out)
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        if x.ncols() != 1 {
            return Err(RegressionError::InvalidDesign {
                n_features: x.ncols(),
            });
        }
        let x_col = Col::from_fn(x.nrows(), |i| x[(i, 0)]);
        self.predict_1d(&x_col)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    options: RegressionOptions,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the moment sums are accumulated.
    ///
    /// Default is `Welford`.
    pub fn accumulation(mut self, accumulation: Accumulation) -> Self {
        self.options.accumulation = accumulation;
        self
    }

    /// Set the tolerance below which Σ(x − x̄)² counts as zero.
    ///
    /// Default is 0.0. Checked when fitting.
    pub fn variance_tolerance(mut self, tol: f64) -> Self {
        self.options.variance_tolerance = tol;
        self
    }

    /// Build the regressor.
    ///
    /// Unlike [`RegressionOptionsBuilder::build`](crate::core::RegressionOptionsBuilder::build),
    /// this does not validate. Invalid options are reported by every fit as
    /// [`RegressionError::InvalidOptions`].
    pub fn build(self) -> OlsRegressor {
        OlsRegressor {
            options: self.options,
        }
    }
}
