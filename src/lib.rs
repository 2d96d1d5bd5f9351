//! Closed-form ordinary least squares for simple linear regression.
//!
//! Given paired observations (x, y), this crate computes the intercept and
//! slope of the line that minimises the residual sum of squares, then uses
//! that line to produce fitted values and residuals. The estimate is exact
//! in one pass over the data; there is no iterative optimisation.
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_ols::prelude::*;
//!
//! let samples = [(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)];
//!
//! // Just the line
//! let line = simple_ols::fit(&samples)?;
//! let y_hat = simple_ols::predict(&line, 6.0)?;
//!
//! // Line plus fitted values, residuals and sums of squares
//! let fitted = OlsRegressor::builder()
//!     .accumulation(Accumulation::Welford)
//!     .build()
//!     .fit_samples(&samples.map(Sample::from))?;
//!
//! println!("{} (R² = {:.3})", fitted.line(), fitted.r_squared());
//! ```
//!
//! # Errors
//!
//! A line is only defined for at least two observations whose predictor
//! values are not all identical. Both cases are reported as
//! [`RegressionError`] values for which
//! [`is_domain_error`](RegressionError::is_domain_error) is true.

pub mod core;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Accumulation, Line, Observation, OptionsError, RegressionOptions,
        RegressionOptionsBuilder, RegressionResult, Sample,
    };
    pub use crate::solvers::{
        FittedOls, FittedRegressor, OlsRegressor, OlsRegressorBuilder, RegressionError,
        Regressor,
    };
}

pub use crate::core::{
    Accumulation, Line, Observation, OptionsError, RegressionOptions, RegressionOptionsBuilder,
    RegressionResult, Sample,
};
pub use crate::solvers::{
    fit, predict, residuals, FittedOls, FittedRegressor, OlsRegressor, OlsRegressorBuilder,
    RegressionError, Regressor,
};
