//! Regression solvers.

mod ols;
mod traits;

pub use ols::{fit, predict, residuals, FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};
