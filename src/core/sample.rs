//! Paired observations.

use crate::solvers::RegressionError;
use faer::Col;

/// One observation: a predictor value and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Predictor value.
    pub x: f64,
    /// Outcome value.
    pub y: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both values are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.x, s.y)
    }
}

/// Zip a predictor column and an outcome column into samples.
///
/// # Errors
/// `DimensionMismatch` if the columns differ in length.
pub fn samples_from_columns(x: &Col<f64>, y: &Col<f64>) -> Result<Vec<Sample>, RegressionError> {
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }
    Ok((0..x.nrows()).map(|i| Sample::new(x[i], y[i])).collect())
}
