//! Core types for simple linear regression.

mod line;
mod options;
mod result;
mod sample;

pub use line::Line;
pub use options::{Accumulation, OptionsError, RegressionOptions, RegressionOptionsBuilder};
pub use result::{Observation, RegressionResult};
pub(crate) use result::r_squared;
pub use sample::{samples_from_columns, Sample};
