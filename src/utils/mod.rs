//! Numerical helpers shared by the solvers.

mod moments;

pub use moments::{pairwise_sum, sequential_sum, Moments};
