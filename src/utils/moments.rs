//! Mean and co-moment accumulation for paired samples.
//!
//! The closed-form slope needs three reductions over the data: the means
//! x̄ and ȳ, the co-moment Σ(x−x̄)(y−ȳ) and the second moment Σ(x−x̄)².
//! How those sums are accumulated decides how much floating-point error
//! ends up in the slope.
//!
//! | Strategy   | Passes | Error growth | Notes                                  |
//! |------------|--------|--------------|----------------------------------------|
//! | `Naive`    | 2      | O(n)         | textbook formula, sequential sums      |
//! | `Pairwise` | 2      | O(log n)     | cascade summation of every reduction   |
//! | `Welford`  | 1      | O(n), small  | running means, no large partial sums   |
//!
//! # References
//!
//! - Welford, B. P. (1962). Note on a method for calculating corrected sums
//!   of squares and products. Technometrics, 4(3), 419–420.
//! - Higham, N. J. (1993). The accuracy of floating point summation.
//!   SIAM J. Sci. Comput., 14(4), 783–799.

use crate::core::{Accumulation, Sample};

/// Below this length pairwise summation falls back to a sequential loop.
const PAIRWISE_BLOCK: usize = 8;

/// First and second moments of a paired dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of samples accumulated.
    pub n: usize,
    /// Mean of the predictor values.
    pub x_mean: f64,
    /// Mean of the outcome values.
    pub y_mean: f64,
    /// Σ(x − x̄)².
    pub sxx: f64,
    /// Σ(x − x̄)(y − ȳ).
    pub sxy: f64,
    /// Σ(y − ȳ)².
    pub syy: f64,
}

impl Moments {
    /// Compute the moments of `samples` with the given strategy.
    ///
    /// Returns `None` for an empty slice.
    pub fn compute(samples: &[Sample], accumulation: Accumulation) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let moments = match accumulation {
            Accumulation::Naive => two_pass(samples, sequential_sum),
            Accumulation::Pairwise => two_pass(samples, pairwise_sum),
            Accumulation::Welford => welford(samples),
        };
        Some(moments)
    }
}

/// Sum a slice left to right.
pub fn sequential_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Sum a slice by recursive halving.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    if values.len() <= PAIRWISE_BLOCK {
        return sequential_sum(values);
    }
    let (left, right) = values.split_at(values.len() / 2);
    pairwise_sum(left) + pairwise_sum(right)
}

fn two_pass(samples: &[Sample], sum: fn(&[f64]) -> f64) -> Moments {
    let n = samples.len();
    let nf = n as f64;

    let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
    let x_mean = sum(&xs) / nf;
    let y_mean = sum(&ys) / nf;

    let dx: Vec<f64> = xs.iter().map(|&x| x - x_mean).collect();
    let dy: Vec<f64> = ys.iter().map(|&y| y - y_mean).collect();

    let xx: Vec<f64> = dx.iter().map(|d| d * d).collect();
    let xy: Vec<f64> = dx.iter().zip(dy.iter()).map(|(a, b)| a * b).collect();
    let yy: Vec<f64> = dy.iter().map(|d| d * d).collect();

    Moments {
        n,
        x_mean,
        y_mean,
        sxx: sum(&xx),
        sxy: sum(&xy),
        syy: sum(&yy),
    }
}

fn welford(samples: &[Sample]) -> Moments {
    let mut n = 0usize;
    let mut x_mean = 0.0;
    let mut y_mean = 0.0;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;

    for s in samples {
        n += 1;
        let k = n as f64;
        let dx = s.x - x_mean;
        let dy = s.y - y_mean;
        x_mean += dx / k;
        y_mean += dy / k;
        // Old deviation times new deviation; constant inputs stay at exactly zero.
        sxx += dx * (s.x - x_mean);
        sxy += dx * (s.y - y_mean);
        syy += dy * (s.y - y_mean);
    }

    Moments {
        n,
        x_mean,
        y_mean,
        sxx,
        sxy,
        syy,
    }
}
