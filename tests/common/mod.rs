//! Common test utilities and data generators.

use simple_ols::Sample;

/// Deterministic pseudo-random value in [-1, 1].
#[allow(dead_code)]
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate y = intercept + slope * x + noise with x spread over [-1, 1].
#[allow(dead_code)]
pub fn generate_linear_samples(
    n_samples: usize,
    intercept: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> Vec<Sample> {
    let mut rng_state = seed;
    (0..n_samples)
        .map(|_| {
            let x = next_rand(&mut rng_state);
            let noise = noise_std * next_rand(&mut rng_state);
            Sample::new(x, intercept + slope * x + noise)
        })
        .collect()
}

/// Generate an exact line on an evenly spaced grid shifted by `offset`.
///
/// Large offsets stress the accumulation of the means and moments.
#[allow(dead_code)]
pub fn generate_offset_samples(
    n_samples: usize,
    offset: f64,
    step: f64,
    intercept: f64,
    slope: f64,
) -> Vec<Sample> {
    (0..n_samples)
        .map(|i| {
            let x = offset + step * i as f64;
            Sample::new(x, intercept + slope * x)
        })
        .collect()
}

/// Build samples from tuples.
#[allow(dead_code)]
pub fn samples(pairs: &[(f64, f64)]) -> Vec<Sample> {
    pairs.iter().copied().map(Sample::from).collect()
}

/// Approximate equality check for floating point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
