//! Worked examples for the closed-form OLS line.
//!
//! Expected values are derived by hand from
//! β₁ = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)² and β₀ = ȳ − β₁·x̄, and match
//! R's `coef(lm(y ~ x))`.

mod common;

use approx::assert_abs_diff_eq;
use simple_ols::{
    fit, predict, residuals, Accumulation, FittedRegressor, OlsRegressor, RegressionError,
};

const ALL_ACCUMULATIONS: [Accumulation; 3] = [
    Accumulation::Naive,
    Accumulation::Pairwise,
    Accumulation::Welford,
];

// ============================================================================
// Exact lines
// ============================================================================

#[test]
fn test_perfect_positive_line() {
    let data = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
    let line = fit(&data).expect("perfect line should fit");

    assert_abs_diff_eq!(line.intercept(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.slope(), 2.0, epsilon = 1e-12);

    let r = residuals(&line, &data).expect("residuals should compute");
    assert_eq!(r.nrows(), 3);
    for i in 0..3 {
        assert_abs_diff_eq!(r[i], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_constant_outcome() {
    // Variance only in x; the outcome is flat.
    let data = [(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)];
    let line = fit(&data).expect("flat outcome should fit");

    assert_abs_diff_eq!(line.intercept(), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.slope(), 0.0, epsilon = 1e-12);

    let r = residuals(&line, &data).expect("residuals should compute");
    for i in 0..3 {
        assert_abs_diff_eq!(r[i], 0.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Textbook example: x̄ = 3, ȳ = 4, Sxx = 10, Sxy = 9
// ============================================================================

#[test]
fn test_textbook_coefficients() {
    let data = common::samples(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)]);

    for acc in ALL_ACCUMULATIONS {
        let fitted = OlsRegressor::builder()
            .accumulation(acc)
            .build()
            .fit_samples(&data)
            .expect("textbook data should fit");

        assert_abs_diff_eq!(fitted.slope(), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(fitted.intercept(), 1.3, epsilon = 1e-12);

        let result = fitted.result();
        assert_abs_diff_eq!(result.sxx, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.sxy, 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.rss, 1.9, epsilon = 1e-12);
        assert_abs_diff_eq!(result.r_squared, 0.81, epsilon = 1e-12);
        assert_eq!(result.residual_df(), 3);
    }
}

#[test]
fn test_textbook_fitted_values_and_residuals() {
    let data = common::samples(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)]);
    let fitted = OlsRegressor::new().fit_samples(&data).unwrap();

    let expected_fitted = [2.2, 3.1, 4.0, 4.9, 5.8];
    let expected_residuals = [-0.2, -0.1, 1.0, -0.9, 0.2];

    for (i, row) in fitted.observations().enumerate() {
        assert_abs_diff_eq!(row.fitted, expected_fitted[i], epsilon = 1e-12);
        assert_abs_diff_eq!(row.residual, expected_residuals[i], epsilon = 1e-12);
        assert_abs_diff_eq!(fitted.fitted_values()[i], expected_fitted[i], epsilon = 1e-12);
    }
}

#[test]
fn test_candidate_lines_have_larger_rss() {
    // Steeper and shallower lines through the same data fit worse.
    let data = common::samples(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)]);
    let line = OlsRegressor::new().fit_line(&data).unwrap();
    let best = line.residual_sum_of_squares(&data).unwrap();

    for offset in [-0.1, 0.1, 0.2] {
        let candidate = simple_ols::Line::new(line.intercept(), line.slope() + offset);
        let rss = candidate.residual_sum_of_squares(&data).unwrap();
        assert!(rss > best, "offset {offset}: rss {rss} <= best {best}");
    }
}

#[test]
fn test_prediction_extrapolates() {
    let line = fit(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 6.0)]).unwrap();
    assert_abs_diff_eq!(predict(&line, 0.0).unwrap(), 1.3, epsilon = 1e-12);
    assert_abs_diff_eq!(predict(&line, 10.0).unwrap(), 10.3, epsilon = 1e-12);
    assert_abs_diff_eq!(predict(&line, -10.0).unwrap(), -7.7, epsilon = 1e-12);
}

// ============================================================================
// Domain errors
// ============================================================================

#[test]
fn test_single_observation() {
    let err = fit(&[(1.0, 2.0)]).unwrap_err();
    assert_eq!(
        err,
        RegressionError::InsufficientObservations { needed: 2, got: 1 }
    );
    assert!(err.is_domain_error());
}

#[test]
fn test_identical_predictor() {
    let err = fit(&[(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]).unwrap_err();
    assert_eq!(err, RegressionError::ZeroPredictorVariance);
    assert!(err.is_domain_error());
}

#[test]
fn test_two_points_define_the_line() {
    let line = fit(&[(0.0, 1.0), (2.0, 5.0)]).unwrap();
    assert_abs_diff_eq!(line.slope(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.intercept(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_non_finite_prediction_input() {
    let line = fit(&[(1.0, 2.0), (2.0, 4.0)]).unwrap();

    let err = predict(&line, f64::NAN).unwrap_err();
    assert!(matches!(err, RegressionError::NonFiniteValue { value } if value.is_nan()));
    assert!(!err.is_domain_error());

    assert_eq!(
        predict(&line, f64::NEG_INFINITY).unwrap_err(),
        RegressionError::NonFiniteValue {
            value: f64::NEG_INFINITY
        }
    );

    // Within a dataset the position is reported instead.
    let err = residuals(&line, &[(1.0, 2.0), (f64::INFINITY, 0.0)]).unwrap_err();
    assert_eq!(err, RegressionError::NonFiniteInput { index: 1 });
}

#[test]
fn test_error_messages() {
    let err = fit(&[(1.0, 2.0)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "insufficient observations: need at least 2, got 1"
    );
    let err = fit(&[(1.0, 1.0), (1.0, 2.0)]).unwrap_err();
    assert!(err.to_string().contains("zero variance"));
}

// ============================================================================
// R validation through the matrix API
// ============================================================================
//
// x <- c(1, 2, 3, 4, 5)
// y <- c(2.1, 4.3, 5.8, 8.2, 9.9)
// m <- lm(y ~ x)
// coef(m)       # 0.21 1.95
// residuals(m)  # -0.06 0.19 -0.26 0.19 -0.06
// deviance(m)   # 0.147

const X_SIMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const Y_SIMPLE: [f64; 5] = [2.1, 4.3, 5.8, 8.2, 9.9];

#[test]
fn test_r_lm_simple() {
    use faer::{Col, Mat};
    use simple_ols::Regressor;

    let x = Mat::from_fn(5, 1, |i, _| X_SIMPLE[i]);
    let y = Col::from_fn(5, |i| Y_SIMPLE[i]);

    let fitted = OlsRegressor::new().fit(&x, &y).expect("simple model should fit");

    assert_abs_diff_eq!(fitted.intercept(), 0.21, epsilon = 1e-10);
    assert_abs_diff_eq!(fitted.slope(), 1.95, epsilon = 1e-10);

    let expected = [-0.06, 0.19, -0.26, 0.19, -0.06];
    for (i, e) in expected.iter().enumerate() {
        assert_abs_diff_eq!(fitted.residuals()[i], *e, epsilon = 1e-10);
    }
    assert_abs_diff_eq!(fitted.result().rss, 0.147, epsilon = 1e-10);

    let preds = fitted.predict(&x).expect("prediction should succeed");
    for i in 0..5 {
        assert_abs_diff_eq!(preds[i], fitted.fitted_values()[i], epsilon = 1e-12);
    }
}
