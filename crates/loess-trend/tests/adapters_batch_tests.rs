//! Tests for the Batch adapter.
//!
//! ## Test Organization
//!
//! 1. **Trivial Inputs** - Empty, single and two-sample series
//! 2. **Smoothing Behavior** - Linear reproduction and outlier suppression
//! 3. **Input Preparation** - Filtering, sorting, merging and prior weights
//! 4. **Error Handling** - Invalid inputs and parameters

use approx::{assert_abs_diff_eq, assert_relative_eq};
use loess_trend::prelude::*;

/// Noisy line `y = x + 0.3 sin(1.7 x)` over 20 samples with a spike at x = 10.
fn spiked_line() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|&v| v + 0.3 * (v * 1.7).sin()).collect();
    y[10] = 100.0;
    (x, y)
}

// ============================================================================
// Trivial Inputs
// ============================================================================

#[test]
fn test_empty_input_is_insufficient() {
    let model = Loess::<f64>::new().adapter(Batch).build().unwrap();
    assert_eq!(model.fit(&[], &[]), Err(LoessError::InsufficientData));
}

#[test]
fn test_only_non_finite_samples_is_insufficient() {
    let model = Loess::new().adapter(Batch).build().unwrap();
    let result = model.fit(&[f64::NAN, 1.0], &[1.0, f64::INFINITY]);
    assert_eq!(result, Err(LoessError::InsufficientData));
}

#[test]
fn test_single_sample_is_returned() {
    let trend = smooth(&[(0.0, 5.0)], 0.3, 2, None).unwrap();
    assert_eq!(trend, vec![(0.0, 5.0)]);
}

#[test]
fn test_two_samples_are_returned_unchanged() {
    let trend = smooth(&[(0.0, 1.0), (1.0, 3.0)], 0.3, 2, None).unwrap();
    assert_eq!(trend, vec![(0.0, 1.0), (1.0, 3.0)]);
}

#[test]
fn test_two_samples_with_shared_x_are_not_merged() {
    let result = Loess::<f64>::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&[1.0, 1.0], &[2.0, 4.0])
        .unwrap();

    assert_eq!(result.x, vec![1.0, 1.0]);
    assert_eq!(result.y, vec![2.0, 4.0]);
}

// ============================================================================
// Smoothing Behavior
// ============================================================================

#[test]
fn test_linear_data_is_reproduced() {
    let samples: Vec<(f64, f64)> = (0..5).map(|i| (i as f64, i as f64)).collect();
    let trend = smooth(&samples, 0.6, 2, None).unwrap();

    assert_eq!(trend.len(), 5);
    for &(x, y) in &trend[1..4] {
        assert_abs_diff_eq!(y, x, epsilon = 1e-6);
    }
}

#[test]
fn test_spike_is_suppressed_by_robustness() {
    let (x, y) = spiked_line();

    let robust = Loess::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();
    let plain = Loess::new()
        .iterations(0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(robust.y[10] < 20.0, "robust fit at spike: {}", robust.y[10]);
    assert!(plain.y[10] > 30.0, "plain fit at spike: {}", plain.y[10]);
    assert_eq!(robust.iterations_used, 2);
    assert_eq!(robust.window_size, 6);
}

#[test]
fn test_spike_is_discounted_with_full_bandwidth() {
    let samples = [(0.0, 0.0), (1.0, 1.0), (2.0, 100.0), (3.0, 3.0), (4.0, 4.0)];
    let robust = smooth(&samples, 1.0, 2, None).unwrap();
    let plain = smooth(&samples, 1.0, 0, None).unwrap();

    assert!(robust[2].1 < plain[2].1 - 10.0);
}

#[test]
fn test_fit_is_deterministic() {
    let (x, y) = spiked_line();
    let model = Loess::new()
        .return_residuals()
        .return_robustness_weights()
        .adapter(Batch)
        .build()
        .unwrap();

    assert_eq!(model.fit(&x, &y).unwrap(), model.fit(&x, &y).unwrap());
}

#[test]
fn test_outlier_gets_floor_weight() {
    let (x, y) = spiked_line();
    let result = Loess::new()
        .outlier_floor(1e-8)
        .return_robustness_weights()
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let weights = result.robustness_weights.unwrap();
    let residuals = result.residuals.unwrap();
    assert_eq!(weights.len(), 20);
    assert_eq!(weights[10], 1e-8);
    assert!(residuals[10] > 80.0);
    assert!(weights.iter().all(|&w| w > 0.0 && w <= 1.0));
}

#[test]
fn test_small_bandwidth_clamps_window() {
    let samples: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, (i as f64 / 5.0).sin())).collect();
    let model = Loess::new().bandwidth(0.05).adapter(Batch).build().unwrap();
    let (x, y): (Vec<f64>, Vec<f64>) = samples.iter().copied().unzip();
    let result = model.fit(&x, &y).unwrap();

    assert_eq!(result.window_size, 2);
    assert!(result.y.iter().all(|v| v.is_finite()));
    // Two-point windows interpolate the samples themselves
    for (fit, orig) in result.y.iter().zip(&y) {
        assert_abs_diff_eq!(*fit, *orig, epsilon = 1e-9);
    }
}

#[test]
fn test_f32_smoothing() {
    let x: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let y: Vec<f32> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let result = Loess::new().bandwidth(0.5).adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    for (fit, orig) in result.y.iter().zip(&y) {
        assert_relative_eq!(*fit, *orig, epsilon = 1e-3);
    }
}

// ============================================================================
// Input Preparation
// ============================================================================

#[test]
fn test_non_finite_samples_are_dropped() {
    let x = [0.0, 1.0, f64::NAN, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 7.0, 2.0, f64::NEG_INFINITY, 4.0];
    let result = Loess::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.dropped, 2);
    assert_eq!(result.x, vec![0.0, 1.0, 2.0, 4.0]);
}

#[test]
fn test_unsorted_input_is_sorted() {
    let trend = smooth(&[(2.0, 1.0), (1.0, 3.0), (4.0, 5.0), (3.0, 7.0)], 0.5, 2, None).unwrap();
    let xs: Vec<f64> = trend.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_duplicate_x_values_are_merged() {
    let result = Loess::<f64>::new()
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&[1.0, 1.0, 2.0], &[2.0, 4.0, 3.0])
        .unwrap();

    assert_eq!(result.x, vec![1.0, 2.0]);
    assert_relative_eq!(result.y[0], 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.y[1], 3.0, epsilon = 1e-12);
    // Per-sample outputs are not merged
    assert_eq!(result.residuals.unwrap().len(), 3);
}

#[test]
fn test_repeated_x_with_tiny_accuracy() {
    // accuracy² underflows to zero; flat windows must still degenerate to a mean
    let result = Loess::<f64>::new()
        .bandwidth(0.5)
        .accuracy(1e-200)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&[1.0, 1.0, 1.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .unwrap();

    assert_eq!(result.x, vec![1.0, 2.0, 3.0]);
    assert!(result.y.iter().all(|v| v.is_finite()));
}

#[test]
fn test_values_near_the_float_limit_are_smoothed() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![1.0e308, 1.1e308, 1.2e308, 1.3e308, 1.4e308];

    let result = Loess::<f64>::new()
        .bandwidth(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    for (fitted, expected) in result.y.iter().zip(&y) {
        assert_relative_eq!(*fitted, *expected, max_relative = 1e-9);
    }
}

#[test]
fn test_zero_prior_weight_sample_is_ignored() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut y = x.clone();
    y[5] = 100.0;
    let mut w = vec![1.0; 10];
    w[5] = 0.0;

    let result = Loess::new()
        .iterations(0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit_weighted(&x, &y, &w)
        .unwrap();

    for (fit, xi) in result.y.iter().zip(&x) {
        assert_abs_diff_eq!(*fit, *xi, epsilon = 1e-9);
    }
}

#[test]
fn test_weighted_smooth_helper() {
    let samples: Vec<(f64, f64)> = (0..8).map(|i| (i as f64, 3.0 - i as f64)).collect();
    let weights = [1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 3.0, 1.0];
    let trend = smooth(&samples, 0.5, 1, Some(&weights[..])).unwrap();

    assert_eq!(trend.len(), 8);
    for &(x, y) in &trend {
        assert_abs_diff_eq!(y, 3.0 - x, epsilon = 1e-9);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_mismatched_lengths() {
    let model = Loess::<f64>::new().adapter(Batch).build().unwrap();
    assert_eq!(
        model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(LoessError::MismatchedLength {
            field: "y",
            expected: 3,
            got: 2
        })
    );
    assert!(matches!(
        model.fit_weighted(&[1.0, 2.0], &[1.0, 2.0], &[1.0]),
        Err(LoessError::MismatchedLength { field: "weights", .. })
    ));
}

#[test]
fn test_strict_policy_rejects_unsorted_input() {
    let model = Loess::<f64>::new().input_policy(Strict).adapter(Batch).build().unwrap();
    assert!(matches!(
        model.fit(&[1.0, 0.0], &[0.0, 1.0]),
        Err(LoessError::InvalidInput(_))
    ));
    assert!(matches!(
        model.fit(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 1.0]),
        Err(LoessError::InvalidInput(_))
    ));
}

#[test]
fn test_strict_policy_smooths_ordered_input() {
    let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|v| 4.0 - v).collect();
    let result = Loess::new()
        .input_policy(Strict)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.x, x);
    for (fit, orig) in result.y.iter().zip(&y) {
        assert_abs_diff_eq!(*fit, *orig, epsilon = 1e-9);
    }
}

#[test]
fn test_fail_fallback_on_weightless_series() {
    let model = Loess::<f64>::new()
        .zero_weight_fallback(Fail)
        .adapter(Batch)
        .build()
        .unwrap();
    let result = model.fit_weighted(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0], &[0.0; 4]);
    assert!(matches!(result, Err(LoessError::NumericalInstability(_))));
}

#[test]
fn test_invalid_parameters() {
    for bandwidth in [0.0, -0.1, 1.5, f64::NAN] {
        assert!(matches!(
            Loess::new().bandwidth(bandwidth).adapter(Batch).build(),
            Err(LoessError::InvalidParameter(_))
        ));
    }
    assert!(matches!(
        Loess::<f64>::new().iterations(1001).adapter(Batch).build(),
        Err(LoessError::InvalidParameter(_))
    ));
    assert!(matches!(
        Loess::<f64>::new().accuracy(0.0).adapter(Batch).build(),
        Err(LoessError::InvalidParameter(_))
    ));
    assert!(matches!(
        Loess::new().outlier_floor(f64::INFINITY).adapter(Batch).build(),
        Err(LoessError::InvalidParameter(_))
    ));
    assert!(matches!(
        smooth(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)], 2.0, 2, None),
        Err(LoessError::InvalidParameter(_))
    ));
}

#[test]
fn test_duplicate_parameter() {
    let result = Loess::<f64>::new()
        .iterations(2)
        .iterations(3)
        .adapter(Batch)
        .build();
    assert!(matches!(
        result,
        Err(LoessError::DuplicateParameter {
            parameter: "iterations"
        })
    ));
}
