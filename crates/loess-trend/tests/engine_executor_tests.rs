#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! ## Test Organization
//!
//! 1. **Pass Structure** - Per-point fits and injected passes
//! 2. **Iteration Control** - Convergence and robustness pass counting
//! 3. **Output Assembly** - Decentering and duplicate merging

use approx::assert_abs_diff_eq;

use loess_trend::internals::algorithms::regression::ZeroWeightFallback;
use loess_trend::internals::engine::executor::{LoessExecutor, SmoothPassInput};
use loess_trend::internals::engine::output::assemble_points;
use loess_trend::internals::primitives::errors::LoessError;
use loess_trend::internals::primitives::samples::SampleSet;
use loess_trend::internals::primitives::window::compute_windows;

fn wavy_samples() -> SampleSet<f64> {
    let x: Vec<f64> = (0..30).map(|i| f64::from(i) * 0.37).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() + 0.1 * (v * 7.0).cos()).collect();
    SampleSet::lenient(&x, &y, None)
}

// ============================================================================
// Pass Structure
// ============================================================================

/// Fitting each point from precomputed windows matches the sequential pass.
#[test]
fn test_fit_point_matches_sequential_pass() {
    let samples = wavy_samples();
    let n = samples.len();
    let robustness = vec![1.0; n];
    let input = SmoothPassInput {
        x: &samples.x,
        y: &samples.y,
        prior_weights: &samples.weights,
        robustness_weights: &robustness,
        window_size: 9,
        tolerance: 1e-24,
        zero_weight_fallback: ZeroWeightFallback::UseLocalMean,
    };

    let mut sequential = vec![0.0; n];
    let mut scratch = vec![0.0; n];
    LoessExecutor::smooth_pass(&input, &mut sequential, &mut scratch).unwrap();

    let windows = compute_windows(input.x, input.prior_weights, input.window_size).unwrap();
    let pointwise: Vec<f64> = windows
        .iter()
        .enumerate()
        .map(|(i, &w)| LoessExecutor::fit_point(&input, i, w, &mut scratch).unwrap())
        .collect();

    assert_eq!(sequential, pointwise);
}

/// An injected pass that defers to the sequential pass gives identical output.
#[test]
fn test_injected_pass_is_transparent() {
    fn delegating_pass(input: &SmoothPassInput<'_, f64>, fitted: &mut [f64]) -> Result<(), LoessError> {
        let mut scratch = vec![0.0; input.x.len()];
        LoessExecutor::smooth_pass(input, fitted, &mut scratch)
    }

    let samples = wavy_samples();
    let plain = LoessExecutor::new().run(&samples).unwrap();
    let injected = LoessExecutor::new()
        .custom_smooth_pass(Some(delegating_pass))
        .run(&samples)
        .unwrap();

    assert_eq!(plain.fitted, injected.fitted);
    assert_eq!(plain.robustness_weights, injected.robustness_weights);
}

// ============================================================================
// Iteration Control
// ============================================================================

#[test]
fn test_robustness_passes_are_counted() {
    let samples = wavy_samples();
    let output = LoessExecutor::new().iterations(4).run(&samples).unwrap();

    assert!(!output.converged);
    assert_eq!(output.iterations_used, 4);
    assert_eq!(output.window_size, 9);
}

#[test]
fn test_constant_series_converges() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y = vec![7.5; 10];
    let samples = SampleSet::lenient(&x, &y, None);
    let output = LoessExecutor::new().iterations(5).run(&samples).unwrap();

    assert!(output.converged);
    assert_eq!(output.iterations_used, 0);
    assert!(output.fitted.iter().all(|&v| v.abs() < 1e-12));
}

#[test]
fn test_return_original_fallback() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [4.0, 1.0, 3.0, 2.0];
    let samples = SampleSet::strict(&x, &y, Some(&[0.0; 4][..]));
    let output = LoessExecutor::new()
        .iterations(0)
        .zero_weight_fallback(ZeroWeightFallback::ReturnOriginal)
        .run(&samples)
        .unwrap();

    assert_eq!(output.fitted, y.to_vec());
}

#[test]
fn test_local_mean_fallback() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [4.0, 0.0, 2.0, 2.0];
    let samples = SampleSet::strict(&x, &y, Some(&[0.0; 4][..]));
    let output = LoessExecutor::new()
        .bandwidth(1.0)
        .iterations(0)
        .run(&samples)
        .unwrap();

    for v in output.fitted {
        assert_abs_diff_eq!(v, 2.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Output Assembly
// ============================================================================

#[test]
fn test_assembly_restores_original_coordinates() {
    let x = [3.0, 1.0, 2.0, 2.0];
    let y = [30.0, 10.0, 20.0, 24.0];
    let samples = SampleSet::lenient(&x, &y, None);
    let fitted: Vec<f64> = samples.y.clone();

    let (xs, ys) = assemble_points(&samples.x_original, &fitted, samples.y_mean);

    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_abs_diff_eq!(ys[0], 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ys[1], 22.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ys[2], 30.0, epsilon = 1e-12);
}
