#![cfg(feature = "dev")]
//! Tests for the forward-only window tracker.
//!
//! ## Test Organization
//!
//! 1. **Span** - Window size from bandwidth
//! 2. **Sliding** - Forward movement over sorted data
//! 3. **Prior Weights** - Zero-weight samples are skipped
//! 4. **Edge Cases** - Invalid window sizes and radius handling

use approx::assert_relative_eq;
use loess_trend::internals::primitives::errors::LoessError;
use loess_trend::internals::primitives::window::{Window, compute_windows};

fn pairs(windows: &[Window]) -> Vec<(usize, usize)> {
    windows.iter().map(|w| (w.left, w.right)).collect()
}

// ============================================================================
// Span Tests
// ============================================================================

#[test]
fn test_span_floors_the_product() {
    assert_eq!(Window::calculate_span(20, 0.3), 6);
    assert_eq!(Window::calculate_span(8, 0.5), 4);
    assert_eq!(Window::calculate_span(7, 0.5), 3);
}

#[test]
fn test_span_has_a_minimum_of_two() {
    assert_eq!(Window::calculate_span(10, 0.05), 2);
    assert_eq!(Window::calculate_span(3, 0.01), 2);
}

// ============================================================================
// Sliding Tests
// ============================================================================

#[test]
fn test_window_jumps_across_a_gap() {
    let x = [0.0, 0.1, 0.2, 5.0, 5.1, 9.0, 9.5, 20.0];
    let windows = compute_windows(&x, &[1.0; 8], 3).unwrap();

    assert_eq!(
        pairs(&windows),
        vec![(0, 2), (0, 2), (0, 2), (3, 5), (3, 5), (4, 6), (4, 6), (5, 7)]
    );
}

#[test]
fn test_window_contains_the_current_point() {
    let x = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
    let windows = compute_windows(&x, &[1.0; 7], 3).unwrap();

    assert_eq!(
        pairs(&windows),
        vec![(0, 2), (0, 2), (1, 3), (1, 3), (4, 6), (4, 6), (4, 6)]
    );
    for (i, w) in windows.iter().enumerate() {
        assert!(w.left <= i && i <= w.right);
    }
}

#[test]
fn test_ties_move_the_window() {
    let x = [1.0, 1.0, 1.0, 1.0, 2.0];
    let windows = compute_windows(&x, &[1.0; 5], 2).unwrap();

    assert_eq!(pairs(&windows), vec![(0, 1), (1, 2), (2, 3), (2, 3), (3, 4)]);
}

// ============================================================================
// Prior Weight Tests
// ============================================================================

#[test]
fn test_zero_weight_samples_are_skipped() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let mut w = vec![1.0; 10];
    w[5] = 0.0;
    let windows = compute_windows(&x, &w, 3).unwrap();

    assert_eq!(
        pairs(&windows),
        vec![
            (0, 2),
            (0, 2),
            (1, 3),
            (2, 4),
            (3, 6),
            (4, 7),
            (6, 8),
            (6, 8),
            (7, 9),
            (7, 9)
        ]
    );
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_invalid_window_sizes() {
    let x = [0.0, 1.0, 2.0];
    let w = [1.0; 3];

    assert!(matches!(
        compute_windows(&x, &w, 1),
        Err(LoessError::InvalidParameter(_))
    ));
    assert!(matches!(
        compute_windows(&x, &w, 4),
        Err(LoessError::InvalidParameter(_))
    ));
}

#[test]
fn test_inverse_radius_uses_the_farther_edge() {
    let x = [0.0, 1.0, 4.0];
    let window = Window { left: 0, right: 2 };

    assert_relative_eq!(window.inverse_radius(&x, 1.0), 1.0 / 3.0);
    assert_relative_eq!(window.inverse_radius(&x, 0.0), 0.25);
}

#[test]
fn test_inverse_radius_of_a_collapsed_window() {
    let x = [2.0, 2.0, 2.0];
    let window = Window { left: 0, right: 2 };

    assert_eq!(window.inverse_radius(&x, 2.0), 1.0);
}
