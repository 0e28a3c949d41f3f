//! Blood Pressure Trend Example
//!
//! Smooths a year of home systolic readings taken at irregular times, with a
//! few mistyped entries and duplicate timestamps, and prints the trend next
//! to the raw readings at the start of each month.
//!
//! - Irregular sampling and duplicate x-values
//! - Robustness iterations discounting mistyped readings
//! - Parallel vs sequential execution
//! - `ndarray` input

use fast_loess_trend::prelude::*;
use ndarray::Array1;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::time::Instant;

fn main() -> Result<(), LoessError> {
    println!("{}", "=".repeat(80));
    println!("Blood Pressure Trend");
    println!("{}", "=".repeat(80));
    println!();

    let (days, systolic) = generate_readings();

    example_1_robust_trend(&days, &systolic)?;
    example_2_parallel_vs_sequential(&days, &systolic)?;
    example_3_ndarray_input(&days, &systolic)?;

    Ok(())
}

/// Pseudo-random but reproducible readings: a slow decline after a
/// medication change around day 120, a weekly rhythm and measurement noise.
fn generate_readings() -> (Vec<f64>, Vec<f64>) {
    let mut days = Vec::new();
    let mut systolic = Vec::new();

    let mut rng = StdRng::seed_from_u64(2024);
    let noise_dist = Normal::new(0.0, 3.5).unwrap();
    let gap_dist = Uniform::new(0.25, 4.0).unwrap();

    let mut day: f64 = 0.0;
    while day < 365.0 {
        let baseline = if day < 120.0 {
            148.0
        } else {
            148.0 - 14.0 * (1.0 - (-(day - 120.0) / 40.0).exp())
        };
        let weekly = 2.5 * (day * 2.0 * std::f64::consts::PI / 7.0).sin();
        let noise = noise_dist.sample(&mut rng);

        days.push((day * 4.0_f64).round() / 4.0);
        systolic.push(baseline + weekly + noise);

        // Readings every 6 hours to 4 days
        day += gap_dist.sample(&mut rng);
    }

    // Mistyped entries (e.g. 213 instead of 132) and a repeated timestamp
    for &i in &[17, 90, 151] {
        if i < systolic.len() {
            systolic[i] += 80.0;
        }
    }
    if days.len() > 40 {
        days[40] = days[39];
    }

    (days, systolic)
}

/// Example 1: Robust Trend
/// Compares the robust trend with a single unweighted pass
fn example_1_robust_trend(days: &[f64], systolic: &[f64]) -> Result<(), LoessError> {
    println!("Example 1: Robust Trend");
    println!("{}", "-".repeat(80));

    let robust = Loess::new()
        .bandwidth(0.1)
        .iterations(3)
        .return_robustness_weights()
        .adapter(Batch)
        .build()?
        .fit(days, systolic)?;

    let plain = Loess::new()
        .bandwidth(0.1)
        .iterations(0)
        .adapter(Batch)
        .build()?
        .fit(days, systolic)?;

    println!("Readings: {}, trend points: {}", systolic.len(), robust.len());
    println!("{:>8} {:>12} {:>12}", "Day", "Robust", "Unweighted");
    for (i, (&x, &y)) in robust.x.iter().zip(&robust.y).enumerate() {
        if i % 12 == 0 {
            println!("{:>8.2} {:>12.1} {:>12.1}", x, y, plain.y[i]);
        }
    }

    if let Some(weights) = &robust.robustness_weights {
        let flagged = weights.iter().filter(|&&w| w < 0.1).count();
        println!("Readings flagged as outliers: {}", flagged);
    }

    println!();
    Ok(())
}

/// Example 2: Parallel vs Sequential
/// Both modes produce identical trends
fn example_2_parallel_vs_sequential(days: &[f64], systolic: &[f64]) -> Result<(), LoessError> {
    println!("Example 2: Parallel vs Sequential");
    println!("{}", "-".repeat(80));

    let start = Instant::now();
    let parallel = Loess::new().adapter(Batch).build()?.fit(days, systolic)?;
    let parallel_time = start.elapsed();

    let start = Instant::now();
    let sequential = Loess::new()
        .adapter(Batch)
        .parallel(false)
        .build()?
        .fit(days, systolic)?;
    let sequential_time = start.elapsed();

    println!("Parallel:   {:?}", parallel_time);
    println!("Sequential: {:?}", sequential_time);
    println!("Identical:  {}", parallel == sequential);

    println!();
    Ok(())
}

/// Example 3: ndarray Input
/// Arrays are accepted directly when contiguous
fn example_3_ndarray_input(days: &[f64], systolic: &[f64]) -> Result<(), LoessError> {
    println!("Example 3: ndarray Input");
    println!("{}", "-".repeat(80));

    let x = Array1::from_vec(days.to_vec());
    let y = Array1::from_vec(systolic.to_vec());

    let result = Loess::new()
        .bandwidth(0.2)
        .adapter(Batch)
        .build()?
        .fit(&x, &y)?;

    println!("{}", result);
    Ok(())
}
