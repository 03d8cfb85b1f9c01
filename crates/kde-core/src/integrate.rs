//! Numerical integration over sampled functions
//!
//! All routines here work on a function known only at a set of grid points,
//! which is how density estimators report their output.

use crate::{Error, Result};

/// Integrate `f` sampled at `x` with the trapezoidal rule.
///
/// Computes `Σ (f[i] + f[i-1]) / 2 · (x[i] - x[i-1])` over consecutive grid
/// points. The grid is expected to be increasing but this is not checked;
/// an unordered grid yields a finite but meaningless value. Fewer than two
/// points integrate to zero.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `x` and `f` differ in length.
pub fn trapezoid(x: &[f64], f: &[f64]) -> Result<f64> {
    if x.len() != f.len() {
        return Err(Error::size_mismatch(x.len(), f.len(), "trapezoid"));
    }

    let sum = x
        .windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| (fs[1] + fs[0]) / 2.0 * (xs[1] - xs[0]))
        .sum();

    Ok(sum)
}

/// Integrated squared error between an estimated and a reference density
/// sampled on the same grid.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if either density does not match the
/// grid length.
pub fn integrated_squared_error(grid: &[f64], estimate: &[f64], truth: &[f64]) -> Result<f64> {
    if estimate.len() != grid.len() {
        return Err(Error::size_mismatch(
            grid.len(),
            estimate.len(),
            "estimated density",
        ));
    }
    if truth.len() != grid.len() {
        return Err(Error::size_mismatch(grid.len(), truth.len(), "true density"));
    }

    let squared_diff: Vec<f64> = estimate
        .iter()
        .zip(truth)
        .map(|(&e, &t)| (e - t).powi(2))
        .collect();

    trapezoid(grid, &squared_diff)
}

/// `n` evenly spaced points over `[start, end]`, endpoints included.
///
/// The last point is set to `end` exactly so grids built from the same
/// limits always share their edges.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}
