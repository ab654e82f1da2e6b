// src/validation/mod.rs

//! Checks on `QuantumState` values: normalization and approximate equality.

use crate::core::{QcError, QuantumState, DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE};

/// Euclidean norm `sqrt(Sum(|c_i|^2))` of the amplitude vector.
pub fn norm(state: &QuantumState) -> f64 {
    norm_sqr(state).sqrt()
}

fn norm_sqr(state: &QuantumState) -> f64 {
    state.amplitudes().iter().map(|c| c.norm_sqr()).sum()
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QuantumState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (e.g., 1e-9). Defaults are available.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QcError::Unnormalized)` otherwise, including a NaN or infinite norm.
pub fn check_normalization(state: &QuantumState, tolerance: Option<f64>) -> Result<(), QcError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = norm_sqr(state);
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > tolerance {
        Err(QcError::Unnormalized { norm_sq, tolerance })
    } else {
        Ok(())
    }
}

/// Component-wise comparison: same dimension and every `|a_i - b_i| <= tolerance`.
///
/// `tolerance` defaults to `DEFAULT_AMPLITUDE_TOLERANCE`.
pub fn states_approx_equal(a: &QuantumState, b: &QuantumState, tolerance: Option<f64>) -> bool {
    let tolerance = tolerance.unwrap_or(DEFAULT_AMPLITUDE_TOLERANCE);
    a.dim() == b.dim()
        && a.amplitudes()
            .iter()
            .zip(b.amplitudes().iter())
            .all(|(x, y)| (x - y).norm() <= tolerance)
}
