//! Numeric constants shared by the engine and its validators.

/// Tolerances and supported register sizes
pub mod qc_constants {
    /// Default tolerance for the normalization invariant `Sum(|c_i|^2) == 1`.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Default tolerance when comparing two amplitude vectors component-wise.
    pub const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-12;
    /// Largest register the engine initializes.
    pub const MAX_QUBITS: usize = 2;
}
