//! Error handling logic

use thiserror::Error;

/// Errors reported by the state engine, the gate simulator and the search model.
///
/// Every failure is returned synchronously to the caller. Nothing in this crate
/// truncates, pads or reinterprets an input to make it fit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QcError {
    /// A gate matrix was applied to a state of a different dimension.
    #[error("Dimension Mismatch: {matrix_dim}x{matrix_dim} matrix cannot act on a state of dimension {state_dim}")]
    DimensionMismatch {
        /// Row (and column) count of the offending matrix
        matrix_dim: usize,
        /// Length of the state vector it was applied to
        state_dim: usize,
    },

    /// A register was requested with a qubit count outside the supported set.
    #[error("Unsupported Qubit Count: {num_qubits} (registers hold 1 or 2 qubits)")]
    UnsupportedQubitCount {
        /// The rejected qubit count
        num_qubits: usize,
    },

    /// An amplitude vector whose length is not 2 or 4.
    #[error("Invalid State Length: {len} amplitudes (expected 2 or 4)")]
    InvalidStateLength {
        /// The rejected length
        len: usize,
    },

    /// A basis index that does not exist in a register of the given dimension.
    #[error("Basis Index Out Of Range: |{index}> does not exist in dimension {dim}")]
    BasisIndexOutOfRange {
        /// The requested basis index
        index: usize,
        /// Dimension of the register
        dim: usize,
    },

    /// An amplitude that is NaN or infinite.
    #[error("Non-Finite Amplitude at index {index}")]
    NonFiniteAmplitude {
        /// Position of the first offending amplitude
        index: usize,
    },

    /// Search inputs outside `0 <= target < size`.
    #[error("Invalid Search Parameters: target {target} is not within 0..{size}")]
    InvalidSearchParameters {
        /// Number of items searched (N)
        size: usize,
        /// Index of the marked item (M)
        target: usize,
    },

    /// A graph or search size outside `1..=max`.
    #[error("Size Out Of Range: {size} is not within 1..={max}")]
    SizeOutOfRange {
        /// The rejected size
        size: usize,
        /// Largest accepted size
        max: usize,
    },

    /// A state whose squared norm drifted away from 1.
    #[error("Unnormalized State: Sum(|c_i|^2) = {norm_sq} (Deviation > {tolerance})")]
    Unnormalized {
        /// The measured squared norm
        norm_sq: f64,
        /// The tolerance that was exceeded
        tolerance: f64,
    },

    /// Configuration values out of range.
    #[error("Invalid Config: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },
}
