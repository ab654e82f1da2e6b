// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qcompare::core::TypeName`
pub use error::QcError;
pub use state::{BasisLabel, QuantumState};

pub mod constants;
pub use constants::qc_constants::{DEFAULT_AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE, MAX_QUBITS};
