// src/lib.rs

//! `qcompare` - qubit state engine and search comparison model for teaching displays
//!
//! The crate holds the computation behind a "classical vs quantum" classroom
//! app: a one/two-qubit state engine driven by X, H and CNOT events, and the
//! step-count, scan and probability model of the search comparison panels.
//! Rendering is left entirely to the caller.

pub mod core;
pub mod config;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod search;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BasisLabel, QcError, QuantumState};
pub use config::EngineConfig;
pub use operations::{Gate, GateMatrix};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{GateSimulator, QuantumStateEngine, RegisterView, SimulatorSnapshot};
pub use search::{SearchProblem, SearchReport, Strategy};
pub use validation::{check_normalization, states_approx_equal};

// Example 1: Single qubit through X and H
// The engine is pure at its core: `apply_gate` returns a new state and the
// caller decides whether to keep it.
/// ```
/// use qcompare::{QuantumStateEngine, GateMatrix, BasisLabel, QcError};
///
/// let mut engine = QuantumStateEngine::initialize(1)?;
/// assert_eq!(engine.label().to_string(), "|0>");
///
/// engine.apply(&GateMatrix::pauli_x())?;
/// assert_eq!(engine.label().to_string(), "|1>");
///
/// // H|1> has two equal-magnitude amplitudes: not a basis state.
/// let next = QuantumStateEngine::apply_gate(engine.state(), &GateMatrix::hadamard())?;
/// assert_eq!(QuantumStateEngine::classify_basis_label(&next), BasisLabel::Superposition);
/// assert_eq!(engine.label().to_string(), "|1>"); // stored state untouched
///
/// // A 2x2 matrix cannot act on a two-qubit register.
/// let two = QuantumStateEngine::initialize(2)?;
/// let err = QuantumStateEngine::apply_gate(two.state(), &GateMatrix::pauli_x()).unwrap_err();
/// assert_eq!(err, QcError::DimensionMismatch { matrix_dim: 2, state_dim: 4 });
/// # Ok::<(), QcError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: The gate simulator's CNOT coupling
// The control register's label decides whether the target register moves.
/// ```
/// use qcompare::{GateSimulator, Gate, QcError};
///
/// let mut sim = GateSimulator::new()?;
/// sim.apply(Gate::PauliX)?;               // control |1>
/// let snap = sim.apply(Gate::Cnot)?;      // target |00> -> |10>
/// assert_eq!(snap.target.label.to_string(), "|10>");
///
/// sim.reset()?;
/// let snap = sim.apply(Gate::Cnot)?;      // control |0>: nothing happens
/// assert_eq!(snap.target.label.to_string(), "|00>");
/// # Ok::<(), QcError>(())
/// ```
#[doc(hidden)]
const _: () = ();
