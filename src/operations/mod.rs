// src/operations/mod.rs

//! The closed gate set a display layer can request, and the matrices behind it.
//!
//! A [`Gate`] is the event ("the user pressed *Apply H*"); a [`GateMatrix`] is
//! the linear map the engine multiplies the state by.

mod matrix;

pub use matrix::GateMatrix;

use std::fmt;

/// A gate-selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Bit flip on the control register.
    PauliX,
    /// Equal-weight superposition on the control register.
    Hadamard,
    /// Controlled flip of the target register, conditioned on the control register.
    ///
    /// Within [`crate::simulation::GateSimulator`] this is the lookup-table
    /// coupling between two independent registers, not a 4x4 product on a
    /// joint state. [`GateMatrix::cnot`] is the standard matrix for callers that
    /// drive an engine directly.
    Cnot,
}

impl Gate {
    /// Every gate, in the order the buttons are laid out.
    pub const ALL: [Gate; 3] = [Gate::PauliX, Gate::Hadamard, Gate::Cnot];

    /// The matrix representation of this gate.
    pub fn matrix(&self) -> GateMatrix {
        match self {
            Gate::PauliX => GateMatrix::pauli_x(),
            Gate::Hadamard => GateMatrix::hadamard(),
            Gate::Cnot => GateMatrix::cnot(),
        }
    }

    /// Short label drawn inside the gate box.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::PauliX => "X",
            Gate::Hadamard => "H",
            Gate::Cnot => "CNOT",
        }
    }

    /// Number of qubits the gate's matrix acts on.
    pub fn arity(&self) -> usize {
        match self {
            Gate::PauliX | Gate::Hadamard => 1,
            Gate::Cnot => 2,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
