// src/simulation/results.rs
use crate::core::{BasisLabel, QuantumState};
use crate::operations::Gate;
use std::fmt;

/// Read-only copy of one register, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterView {
    /// Amplitudes in basis order
    pub state: QuantumState,
    /// Exact basis label or the superposition marker
    pub label: BasisLabel,
}

/// What the gate-simulator display draws after each event.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorSnapshot {
    /// The single-qubit control register
    pub control: RegisterView,
    /// The two-qubit target register
    pub target: RegisterView,
    /// The most recent gate, `None` right after construction or reset
    pub last_gate: Option<Gate>,
}

impl fmt::Display for SimulatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gate Simulator:")?;
        match self.last_gate {
            Some(gate) => writeln!(f, "  Last Gate: {}", gate)?,
            None => writeln!(f, "  Last Gate: -")?,
        }
        writeln!(f, "  Qubit 1: {} {}", self.control.label, self.control.state)?;
        writeln!(f, "  Qubit 2: {} {}", self.target.label, self.target.state)?;
        Ok(())
    }
}
