// src/circuits/mod.rs

//! Ordered gate sequences for replaying a session on a [`crate::simulation::GateSimulator`].

use crate::operations::Gate;
use std::fmt;

/// An ordered list of gate events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a gate.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends every gate yielded by `gates`.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self { gates: iter.into_iter().collect() }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, gate) in self.gates.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", gate)?;
        }
        Ok(())
    }
}

/// Method-chaining builder for [`Circuit`].
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate to the circuit being built.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds several gates in order.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Consumes the builder and returns the finished circuit.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_symbols() {
        let c = CircuitBuilder::new()
            .add_gate(Gate::PauliX)
            .add_gates([Gate::Hadamard, Gate::Cnot])
            .build();
        assert_eq!(c.to_string(), "X -> H -> CNOT");
        assert_eq!(c.len(), 3);
        assert_eq!(Circuit::new().to_string(), "(empty)");
    }

    #[test]
    fn collect_from_iterator() {
        let c: Circuit = [Gate::Hadamard, Gate::Hadamard].into_iter().collect();
        assert_eq!(c.gates(), &[Gate::Hadamard, Gate::Hadamard]);
        assert!(!c.is_empty());
    }
}
