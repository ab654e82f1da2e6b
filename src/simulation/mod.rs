// src/simulation/mod.rs

//! State evolution for the gate-simulator display.
//!
//! [`QuantumStateEngine`] owns one register and applies gate matrices to it.
//! [`GateSimulator`] pairs a one-qubit control register with a two-qubit target
//! register and turns gate-selection events into engine calls.

mod results;
pub mod engine;

pub use engine::QuantumStateEngine;
pub use results::{RegisterView, SimulatorSnapshot};

use tracing::debug;

use crate::circuits::Circuit;
use crate::config::EngineConfig;
use crate::core::{BasisLabel, QcError, QuantumState};
use crate::operations::Gate;

/// Basis index `|1>` of the control register.
const CONTROL_ONE: usize = 1;

/// Two independent registers driven by gate events.
///
/// X and H act on the control register. CNOT couples the registers through the
/// control's *classical* label only: when the control register is exactly `|1>`
/// the target register moves along the table
///
/// | target before | target after |
/// |---------------|--------------|
/// | `|00>`        | `|10>`       |
/// | `|01>`        | `|11>`       |
/// | `|10>`        | `|11>`       |
/// | `|11>`        | `|10>`       |
///
/// and in every other case (control `|0>`, control in superposition, target not
/// a basis state) the target is left as is. The two registers are never joined
/// into one four-dimensional state.
#[derive(Debug, Clone)]
pub struct GateSimulator {
    control: QuantumStateEngine,
    target: QuantumStateEngine,
    last_gate: Option<Gate>,
}

impl GateSimulator {
    /// Creates a simulator with default settings.
    pub fn new() -> Result<Self, QcError> {
        Self::with_config(EngineConfig::default())
    }

    /// Both registers start in their zero basis state: `|0>` and `|00>`.
    pub fn with_config(config: EngineConfig) -> Result<Self, QcError> {
        Ok(Self {
            control: QuantumStateEngine::with_config(1, config.clone())?,
            target: QuantumStateEngine::with_config(2, config)?,
            last_gate: None,
        })
    }

    /// Handles one gate-selection event and returns the updated view.
    pub fn apply(&mut self, gate: Gate) -> Result<SimulatorSnapshot, QcError> {
        match gate {
            Gate::PauliX | Gate::Hadamard => {
                self.control.apply(&gate.matrix())?;
            }
            Gate::Cnot => self.apply_cnot()?,
        }
        self.last_gate = Some(gate);
        debug!(%gate, control = %self.control.label(), target = %self.target.label(), "gate event");
        Ok(self.snapshot())
    }

    /// Applies every gate of `circuit` in order.
    ///
    /// Stops at the first failing gate; gates before it stay applied.
    pub fn run(&mut self, circuit: &Circuit) -> Result<SimulatorSnapshot, QcError> {
        for gate in circuit.gates() {
            self.apply(*gate)?;
        }
        Ok(self.snapshot())
    }

    /// Returns both registers to `|0>` / `|00>` and forgets the last gate.
    pub fn reset(&mut self) -> Result<SimulatorSnapshot, QcError> {
        self.control.reset(1)?;
        self.target.reset(2)?;
        self.last_gate = None;
        Ok(self.snapshot())
    }

    /// Copies of both registers and their labels.
    pub fn snapshot(&self) -> SimulatorSnapshot {
        SimulatorSnapshot {
            control: RegisterView {
                state: self.control.snapshot(),
                label: self.control.label(),
            },
            target: RegisterView {
                state: self.target.snapshot(),
                label: self.target.label(),
            },
            last_gate: self.last_gate,
        }
    }

    pub fn control(&self) -> &QuantumStateEngine {
        &self.control
    }

    pub fn target(&self) -> &QuantumStateEngine {
        &self.target
    }

    pub fn last_gate(&self) -> Option<Gate> {
        self.last_gate
    }

    fn apply_cnot(&mut self) -> Result<(), QcError> {
        let control_is_one = matches!(
            self.control.label(),
            BasisLabel::Basis { index: CONTROL_ONE, .. }
        );
        if !control_is_one {
            debug!("CNOT skipped: control register is not |1>");
            return Ok(());
        }
        if let Some(next) = self.target.state().basis_index().map(cnot_table) {
            self.target.replace_state(QuantumState::basis_unchecked(4, next))?;
        }
        Ok(())
    }
}

/// Target-register transition for CNOT with the control at `|1>`.
fn cnot_table(target: usize) -> usize {
    match target {
        0b00 => 0b10,
        0b01 => 0b11,
        0b10 => 0b11,
        _ => 0b10,
    }
}
