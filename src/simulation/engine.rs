// src/simulation/engine.rs
use num_complex::Complex;
use num_traits::Zero;
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::core::{BasisLabel, QcError, QuantumState, MAX_QUBITS};
use crate::operations::GateMatrix;
use crate::validation::check_normalization;

/// Owns one quantum register and evolves it by dense matrix-vector products.
///
/// Each register a display needs gets its own engine; engines share nothing.
/// The gate arithmetic itself lives in the pure [`QuantumStateEngine::apply_gate`],
/// and the engine only decides to store its result.
#[derive(Debug, Clone)]
pub struct QuantumStateEngine {
    state: QuantumState,
    num_qubits: usize,
    config: EngineConfig,
}

impl QuantumStateEngine {
    /// Creates a register of `num_qubits` qubits in the all-zero basis state.
    ///
    /// # Errors
    /// `QcError::UnsupportedQubitCount` unless `num_qubits` is 1 or 2.
    pub fn initialize(num_qubits: usize) -> Result<Self, QcError> {
        Self::with_config(num_qubits, EngineConfig::default())
    }

    /// As [`initialize`](Self::initialize), with explicit settings.
    pub fn with_config(num_qubits: usize, config: EngineConfig) -> Result<Self, QcError> {
        config.validate()?;
        let state = zero_state(num_qubits)?;
        debug!(num_qubits, "initialized register");
        Ok(Self { state, num_qubits, config })
    }

    /// Returns `matrix · state`.
    ///
    /// Pure: neither argument is modified, and the caller decides whether to keep
    /// the result.
    ///
    /// # Errors
    /// `QcError::DimensionMismatch` when the matrix and state dimensions differ.
    /// No partial product is computed in that case.
    pub fn apply_gate(state: &QuantumState, matrix: &GateMatrix) -> Result<QuantumState, QcError> {
        let dim = state.dim();
        if matrix.dim() != dim {
            return Err(QcError::DimensionMismatch {
                matrix_dim: matrix.dim(),
                state_dim: dim,
            });
        }

        let psi = state.amplitudes();
        let mut out = vec![Complex::zero(); dim];
        for (row, amp) in out.iter_mut().enumerate() {
            *amp = matrix
                .row(row)
                .iter()
                .zip(psi.iter())
                .map(|(m, c)| m * c)
                .sum();
        }
        Ok(QuantumState::from_vec_unchecked(out))
    }

    /// Applies `matrix` to the owned state and stores the result.
    ///
    /// On error the stored state is left untouched.
    pub fn apply(&mut self, matrix: &GateMatrix) -> Result<&QuantumState, QcError> {
        let next = Self::apply_gate(&self.state, matrix)?;
        trace!(before = %self.state, after = %next, "applied gate matrix");
        self.store(next);
        Ok(&self.state)
    }

    /// Replaces the owned state with `state`, which must have the register's dimension.
    pub fn replace_state(&mut self, state: QuantumState) -> Result<(), QcError> {
        if state.dim() != self.state.dim() {
            return Err(QcError::DimensionMismatch {
                matrix_dim: state.dim(),
                state_dim: self.state.dim(),
            });
        }
        self.store(state);
        Ok(())
    }

    /// Re-initializes the register, possibly with a different width.
    pub fn reset(&mut self, num_qubits: usize) -> Result<(), QcError> {
        self.state = zero_state(num_qubits)?;
        self.num_qubits = num_qubits;
        debug!(num_qubits, "reset register");
        Ok(())
    }

    /// Labels `state` as a basis ket when it equals one exactly, otherwise as
    /// `Superposition`.
    ///
    /// Basis vectors are tried in index order (`00, 01, 10, 11`) and the first
    /// exact match wins. No tolerance is applied: `H·H|0>` carries rounding
    /// error and is reported as `Superposition`.
    pub fn classify_basis_label(state: &QuantumState) -> BasisLabel {
        match state.basis_index() {
            Some(index) => BasisLabel::Basis {
                index,
                num_qubits: state.num_qubits(),
            },
            None => BasisLabel::Superposition,
        }
    }

    /// The label of the owned state.
    pub fn label(&self) -> BasisLabel {
        Self::classify_basis_label(&self.state)
    }

    /// Read-only view of the owned state.
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> QuantumState {
        self.state.clone()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn store(&mut self, next: QuantumState) {
        if self.config.check_normalization {
            if let Err(e) = check_normalization(&next, Some(self.config.norm_tolerance)) {
                warn!(error = %e, "register left the unit sphere");
            }
        }
        self.state = next;
    }
}

/// `|0...0>` for a supported register width.
fn zero_state(num_qubits: usize) -> Result<QuantumState, QcError> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(QcError::UnsupportedQubitCount { num_qubits });
    }
    Ok(QuantumState::basis_unchecked(1 << num_qubits, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{norm, states_approx_equal};
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn initialize_sets_zero_basis() -> Result<(), QcError> {
        let one = QuantumStateEngine::initialize(1)?;
        assert_eq!(one.state(), &QuantumState::basis(2, 0)?);
        let two = QuantumStateEngine::initialize(2)?;
        assert_eq!(two.state(), &QuantumState::basis(4, 0)?);
        assert_eq!(two.num_qubits(), 2);
        Ok(())
    }

    #[test]
    fn initialize_rejects_unsupported_widths() {
        for n in [0, 3, 10] {
            assert_eq!(
                QuantumStateEngine::initialize(n).unwrap_err(),
                QcError::UnsupportedQubitCount { num_qubits: n }
            );
        }
    }

    #[test]
    fn hadamard_on_zero() -> Result<(), QcError> {
        let zero = QuantumState::basis(2, 0)?;
        let plus = QuantumStateEngine::apply_gate(&zero, &GateMatrix::hadamard())?;
        let expected = QuantumState::from_amplitudes(vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ])?;
        assert!(states_approx_equal(&plus, &expected, Some(TEST_TOLERANCE)));
        assert_eq!(zero, QuantumState::basis(2, 0)?, "input must not be modified");
        Ok(())
    }

    #[test]
    fn cnot_matrix_on_two_qubit_basis() -> Result<(), QcError> {
        let cases = [(0, 0), (1, 1), (2, 3), (3, 2)];
        for (input, output) in cases {
            let s = QuantumState::basis(4, input)?;
            let out = QuantumStateEngine::apply_gate(&s, &GateMatrix::cnot())?;
            assert_eq!(out, QuantumState::basis(4, output)?, "CNOT|{:02b}>", input);
        }
        Ok(())
    }

    #[test]
    fn mismatch_leaves_stored_state() -> Result<(), QcError> {
        let mut engine = QuantumStateEngine::initialize(2)?;
        engine.apply(&GateMatrix::cnot())?;
        let before = engine.snapshot();
        let err = engine.apply(&GateMatrix::pauli_x()).unwrap_err();
        assert_eq!(err, QcError::DimensionMismatch { matrix_dim: 2, state_dim: 4 });
        assert_eq!(engine.state(), &before);
        Ok(())
    }

    #[test]
    fn apply_keeps_unit_norm() -> Result<(), QcError> {
        let mut engine = QuantumStateEngine::initialize(1)?;
        for m in [GateMatrix::hadamard(), GateMatrix::pauli_x(), GateMatrix::hadamard()] {
            engine.apply(&m)?;
            assert!((norm(engine.state()) - 1.0).abs() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn reset_changes_width() -> Result<(), QcError> {
        let mut engine = QuantumStateEngine::initialize(1)?;
        engine.apply(&GateMatrix::pauli_x())?;
        engine.reset(2)?;
        assert_eq!(engine.state(), &QuantumState::basis(4, 0)?);
        assert_eq!(engine.label().to_string(), "|00>");
        assert!(engine.reset(5).is_err());
        Ok(())
    }

    #[test]
    fn replace_state_checks_dimension() -> Result<(), QcError> {
        let mut engine = QuantumStateEngine::initialize(2)?;
        engine.replace_state(QuantumState::basis(4, 3)?)?;
        assert_eq!(engine.label().to_string(), "|11>");
        assert!(engine.replace_state(QuantumState::basis(2, 1)?).is_err());
        assert_eq!(engine.state(), &QuantumState::basis(4, 3)?);
        Ok(())
    }

    #[test]
    fn classify_labels_in_basis_order() -> Result<(), QcError> {
        let mut labels = Vec::new();
        for k in 0..4 {
            labels.push(QuantumStateEngine::classify_basis_label(&QuantumState::basis(4, k)?).to_string());
        }
        assert_eq!(labels, ["|00>", "|01>", "|10>", "|11>"]);
        Ok(())
    }
}
