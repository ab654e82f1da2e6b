// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

use super::error::QcError;

/// An ordered, fixed-length vector of complex amplitudes for a `k` qubit register.
///
/// The length is always `2^k`. Index `i` is the computational basis state whose
/// binary digits (most significant first) spell the qubit values, so for two
/// qubits the order is `|00>, |01>, |10>, |11>`.
///
/// States produced by the engine stay normalized because every predefined gate
/// is unitary. States built by hand through [`QuantumState::from_amplitudes`]
/// are accepted as given and can be checked with
/// [`crate::validation::check_normalization`].
#[derive(Debug, Clone, PartialEq)] // No Eq: amplitudes are floating point
pub struct QuantumState {
    amplitudes: Vec<Complex<f64>>,
}

impl QuantumState {
    /// The computational basis state `|index>` of dimension `dim`.
    ///
    /// # Errors
    /// `QcError::InvalidStateLength` unless `dim` is 2 or 4, and
    /// `QcError::BasisIndexOutOfRange` when `index >= dim`.
    pub fn basis(dim: usize, index: usize) -> Result<Self, QcError> {
        check_len(dim)?;
        if index >= dim {
            return Err(QcError::BasisIndexOutOfRange { index, dim });
        }
        Ok(Self::basis_unchecked(dim, index))
    }

    /// `basis` for callers that already hold a valid `dim` and `index`.
    pub(crate) fn basis_unchecked(dim: usize, index: usize) -> Self {
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::one();
        Self { amplitudes }
    }

    /// Builds a state from explicit amplitudes.
    ///
    /// The length must be 2 or 4 and every amplitude finite. The norm is not
    /// checked here.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, QcError> {
        check_len(amplitudes.len())?;
        if let Some(index) = amplitudes.iter().position(|c| !c.is_finite()) {
            return Err(QcError::NonFiniteAmplitude { index });
        }
        Ok(Self { amplitudes })
    }

    pub(crate) fn from_vec_unchecked(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Read-only view of the amplitudes in basis order.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of amplitudes (`2^k`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits `k` the state describes.
    pub fn num_qubits(&self) -> usize {
        qubits_for_dim(self.dim())
    }

    /// `|c_i|^2` for every basis state, in basis order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Index of the basis vector this state equals exactly, if any.
    pub fn basis_index(&self) -> Option<usize> {
        let one = Complex::<f64>::one();
        let zero = Complex::<f64>::zero();
        (0..self.dim()).find(|&k| {
            self.amplitudes
                .iter()
                .enumerate()
                .all(|(i, c)| if i == k { *c == one } else { *c == zero })
        })
    }
}

fn check_len(len: usize) -> Result<(), QcError> {
    if len == 2 || len == 4 {
        Ok(())
    } else {
        Err(QcError::InvalidStateLength { len })
    }
}

/// `log2(dim)` for the power-of-two dimensions used here.
fn qubits_for_dim(dim: usize) -> usize {
    if dim <= 1 {
        0
    } else {
        (usize::BITS - (dim - 1).leading_zeros()) as usize
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// Human-readable classification of a state for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisLabel {
    /// The state equals a computational basis vector exactly.
    Basis {
        /// Basis index in `0..2^num_qubits`
        index: usize,
        /// Register width, which sets how many digits the label prints
        num_qubits: usize,
    },
    /// Anything that is not exactly one basis vector.
    Superposition,
}

impl BasisLabel {
    /// `true` for the superposition marker.
    pub fn is_superposition(&self) -> bool {
        matches!(self, BasisLabel::Superposition)
    }
}

impl fmt::Display for BasisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisLabel::Basis { index, num_qubits } => {
                write!(f, "|{:0width$b}>", index, width = *num_qubits)
            }
            BasisLabel::Superposition => write!(f, "Superposition"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_state_layout() -> Result<(), QcError> {
        let s = QuantumState::basis(4, 2)?;
        assert_eq!(s.dim(), 4);
        assert_eq!(s.num_qubits(), 2);
        assert_eq!(s.basis_index(), Some(2));
        assert_eq!(s.probabilities(), vec![0.0, 0.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn basis_rejects_bad_dim_and_index() {
        assert_eq!(QuantumState::basis(3, 0), Err(QcError::InvalidStateLength { len: 3 }));
        assert_eq!(QuantumState::basis(8, 0), Err(QcError::InvalidStateLength { len: 8 }));
        assert_eq!(
            QuantumState::basis(4, 9),
            Err(QcError::BasisIndexOutOfRange { index: 9, dim: 4 })
        );
        assert!(QuantumState::basis(2, 2).is_err());
    }

    #[test]
    fn from_amplitudes_rejects_odd_lengths() {
        let err = QuantumState::from_amplitudes(vec![Complex::zero(); 3]).unwrap_err();
        assert_eq!(err, QcError::InvalidStateLength { len: 3 });
        assert_eq!(err.to_string(), "Invalid State Length: 3 amplitudes (expected 2 or 4)");
        assert!(QuantumState::from_amplitudes(vec![Complex::zero(); 8]).is_err());
    }

    #[test]
    fn from_amplitudes_rejects_nan() {
        let err = QuantumState::from_amplitudes(vec![Complex::zero(), Complex::new(f64::NAN, 0.0)])
            .unwrap_err();
        assert_eq!(err, QcError::NonFiniteAmplitude { index: 1 });
    }

    #[test]
    fn basis_index_requires_exact_match() {
        let near_one = QuantumState::from_vec_unchecked(vec![
            Complex::new(1.0 + 1e-15, 0.0),
            Complex::zero(),
        ]);
        assert_eq!(near_one.basis_index(), None);

        let phased = QuantumState::from_vec_unchecked(vec![Complex::zero(), -Complex::one()]);
        assert_eq!(phased.basis_index(), None);
    }

    #[test]
    fn label_display() {
        let one = BasisLabel::Basis { index: 1, num_qubits: 1 };
        let three = BasisLabel::Basis { index: 1, num_qubits: 2 };
        assert_eq!(one.to_string(), "|1>");
        assert_eq!(three.to_string(), "|01>");
        assert_eq!(BasisLabel::Superposition.to_string(), "Superposition");
    }
}
