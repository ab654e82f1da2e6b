// src/operations/matrix.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// An immutable square matrix of complex entries, stored row-major.
///
/// Matrices only enter the crate through the fixed-size `From` impls and the
/// named constructors below, so they are square by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GateMatrix {
    dim: usize,
    entries: Vec<Complex<f64>>,
}

impl GateMatrix {
    /// Pauli-X: swaps the amplitudes of `|0>` and `|1>`.
    pub fn pauli_x() -> Self {
        let z = Complex::<f64>::zero();
        let o = Complex::<f64>::one();
        Self::from([[z, o], [o, z]])
    }

    /// Hadamard: `(1/sqrt(2)) [[1, 1], [1, -1]]`.
    pub fn hadamard() -> Self {
        let s = Complex::new(FRAC_1_SQRT_2, 0.0);
        Self::from([[s, s], [s, -s]])
    }

    /// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
    pub fn cnot() -> Self {
        let z = Complex::<f64>::zero();
        let o = Complex::<f64>::one();
        Self::from([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, z, o],
            [z, z, o, z],
        ])
    }

    /// The `dim x dim` identity.
    pub fn identity(dim: usize) -> Self {
        let mut entries = vec![Complex::zero(); dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = Complex::one();
        }
        Self { dim, entries }
    }

    /// Row (and column) count.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`. Panics when out of range, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.entries[row * self.dim + col]
    }

    /// One row of the matrix.
    pub fn row(&self, row: usize) -> &[Complex<f64>] {
        &self.entries[row * self.dim..(row + 1) * self.dim]
    }

    /// The conjugate transpose `M†`.
    pub fn adjoint(&self) -> Self {
        let n = self.dim;
        let mut entries = vec![Complex::zero(); n * n];
        for r in 0..n {
            for c in 0..n {
                entries[c * n + r] = self.get(r, c).conj();
            }
        }
        Self { dim: n, entries }
    }

    /// Matrix product `self · rhs`, or `None` when the dimensions differ.
    pub fn matmul(&self, rhs: &GateMatrix) -> Option<Self> {
        if self.dim != rhs.dim {
            return None;
        }
        let n = self.dim;
        let mut entries = vec![Complex::zero(); n * n];
        for r in 0..n {
            for c in 0..n {
                entries[r * n + c] = (0..n).map(|k| self.get(r, k) * rhs.get(k, c)).sum();
            }
        }
        Some(Self { dim: n, entries })
    }

    /// `M† · M == I` within `tolerance` on every entry.
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let identity = Self::identity(self.dim);
        match self.adjoint().matmul(self) {
            Some(product) => product
                .entries
                .iter()
                .zip(identity.entries.iter())
                .all(|(a, b)| (a - b).norm() <= tolerance),
            None => false,
        }
    }
}

impl<const N: usize> From<[[Complex<f64>; N]; N]> for GateMatrix {
    fn from(rows: [[Complex<f64>; N]; N]) -> Self {
        Self {
            dim: N,
            entries: rows.iter().flatten().copied().collect(),
        }
    }
}

impl fmt::Display for GateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dim {
            write!(f, "[")?;
            for (c, val) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", val)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn predefined_gates_are_unitary() {
        for m in [GateMatrix::pauli_x(), GateMatrix::hadamard(), GateMatrix::cnot()] {
            assert!(m.is_unitary(TOL), "not unitary:\n{}", m);
        }
    }

    #[test]
    fn non_unitary_is_detected() {
        let o = Complex::<f64>::one();
        let z = Complex::<f64>::zero();
        let projector = GateMatrix::from([[o, z], [z, z]]);
        assert!(!projector.is_unitary(TOL));
    }

    #[test]
    fn matmul_rejects_mixed_dims() {
        assert!(GateMatrix::pauli_x().matmul(&GateMatrix::cnot()).is_none());
    }

    #[test]
    fn hadamard_squares_to_identity() {
        let h = GateMatrix::hadamard();
        let hh = h.matmul(&h).unwrap();
        let id = GateMatrix::identity(2);
        for r in 0..2 {
            for c in 0..2 {
                assert!((hh.get(r, c) - id.get(r, c)).norm() < TOL);
            }
        }
    }

    #[test]
    fn cnot_rows_follow_basis_table() {
        let m = GateMatrix::cnot();
        assert_eq!(m.dim(), 4);
        assert_eq!(m.get(2, 3), Complex::one());
        assert_eq!(m.get(3, 2), Complex::one());
        assert_eq!(m.get(2, 2), Complex::zero());
    }
}
