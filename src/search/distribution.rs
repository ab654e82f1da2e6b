// src/search/distribution.rs
use super::SearchProblem;
use crate::config::EngineConfig;
use crate::core::QcError;

/// Which panel a probability distribution is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Classical,
    Quantum,
}

/// Probability the quantum panel assigns to the marked box.
const QUANTUM_TARGET_PROBABILITY: f64 = 0.5;

impl SearchProblem {
    /// Per-box probability of being the answer under `strategy`.
    ///
    /// Classical is uniform `1/N`. Quantum puts `0.5` on the target and splits
    /// the rest evenly; with a single box the target gets everything.
    pub fn probability_distribution(&self, strategy: Strategy) -> Vec<f64> {
        let n = self.size;
        match strategy {
            Strategy::Classical => vec![1.0 / n as f64; n],
            Strategy::Quantum if n == 1 => vec![1.0],
            Strategy::Quantum => {
                let rest = (1.0 - QUANTUM_TARGET_PROBABILITY) / (n - 1) as f64;
                let mut probs = vec![rest; n];
                probs[self.target] = QUANTUM_TARGET_PROBABILITY;
                probs
            }
        }
    }
}

/// One x position of the complexity graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityPoint {
    /// Data size
    pub n: usize,
    /// O(N) curve
    pub classical: f64,
    /// O(sqrt N) curve
    pub quantum: f64,
}

/// Points `1..=n` of both complexity curves.
///
/// # Errors
/// `QcError::SizeOutOfRange` unless `1 <= n <= max`.
pub fn complexity_series(n: usize, max: usize) -> Result<Vec<ComplexityPoint>, QcError> {
    if n == 0 || n > max {
        return Err(QcError::SizeOutOfRange { size: n, max });
    }
    Ok((1..=n)
        .map(|i| ComplexityPoint {
            n: i,
            classical: i as f64,
            quantum: (i as f64).sqrt(),
        })
        .collect())
}

/// [`complexity_series`] bounded by `config.max_graph_size`.
pub fn complexity_series_with(n: usize, config: &EngineConfig) -> Result<Vec<ComplexityPoint>, QcError> {
    complexity_series(n, config.max_graph_size)
}
