// src/search/mod.rs

//! The classical-versus-quantum search comparison, without the canvas.
//!
//! A [`SearchProblem`] is `N` boxes with one marked box `M`. The classical
//! side is a linear scan that stops at `M`. The quantum side is conceptual: a
//! scripted Grover sequence whose cost is reported as `ceil(sqrt(N))` steps.
//! Nothing here evolves an `N`-dimensional state.

mod distribution;
mod parallel;

pub use distribution::{complexity_series, complexity_series_with, ComplexityPoint, Strategy};
pub use parallel::{ParallelOutcome, ParallelRound};

use std::fmt;
use tracing::debug;

use crate::core::QcError;

/// `N` items with the marked item at index `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProblem {
    size: usize,
    target: usize,
}

impl SearchProblem {
    /// # Errors
    /// `QcError::InvalidSearchParameters` unless `0 <= target < size`.
    pub fn new(size: usize, target: usize) -> Result<Self, QcError> {
        if target >= size {
            return Err(QcError::InvalidSearchParameters { size, target });
        }
        Ok(Self { size, target })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Boxes inspected by a front-to-back scan, counting the hit.
    pub fn classical_steps(&self) -> usize {
        self.target + 1
    }

    /// `ceil(sqrt(N))`.
    pub fn quantum_steps(&self) -> usize {
        ceil_sqrt(self.size)
    }

    /// The inspection sequence of the linear scan, for animation.
    pub fn linear_scan(&self) -> Vec<ScanEvent> {
        let mut events = Vec::with_capacity(2 * self.classical_steps());
        for i in 0..=self.target {
            events.push(ScanEvent::Inspect(i));
            if i == self.target {
                events.push(ScanEvent::Found(i));
            } else {
                events.push(ScanEvent::Miss(i));
            }
        }
        events
    }

    /// The scripted phases of the quantum side.
    pub fn grover_phases(&self) -> Vec<GroverPhase> {
        let mut phases = vec![
            GroverPhase::Prepare,
            GroverPhase::OracleMark { target: self.target },
        ];
        phases.extend((0..AMPLIFY_STEPS).map(|step| GroverPhase::Amplify { step }));
        phases.push(GroverPhase::Measure { target: self.target });
        phases
    }

    /// Step counts of both strategies.
    pub fn report(&self) -> SearchReport {
        let report = SearchReport {
            size: self.size,
            target: self.target,
            classical_steps: self.classical_steps(),
            quantum_steps: self.quantum_steps(),
        };
        debug!(size = self.size, target = self.target, classical = report.classical_steps, quantum = report.quantum_steps, "search comparison");
        report
    }
}

/// Number of amplification frames in the scripted sequence.
pub const AMPLIFY_STEPS: usize = 3;

/// One frame of the classical scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// The box is being inspected.
    Inspect(usize),
    /// The box was inspected and is not the target.
    Miss(usize),
    /// The box is the target; the scan ends here.
    Found(usize),
}

/// One frame of the scripted quantum search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroverPhase {
    /// Uniform superposition over every box.
    Prepare,
    /// The oracle flags the target.
    OracleMark { target: usize },
    /// Amplitude amplification frame `step` (0-based).
    Amplify { step: usize },
    /// Measurement lands on the target.
    Measure { target: usize },
}

/// Summary line shown under the two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub size: usize,
    pub target: usize,
    pub classical_steps: usize,
    pub quantum_steps: usize,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={}, M={}: Classical {} steps / Quantum {} steps",
            self.size, self.target, self.classical_steps, self.quantum_steps
        )
    }
}

/// `ceil(sqrt(n))` in integer arithmetic.
pub fn ceil_sqrt(n: usize) -> usize {
    let r = n.isqrt();
    if r * r == n { r } else { r + 1 }
}

/// `floor(sqrt(n))`, the figure printed under the complexity graph.
pub fn conceptual_quantum_steps(n: usize) -> usize {
    n.isqrt()
}
