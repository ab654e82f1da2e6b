// src/config.rs

//! Settings shared by engines, the gate simulator and the search model.

use serde::{Deserialize, Serialize};

use crate::core::{QcError, DEFAULT_NORM_TOLERANCE};

/// Tunables for a [`crate::simulation::QuantumStateEngine`] and the search model.
///
/// Missing fields fall back to [`EngineConfig::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Allowed deviation of `Sum(|c_i|^2)` from 1.
    pub norm_tolerance: f64,
    /// Validate the stored state after every gate and warn on drift.
    pub check_normalization: bool,
    /// Seed for the sampled parallel search.
    pub search_seed: u64,
    /// Upper bound for complexity series (the graph slider maximum).
    pub max_graph_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            check_normalization: true,
            search_seed: 0,
            max_graph_size: 200,
        }
    }
}

impl EngineConfig {
    /// Rejects tolerances that are negative or not finite and an empty graph range.
    pub fn validate(&self) -> Result<(), QcError> {
        if !self.norm_tolerance.is_finite() || self.norm_tolerance < 0.0 {
            return Err(QcError::InvalidConfig {
                message: format!("norm_tolerance must be finite and >= 0, got {}", self.norm_tolerance),
            });
        }
        if self.max_graph_size == 0 {
            return Err(QcError::InvalidConfig {
                message: "max_graph_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
