// src/search/parallel.rs
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{ceil_sqrt, SearchProblem};
use crate::config::EngineConfig;

/// The boxes inspected together in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelRound {
    /// Distinct box indices, in sampling order
    pub picks: Vec<usize>,
    /// Whether the target was among them
    pub hit: bool,
}

/// Result of the sampled "check several boxes at once" search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelOutcome {
    /// Every round played, the last one being the hit if `found`
    pub rounds: Vec<ParallelRound>,
    /// Whether the target was hit before the round budget ran out
    pub found: bool,
}

impl ParallelOutcome {
    /// Rounds played.
    pub fn steps(&self) -> usize {
        self.rounds.len()
    }
}

impl SearchProblem {
    /// Plays up to `ceil(sqrt(N))` rounds, each inspecting
    /// `min(ceil(sqrt(N)), N)` distinct boxes drawn uniformly, and stops at the
    /// first round that contains the target.
    pub fn parallel_search<R: Rng + ?Sized>(&self, rng: &mut R) -> ParallelOutcome {
        let budget = ceil_sqrt(self.size);
        let per_round = budget.min(self.size);
        let mut rounds = Vec::with_capacity(budget);
        let mut found = false;

        for _ in 0..budget {
            let picks = index::sample(rng, self.size, per_round).into_vec();
            let hit = picks.contains(&self.target);
            rounds.push(ParallelRound { picks, hit });
            if hit {
                found = true;
                break;
            }
        }

        debug!(size = self.size, target = self.target, rounds = rounds.len(), found, "parallel search");
        ParallelOutcome { rounds, found }
    }

    /// [`parallel_search`](Self::parallel_search) with a `StdRng` seeded from `seed`.
    pub fn parallel_search_seeded(&self, seed: u64) -> ParallelOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        self.parallel_search(&mut rng)
    }

    /// Seeded search using `config.search_seed`.
    pub fn parallel_search_with(&self, config: &EngineConfig) -> ParallelOutcome {
        self.parallel_search_seeded(config.search_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QcError;
    use std::collections::HashSet;

    #[test]
    fn rounds_respect_budget_and_distinctness() -> Result<(), QcError> {
        let p = SearchProblem::new(64, 17)?;
        for seed in 0..20 {
            let out = p.parallel_search_seeded(seed);
            assert!(out.steps() >= 1 && out.steps() <= 8);
            for round in &out.rounds {
                assert_eq!(round.picks.len(), 8);
                let unique: HashSet<_> = round.picks.iter().collect();
                assert_eq!(unique.len(), 8, "picks within a round are distinct");
                assert!(round.picks.iter().all(|&i| i < 64));
                assert_eq!(round.hit, round.picks.contains(&17));
            }
            let hits = out.rounds.iter().filter(|r| r.hit).count();
            if out.found {
                assert_eq!(hits, 1);
                assert!(out.rounds.last().is_some_and(|r| r.hit));
            } else {
                assert_eq!(hits, 0);
                assert_eq!(out.steps(), 8);
            }
        }
        Ok(())
    }

    #[test]
    fn tiny_problem_always_found() -> Result<(), QcError> {
        // N = 1: one round inspecting the only box.
        let out = SearchProblem::new(1, 0)?.parallel_search_seeded(7);
        assert!(out.found);
        assert_eq!(out.rounds, vec![ParallelRound { picks: vec![0], hit: true }]);

        // N = 2: budget 2, two picks per round covers everything.
        let out = SearchProblem::new(2, 1)?.parallel_search_seeded(7);
        assert!(out.found);
        assert_eq!(out.steps(), 1);
        Ok(())
    }

    #[test]
    fn same_seed_same_outcome() -> Result<(), QcError> {
        let p = SearchProblem::new(32, 5)?;
        assert_eq!(p.parallel_search_seeded(99), p.parallel_search_seeded(99));
        Ok(())
    }

    #[test]
    fn config_seed_drives_search() -> Result<(), QcError> {
        let p = SearchProblem::new(64, 40)?;
        let cfg = EngineConfig { search_seed: 2024, ..Default::default() };
        assert_eq!(p.parallel_search_with(&cfg), p.parallel_search_seeded(2024));
        assert_eq!(
            p.parallel_search_with(&EngineConfig::default()),
            p.parallel_search_seeded(0)
        );
        Ok(())
    }
}
