//! Zone selection over the combinatorial search.

use rayon::prelude::*;

use crate::schema::{ConfigError, FoodWeb, SolverConfig, Species};

use super::search::{ZoneOutcome, search_zone, subset_count};
use super::zones::ZonePool;

/// Errors raised while solving.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("Invalid solver configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Zone '{zone}' has {size} species, above the limit of {limit}")]
    ZoneTooLarge {
        zone: String,
        size: usize,
        limit: usize,
    },
}

/// Exhaustive per-zone search; the zone with the most surviving members wins.
#[derive(Debug, Clone, Default)]
pub struct CombinatorialSolver {
    config: SolverConfig,
}

impl CombinatorialSolver {
    /// Create a solver, validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Best subset of every zone, in order of first appearance.
    pub fn solve_zones(&self, species: &[Species]) -> Result<Vec<ZoneOutcome>, SolveError> {
        let pools = ZonePool::build_all(species);

        if let Some(limit) = self.config.max_zone_size
            && let Some(pool) = pools.iter().find(|p| p.len() > limit)
        {
            let subsets = subset_count(pool.len(), self.config.max_chain_length)
                .map_or_else(|| "more than u128::MAX".to_string(), |n| n.to_string());
            log::warn!(
                "zone '{}' has {} species (limit {}): up to {} subsets",
                pool.zone(),
                pool.len(),
                limit,
                subsets
            );
            return Err(SolveError::ZoneTooLarge {
                zone: pool.zone().to_string(),
                size: pool.len(),
                limit,
            });
        }

        let max_chain_length = self.config.max_chain_length;
        let outcomes = if self.config.parallel_zones {
            pools
                .par_iter()
                .map(|pool| search_zone(pool, max_chain_length))
                .collect()
        } else {
            pools
                .iter()
                .map(|pool| search_zone(pool, max_chain_length))
                .collect()
        };

        Ok(outcomes)
    }

    /// Food web of the zone with the most sustainable members.
    ///
    /// Ties go to the zone that appears first in the input.
    pub fn solve(&self, species: &[Species]) -> Result<FoodWeb, SolveError> {
        let mut best: Option<ZoneOutcome> = None;
        for outcome in self.solve_zones(species)? {
            if best.as_ref().is_none_or(|b| outcome.len() > b.len()) {
                best = Some(outcome);
            }
        }

        Ok(match best {
            Some(outcome) => {
                log::info!(
                    "selected zone '{}' with {} species",
                    outcome.zone,
                    outcome.len()
                );
                outcome.web
            }
            None => FoodWeb::default(),
        })
    }
}
