//! Common interface over the selection strategies.

use crate::schema::{Selection, SolverConfig, Species, StrategyKind, StrategyOutput};

use super::longest_chain::LongestChain;
use super::solver::{CombinatorialSolver, SolveError};

/// A way of picking a self-sustaining species subset.
pub trait SelectionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Select species; names are ordered by descending calories provided.
    fn select(&self, species: &[Species]) -> Result<Selection, SolveError>;

    /// Run and report the richest output this strategy produces.
    fn run(&self, species: &[Species]) -> Result<StrategyOutput, SolveError> {
        self.select(species).map(StrategyOutput::Selection)
    }
}

impl SelectionStrategy for CombinatorialSolver {
    fn name(&self) -> &'static str {
        "combinatorial"
    }

    fn select(&self, species: &[Species]) -> Result<Selection, SolveError> {
        let web = self.solve(species)?;
        Ok(Selection::from(&web))
    }

    fn run(&self, species: &[Species]) -> Result<StrategyOutput, SolveError> {
        self.solve(species).map(StrategyOutput::FoodWeb)
    }
}

impl SelectionStrategy for LongestChain {
    fn name(&self) -> &'static str {
        "longest_chain"
    }

    fn select(&self, species: &[Species]) -> Result<Selection, SolveError> {
        Ok(self.select_chains(species))
    }
}

impl StrategyKind {
    /// Build this strategy, validating `config` first.
    pub fn build(self, config: &SolverConfig) -> Result<Box<dyn SelectionStrategy>, SolveError> {
        config.validate()?;
        Ok(match self {
            StrategyKind::Combinatorial => Box::new(CombinatorialSolver::new(config.clone())?),
            StrategyKind::LongestChain => Box::new(LongestChain),
        })
    }
}

/// Build the strategy named by a configuration.
pub fn build_strategy(config: &SolverConfig) -> Result<Box<dyn SelectionStrategy>, SolveError> {
    config.strategy.build(config)
}
