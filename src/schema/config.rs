//! Configuration types for the species selection engine.

use serde::{Deserialize, Serialize};

/// Largest candidate subset the combinatorial search will consider.
pub const MAX_CHAIN_LENGTH: usize = 8;

fn default_max_chain_length() -> usize {
    MAX_CHAIN_LENGTH
}

fn default_parallel_zones() -> bool {
    true
}

/// Top-level solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum cardinality of an enumerated subset.
    #[serde(default = "default_max_chain_length")]
    pub max_chain_length: usize,
    /// Largest zone the combinatorial search accepts. `None` means unbounded.
    ///
    /// The number of evaluated subsets grows as `sum(C(m, k))` for `k` up to
    /// `max_chain_length`, so callers feeding large pools should set this and
    /// shard oversized zones themselves.
    #[serde(default)]
    pub max_zone_size: Option<usize>,
    /// Evaluate zones on the rayon thread pool.
    #[serde(default = "default_parallel_zones")]
    pub parallel_zones: bool,
    /// Selection strategy.
    #[serde(default)]
    pub strategy: StrategyKind,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_chain_length: MAX_CHAIN_LENGTH,
            max_zone_size: None,
            parallel_zones: true,
            strategy: StrategyKind::default(),
        }
    }
}

impl SolverConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chain_length == 0 {
            return Err(ConfigError::InvalidChainLength);
        }
        if self.max_zone_size == Some(0) {
            return Err(ConfigError::InvalidZoneSize);
        }
        Ok(())
    }
}

/// Available selection strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Exhaustive subset search judged by the eating simulation.
    #[default]
    Combinatorial,
    /// Legacy longest-chain dynamic program.
    LongestChain,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Maximum chain length must be non-zero")]
    InvalidChainLength,
    #[error("Maximum zone size must be non-zero when set")]
    InvalidZoneSize,
}
