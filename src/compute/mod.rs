//! Compute module - Zone partitioning, feeding simulation and subset search.

mod generator;
mod longest_chain;
mod search;
mod simulation;
mod solver;
mod strategy;
mod zones;

pub use generator::*;
pub use longest_chain::*;
pub use search::*;
pub use simulation::*;
pub use solver::*;
pub use strategy::*;
pub use zones::*;
