//! Food Web - Largest self-sustaining species subset search.
//!
//! Given a pool of candidate species, this crate finds the largest subset in
//! which every consumer can be fully fed by other members without driving
//! any of them to extinction, anchored on at least one producer.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Species records, validation, configuration and result types
//! - `compute`: Zone partitioning, feeding simulation and subset search
//!
//! Species are grouped by zone, each zone is searched independently for its
//! largest sustainable subset (up to [`MAX_CHAIN_LENGTH`] members), and the
//! zone with the most surviving members wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use food_web::{
//!     compute::CombinatorialSolver,
//!     schema::Species,
//! };
//!
//! let species = vec![
//!     Species::producer("Kelp", 3000, "0-30m"),
//!     Species::consumer("Urchin", 100, 1000, "0-30m", ["Kelp"]),
//! ];
//!
//! let web = CombinatorialSolver::default().solve(&species)?;
//! for (name, state) in web.iter() {
//!     println!("{name}: {} calories left", state.remaining_calories_provided);
//! }
//! # Ok::<(), food_web::compute::SolveError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{CombinatorialSolver, LongestChain, SelectionStrategy, SolveError};
pub use schema::{EnergyState, FoodWeb, MAX_CHAIN_LENGTH, Selection, SolverConfig, Species};
