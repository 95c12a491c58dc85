//! Schema module - Species records, configuration and result types.

mod config;
mod result;
mod species;

pub use config::*;
pub use result::*;
pub use species::*;
