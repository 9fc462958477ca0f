//! Data loading for popquery.
//!
//! Responsibilities:
//! - Read the population, country and indicator datasets from JSON files.
//! - Substitute and persist the built-in sample when a file is missing.
//!
//! Boundaries:
//! - Do not encode query rules (live in `popquery-core`).
//! - All filesystem access goes through a capability-scoped [`DataDir`].
//!
//! Invariants:
//! - Records are fully typed once loading succeeds; the engine never sees
//!   malformed input.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod dir;
mod error;
mod loader;

pub use dir::{DataDir, Lookup};
pub use error::LoadError;
pub use loader::{COUNTRIES_FILE, INDICATORS_FILE, JsonDataset, POPULATION_FILE};

#[cfg(test)]
mod tests;
