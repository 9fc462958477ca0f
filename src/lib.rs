//! Facade crate for the popquery engine.
//!
//! This crate re-exports the core domain types and exposes the JSON-backed
//! dataset loader behind the `json-store` feature.

#![forbid(unsafe_code)]

pub use popquery_core::{
    CountryRecord, DEFAULT_GROWTH_THRESHOLD, DEFAULT_GROWTH_WINDOW, DEFAULT_LOW_WINDOW,
    DEFAULT_RECENT_YEARS, DatasetSource, IndicatorRecord, PopulationRecord, QueryEngine,
    QueryError, sample,
};

#[cfg(feature = "test-support")]
pub use popquery_core::test_support;

#[cfg(feature = "json-store")]
pub use popquery_data::{
    COUNTRIES_FILE, DataDir, INDICATORS_FILE, JsonDataset, LoadError, Lookup, POPULATION_FILE,
};
