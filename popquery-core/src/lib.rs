//! Core domain types and query engine for popquery.
//!
//! The crate models three datasets (population figures, a country table and
//! an indicator table) and answers canned analytical queries over them with
//! [`QueryEngine`]. Storage is someone else's concern: anything implementing
//! [`DatasetSource`] can hand the collections over at construction time.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod engine;
mod error;
pub mod record;
pub mod sample;
mod source;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use engine::{
    DEFAULT_GROWTH_THRESHOLD, DEFAULT_GROWTH_WINDOW, DEFAULT_LOW_WINDOW, DEFAULT_RECENT_YEARS,
    QueryEngine,
};
pub use error::QueryError;
pub use record::{CountryRecord, IndicatorRecord, PopulationRecord};
pub use source::DatasetSource;
