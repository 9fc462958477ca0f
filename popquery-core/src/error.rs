//! Errors raised by extremum queries.

use thiserror::Error;

/// Errors returned by [`QueryEngine`](crate::QueryEngine) operations.
///
/// Additive aggregates never fail: an empty selection yields the identity of
/// the aggregate (`0` for sums, `0.0` for averages and growth). Only queries
/// that must pick a minimum or maximum report an error when nothing matches.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No population records were available to select an extremum from.
    #[error("{query}: no population records for {country}")]
    NotFound {
        /// Name of the query that found no candidates.
        query: &'static str,
        /// Country the query was asked about.
        country: String,
    },
}

impl QueryError {
    pub(crate) fn not_found(query: &'static str, country: &str) -> Self {
        Self::NotFound {
            query,
            country: country.to_owned(),
        }
    }
}
