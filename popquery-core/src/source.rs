//! Supplier of the three record collections.
//!
//! The `DatasetSource` trait is the seam between storage and the query
//! engine. Loaders hand over owned collections once; the engine keeps them
//! for its whole lifetime and never writes to them.

use crate::{CountryRecord, IndicatorRecord, PopulationRecord};

/// Provides the population, country and indicator collections.
///
/// Implementations are consumed by [`QueryEngine::from_source`], which
/// clones nothing: the collections are moved out of the source.
///
/// # Examples
///
/// ```rust
/// use popquery_core::{
///     CountryRecord, DatasetSource, IndicatorRecord, PopulationRecord, QueryEngine,
/// };
///
/// struct Fixed;
///
/// impl DatasetSource for Fixed {
///     fn into_collections(
///         self,
///     ) -> (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>) {
///         let record = PopulationRecord::new(2020, "Chile", "CHL", "SP.POP.TOTL", 19_000_000);
///         (vec![record], vec![CountryRecord::new("Chile", "CL", "CHL")], Vec::new())
///     }
/// }
///
/// let engine = QueryEngine::from_source(Fixed);
/// assert_eq!(engine.total_population("Chile", 2020), 19_000_000);
/// ```
///
/// [`QueryEngine::from_source`]: crate::QueryEngine::from_source
pub trait DatasetSource {
    /// Surrender the population, country and indicator collections.
    fn into_collections(self)
    -> (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>);
}

impl DatasetSource for (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>) {
    fn into_collections(
        self,
    ) -> (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>) {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetSource;
    use crate::{QueryEngine, test_support::MemorySource};
    use rstest::rstest;

    #[rstest]
    fn tuples_act_as_sources() {
        let source = (Vec::new(), Vec::new(), Vec::new());
        let (population, countries, indicators) = source.into_collections();
        assert!(population.is_empty() && countries.is_empty() && indicators.is_empty());
    }

    #[rstest]
    fn memory_source_feeds_the_engine() {
        let source = MemorySource::default().with_population(2000, "Peru", 26_000_000);
        let engine = QueryEngine::from_source(source);
        assert_eq!(engine.total_population("Peru", 2000), 26_000_000);
    }
}
