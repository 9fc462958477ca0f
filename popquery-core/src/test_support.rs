//! Test-only, in-memory `DatasetSource` implementation used by unit,
//! behaviour and property tests.

use crate::{CountryRecord, DatasetSource, IndicatorRecord, PopulationRecord, QueryEngine};

/// Indicator code given to records built by [`MemorySource::with_population`].
pub const TOTAL_POPULATION: &str = "SP.POP.TOTL";

/// In-memory `DatasetSource` assembled with builder calls.
///
/// Records keep the order they were added in, which lets tests assert the
/// engine's stored-order guarantees.
#[derive(Default, Debug, Clone)]
pub struct MemorySource {
    population: Vec<PopulationRecord>,
    countries: Vec<CountryRecord>,
    indicators: Vec<IndicatorRecord>,
}

impl MemorySource {
    /// Append a total-population record for `country` in `year`.
    #[must_use]
    pub fn with_population(self, year: i32, country: &str, value: u64) -> Self {
        self.with_record(PopulationRecord::new(
            year,
            country,
            iso3_for(country),
            TOTAL_POPULATION,
            value,
        ))
    }

    /// Append an arbitrary population record.
    #[must_use]
    pub fn with_record(mut self, record: PopulationRecord) -> Self {
        self.population.push(record);
        self
    }

    /// Append a country reference entry derived from its name.
    #[must_use]
    pub fn with_country(mut self, name: &str) -> Self {
        let iso3 = iso3_for(name);
        let iso2: String = iso3.chars().take(2).collect();
        self.countries.push(CountryRecord::new(name, iso2, iso3));
        self
    }

    /// Append an indicator reference entry.
    #[must_use]
    pub fn with_indicator(mut self, id: &str, description: &str) -> Self {
        self.indicators.push(IndicatorRecord::new(id, description));
        self
    }

    /// Build a query engine over the accumulated records.
    #[must_use]
    pub fn engine(self) -> QueryEngine {
        QueryEngine::from_source(self)
    }
}

impl DatasetSource for MemorySource {
    fn into_collections(
        self,
    ) -> (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>) {
        (self.population, self.countries, self.indicators)
    }
}

/// Derive a stand-in ISO3 code from the first three letters of a name.
fn iso3_for(country: &str) -> String {
    country
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
