//! In-memory query engine over the population dataset.
//!
//! `QueryEngine` owns the three record collections and answers read-only
//! queries against them. Every query is a linear scan over the population
//! records; the datasets this tool targets are small enough that no index is
//! kept.
//!
//! Filtering queries borrow from the engine and preserve stored order.
//! Additive aggregates return their identity when nothing matches, while
//! extremum queries report [`QueryError::NotFound`].

use std::collections::{BTreeMap, BTreeSet};

use crate::{CountryRecord, DatasetSource, IndicatorRecord, PopulationRecord, QueryError};

mod coverage;
mod growth;

/// Window used by [`QueryEngine::records_in_last_n_years`] in the menu.
pub const DEFAULT_RECENT_YEARS: u32 = 10;
/// Growth percentage a country must exceed to be reported as fast-growing.
pub const DEFAULT_GROWTH_THRESHOLD: f64 = 2.0;
/// Number of years, ending at the latest year, over which growth is measured.
pub const DEFAULT_GROWTH_WINDOW: u32 = 5;
/// Window used by [`QueryEngine::least_population_in_recent_years`] in the menu.
pub const DEFAULT_LOW_WINDOW: u32 = 20;

/// Read-only query engine over population, country and indicator records.
///
/// # Examples
///
/// ```
/// use popquery_core::{CountryRecord, PopulationRecord, QueryEngine};
///
/// let engine = QueryEngine::new(
///     vec![
///         PopulationRecord::new(2010, "Chile", "CHL", "SP.POP.TOTL", 17_000_000),
///         PopulationRecord::new(2020, "Chile", "CHL", "SP.POP.TOTL", 19_000_000),
///     ],
///     vec![CountryRecord::new("Chile", "CL", "CHL")],
///     Vec::new(),
/// );
///
/// assert_eq!(engine.total_population("Chile", 2020), 19_000_000);
/// assert_eq!(engine.year_of_lowest_population("Chile"), Ok(2010));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    population: Vec<PopulationRecord>,
    countries: Vec<CountryRecord>,
    indicators: Vec<IndicatorRecord>,
}

impl QueryEngine {
    /// Build an engine that takes ownership of the three collections.
    #[must_use]
    pub const fn new(
        population: Vec<PopulationRecord>,
        countries: Vec<CountryRecord>,
        indicators: Vec<IndicatorRecord>,
    ) -> Self {
        Self {
            population,
            countries,
            indicators,
        }
    }

    /// Build an engine from any [`DatasetSource`].
    #[must_use]
    pub fn from_source<S: DatasetSource>(source: S) -> Self {
        let (population, countries, indicators) = source.into_collections();
        Self::new(population, countries, indicators)
    }

    /// All population records in stored order.
    #[must_use]
    pub fn population(&self) -> &[PopulationRecord] {
        &self.population
    }

    /// The country reference collection, verbatim.
    #[must_use]
    pub fn list_countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// The indicator reference collection, verbatim.
    #[must_use]
    pub fn list_indicators(&self) -> &[IndicatorRecord] {
        &self.indicators
    }

    /// Look up a country reference entry by name.
    ///
    /// Population records may name countries that have no reference entry;
    /// those simply yield `None`.
    #[must_use]
    pub fn country(&self, name: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|country| country.name == name)
    }

    /// Look up an indicator reference entry by code.
    #[must_use]
    pub fn indicator(&self, id: &str) -> Option<&IndicatorRecord> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    /// Latest year present in the population records.
    #[must_use]
    pub fn max_year(&self) -> Option<i32> {
        self.population.iter().map(|record| record.year).max()
    }

    /// Records for `country` with `start <= year <= end`, in stored order.
    #[must_use]
    pub fn records_by_country_and_year_range(
        &self,
        country: &str,
        start: i32,
        end: i32,
    ) -> Vec<&PopulationRecord> {
        self.records_for(country)
            .filter(|record| (start..=end).contains(&record.year))
            .collect()
    }

    /// Records whose indicator code equals `indicator_id`.
    #[must_use]
    pub fn records_by_indicator(&self, indicator_id: &str) -> Vec<&PopulationRecord> {
        self.population
            .iter()
            .filter(|record| record.indicator_id == indicator_id)
            .collect()
    }

    /// Records from the latest `years` years, counted back from the latest
    /// year present.
    ///
    /// Both ends are inclusive, so a window of `10` spans eleven calendar
    /// years. Returns an empty list when there are no records at all.
    #[must_use]
    pub fn records_in_last_n_years(&self, years: u32) -> Vec<&PopulationRecord> {
        let Some(latest) = self.max_year() else {
            return Vec::new();
        };
        let earliest = window_start(latest, years);
        self.population
            .iter()
            .filter(|record| (earliest..=latest).contains(&record.year))
            .collect()
    }

    /// Sum of values for `country` in `year`; `0` when nothing matches.
    #[must_use]
    pub fn total_population(&self, country: &str, year: i32) -> u64 {
        sum_values(self.records_for(country).filter(|record| record.year == year))
    }

    /// Sum of values across all countries for years strictly before `year`.
    #[must_use]
    pub fn total_population_before(&self, year: i32) -> u64 {
        sum_values(self.population.iter().filter(|record| record.year < year))
    }

    /// Sum of values across all countries for years strictly after `year`.
    #[must_use]
    pub fn total_population_after(&self, year: i32) -> u64 {
        sum_values(self.population.iter().filter(|record| record.year > year))
    }

    /// Sum of values across all countries for exactly `year`.
    #[must_use]
    pub fn total_population_by_year(&self, year: i32) -> u64 {
        sum_values(self.population.iter().filter(|record| record.year == year))
    }

    /// Year of the record with the smallest value for `country`.
    ///
    /// Ties go to the record stored first.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] when `country` has no records.
    pub fn year_of_lowest_population(&self, country: &str) -> Result<i32, QueryError> {
        self.records_for(country)
            .min_by_key(|record| record.value)
            .map(|record| record.year)
            .ok_or_else(|| QueryError::not_found("year of lowest population", country))
    }

    /// Year of the record with the largest value for `country`.
    ///
    /// Ties go to the record stored first.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] when `country` has no records.
    pub fn year_of_peak_population(&self, country: &str) -> Result<i32, QueryError> {
        self.records_for(country)
            .reduce(|best, record| if record.value > best.value { record } else { best })
            .map(|record| record.year)
            .ok_or_else(|| QueryError::not_found("year of peak population", country))
    }

    /// Years in which a record for `country` exceeds `threshold`.
    ///
    /// Follows stored order; a year appears once per qualifying record.
    #[must_use]
    pub fn years_with_population_above(&self, country: &str, threshold: u64) -> Vec<i32> {
        self.records_for(country)
            .filter(|record| record.value > threshold)
            .map(|record| record.year)
            .collect()
    }

    /// Smallest value recorded for `country` within the latest `window`
    /// years of the whole dataset.
    ///
    /// # Errors
    /// Returns [`QueryError::NotFound`] when no record of `country` falls in
    /// the window, including when the dataset is empty.
    pub fn least_population_in_recent_years(
        &self,
        country: &str,
        window: u32,
    ) -> Result<u64, QueryError> {
        let not_found = || QueryError::not_found("least population in recent years", country);
        let latest = self.max_year().ok_or_else(not_found)?;
        let earliest = window_start(latest, window);
        self.records_for(country)
            .filter(|record| (earliest..=latest).contains(&record.year))
            .map(|record| record.value)
            .min()
            .ok_or_else(not_found)
    }

    /// Number of distinct years with at least one record for `country`.
    #[must_use]
    pub fn years_with_data_count(&self, country: &str) -> usize {
        self.distinct_years(country).len()
    }

    fn records_for<'a, 'b>(
        &'a self,
        country: &'b str,
    ) -> impl Iterator<Item = &'a PopulationRecord> + use<'a, 'b> {
        self.population
            .iter()
            .filter(move |record| record.is_for(country))
    }

    fn distinct_years(&self, country: &str) -> BTreeSet<i32> {
        self.records_for(country).map(|record| record.year).collect()
    }

    /// Per-year totals for `country`, keyed by year.
    fn yearly_totals(&self, country: &str) -> BTreeMap<i32, u64> {
        self.records_for(country)
            .fold(BTreeMap::new(), |mut totals, record| {
                let total = totals.entry(record.year).or_insert(0_u64);
                *total = total.saturating_add(record.value);
                totals
            })
    }
}

/// First year of a window of `years` ending at `latest`.
fn window_start(latest: i32, years: u32) -> i32 {
    i32::try_from(years).map_or(i32::MIN, |span| latest.saturating_sub(span))
}

fn sum_values<'a>(records: impl Iterator<Item = &'a PopulationRecord>) -> u64 {
    records.fold(0_u64, |total, record| total.saturating_add(record.value))
}
