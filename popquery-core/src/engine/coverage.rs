//! Queries about which years and countries have data.

use std::collections::{BTreeMap, BTreeSet};

use super::QueryEngine;

/// Spacing between the years reported by [`QueryEngine::population_by_decade`].
const DECADE: usize = 10;

impl QueryEngine {
    /// Number of population records per year, keyed by year.
    #[must_use]
    pub fn record_counts_by_year(&self) -> BTreeMap<i32, usize> {
        self.population
            .iter()
            .fold(BTreeMap::new(), |mut counts, record| {
                *counts.entry(record.year).or_insert(0) += 1;
                counts
            })
    }

    /// Countries with at least one record in every year of `start..=end`.
    ///
    /// The countries reporting in `start` seed the running intersection, so
    /// an empty range yields no countries rather than all of them. Names are
    /// returned in ascending order.
    #[must_use]
    pub fn countries_with_data_for_every_year(&self, start: i32, end: i32) -> Vec<String> {
        let mut common: Option<BTreeSet<&str>> = None;
        for year in start..=end {
            let reporting = self.countries_reporting_in(year);
            let narrowed = match common {
                None => reporting,
                Some(previous) => previous.intersection(&reporting).copied().collect(),
            };
            let exhausted = narrowed.is_empty();
            common = Some(narrowed);
            if exhausted {
                break;
            }
        }
        common
            .unwrap_or_default()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Years in `start..=end` without any record for `country`, ascending.
    #[must_use]
    pub fn years_missing_data(&self, country: &str, start: i32, end: i32) -> Vec<i32> {
        let present = self.distinct_years(country);
        (start..=end).filter(|year| !present.contains(year)).collect()
    }

    /// Total population of `country` at each decade year from `since` up to
    /// the latest year in the dataset.
    ///
    /// Decade years without any record for `country` are left out.
    #[must_use]
    pub fn population_by_decade(&self, country: &str, since: i32) -> BTreeMap<i32, u64> {
        let Some(latest) = self.max_year() else {
            return BTreeMap::new();
        };
        let totals = self.yearly_totals(country);
        (since..=latest)
            .step_by(DECADE)
            .filter_map(|year| totals.get(&year).map(|&total| (year, total)))
            .collect()
    }

    /// Years in which more than `min_countries` distinct countries report.
    #[must_use]
    pub fn years_with_countries_reporting_above(&self, min_countries: usize) -> Vec<i32> {
        let mut reporting: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();
        for record in &self.population {
            reporting
                .entry(record.year)
                .or_default()
                .insert(record.country.as_str());
        }
        reporting
            .into_iter()
            .filter(|(_, countries)| countries.len() > min_countries)
            .map(|(year, _)| year)
            .collect()
    }

    fn countries_reporting_in(&self, year: i32) -> BTreeSet<&str> {
        self.population
            .iter()
            .filter(|record| record.year == year)
            .map(|record| record.country.as_str())
            .collect()
    }
}
