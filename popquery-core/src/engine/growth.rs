//! Growth and averaging queries.
//!
//! These are the only queries that produce floating-point results.

use super::{QueryEngine, window_start};

impl QueryEngine {
    /// Percentage change of `country`'s total population from `start` to
    /// `end`.
    ///
    /// A zero baseline yields `0.0`. This also covers a country with no data
    /// for `start`, so "no baseline" and "no growth" are indistinguishable.
    #[must_use]
    pub fn growth_percent(&self, country: &str, start: i32, end: i32) -> f64 {
        let baseline = self.total_population(country, start);
        if baseline == 0 {
            return 0.0;
        }
        percent_change(baseline, self.total_population(country, end))
    }

    /// Names of reference countries whose growth over the latest `window`
    /// years exceeds `threshold` percent.
    ///
    /// The window ends at the latest year in the whole dataset. Countries are
    /// reported in reference-table order; population records for countries
    /// missing from the reference table are never considered.
    #[must_use]
    pub fn countries_with_growth_above(&self, threshold: f64, window: u32) -> Vec<String> {
        let Some(latest) = self.max_year() else {
            return Vec::new();
        };
        let earliest = window_start(latest, window);
        self.countries
            .iter()
            .filter(|country| self.growth_percent(&country.name, earliest, latest) > threshold)
            .map(|country| country.name.clone())
            .collect()
    }

    /// Mean value of `country`'s records with `start <= year <= end`.
    ///
    /// Returns `0.0` when no record matches.
    #[must_use]
    pub fn average_population(&self, country: &str, start: i32, end: i32) -> f64 {
        let (sum, count) = self
            .records_by_country_and_year_range(country, start, end)
            .into_iter()
            .fold((0_u64, 0_u64), |(sum, count), record| {
                (sum.saturating_add(record.value), count.saturating_add(1))
            });
        if count == 0 {
            return 0.0;
        }
        mean(sum, count)
    }

    /// Years in which `country`'s total grew by more than `delta` over the
    /// immediately preceding calendar year.
    ///
    /// A year only qualifies when the preceding year also has data.
    #[must_use]
    pub fn years_with_growth_above(&self, country: &str, delta: u64) -> Vec<i32> {
        let totals = self.yearly_totals(country);
        totals
            .iter()
            .filter(|&(&year, &total)| {
                year.checked_sub(1)
                    .and_then(|previous| totals.get(&previous))
                    .is_some_and(|&before| total.saturating_sub(before) > delta)
            })
            .map(|(&year, _)| year)
            .collect()
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "growth is reported as a floating-point percentage"
)]
fn percent_change(baseline: u64, latest: u64) -> f64 {
    let start = baseline as f64;
    (latest as f64 - start) / start * 100.0
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averages are reported as floating-point values"
)]
fn mean(sum: u64, count: u64) -> f64 {
    sum as f64 / count as f64
}
