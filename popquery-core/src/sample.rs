//! Built-in sample dataset.
//!
//! Loaders fall back to these collections when a data file is absent, and
//! tests use them as a known fixture.

use crate::{CountryRecord, IndicatorRecord, PopulationRecord, QueryEngine};

const INDIA_TOTALS: [(i32, u64); 6] = [
    (2018, 1_250_000_000),
    (2019, 1_270_000_000),
    (2020, 1_300_000_000),
    (2021, 1_320_000_000),
    (2022, 1_350_000_000),
    (2023, 1_380_000_000),
];

/// Sample population records: India's total population for 2018–2023.
#[must_use]
pub fn sample_population() -> Vec<PopulationRecord> {
    INDIA_TOTALS
        .iter()
        .map(|&(year, value)| {
            PopulationRecord::new(year, "India", "IND", "SP.POP.TOTL", value)
                .with_description("Total population")
                .with_status("available")
                .with_unit("people")
        })
        .collect()
}

/// Sample country reference table.
#[must_use]
pub fn sample_countries() -> Vec<CountryRecord> {
    [
        ("India", "IN", "IND"),
        ("China", "CN", "CHN"),
        ("United States", "US", "USA"),
        ("Brazil", "BR", "BRA"),
        ("Indonesia", "ID", "IDN"),
    ]
    .into_iter()
    .map(|(name, iso2, iso3)| CountryRecord::new(name, iso2, iso3))
    .collect()
}

/// Sample indicator reference table.
#[must_use]
pub fn sample_indicators() -> Vec<IndicatorRecord> {
    [
        ("SP.POP.TOTL", "Total population"),
        ("SP.POP.GROW", "Population growth (annual %)"),
        ("SP.URB.TOTL", "Urban population"),
        ("SP.RUR.TOTL", "Rural population"),
    ]
    .into_iter()
    .map(|(id, description)| IndicatorRecord::new(id, description))
    .collect()
}

/// Query engine loaded with the complete sample dataset.
#[must_use]
pub fn sample_engine() -> QueryEngine {
    QueryEngine::new(sample_population(), sample_countries(), sample_indicators())
}
