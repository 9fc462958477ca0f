//! Numbered catalogue of canned queries.
//!
//! Each entry binds a menu number and title to a plain function that calls
//! one engine method with fixed arguments. The interactive menu and the
//! `run` subcommand both dispatch through this table.

use std::collections::BTreeMap;

use log::debug;
use popquery_core::{
    CountryRecord, DEFAULT_GROWTH_THRESHOLD, DEFAULT_GROWTH_WINDOW, DEFAULT_LOW_WINDOW,
    DEFAULT_RECENT_YEARS, PopulationRecord, QueryEngine, QueryError,
};

/// Menu number that leaves the interactive loop.
pub(crate) const EXIT_OPTION: u8 = 26;

const FOCUS_COUNTRY: &str = "India";
const TOTAL_POPULATION: &str = "SP.POP.TOTL";
const ONE_BILLION: u64 = 1_000_000_000;
const ONE_MILLION: u64 = 1_000_000;
const FIRST_DECADE: i32 = 1960;
const REPORTING_COUNTRIES: usize = 50;

/// Result of a catalogue query, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryOutput<'a> {
    /// Population records in stored order.
    Records(Vec<&'a PopulationRecord>),
    /// The country reference table.
    Countries(&'a [CountryRecord]),
    /// A population total.
    Total(u64),
    /// A growth percentage.
    Percent(f64),
    /// A mean population.
    Average(f64),
    /// A single year.
    Year(i32),
    /// A count of distinct years.
    YearCount(usize),
    /// Record counts keyed by year.
    RecordsPerYear(BTreeMap<i32, usize>),
    /// Population totals keyed by year.
    TotalsPerYear(BTreeMap<i32, u64>),
    /// Country names.
    Names(Vec<String>),
    /// A list of years.
    Years(Vec<i32>),
}

type QueryFn = for<'a> fn(&'a QueryEngine) -> Result<QueryOutput<'a>, QueryError>;

/// A numbered, titled query.
#[derive(Clone, Copy)]
pub(crate) struct QueryCommand {
    pub(crate) number: u8,
    pub(crate) title: &'static str,
    query: QueryFn,
}

impl QueryCommand {
    /// Run the query against `engine`.
    pub(crate) fn run<'a>(&self, engine: &'a QueryEngine) -> Result<QueryOutput<'a>, QueryError> {
        debug!("running query {}: {}", self.number, self.title);
        (self.query)(engine)
    }
}

impl std::fmt::Debug for QueryCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCommand")
            .field("number", &self.number)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Find the catalogue entry for a menu number.
pub(crate) fn find(number: u8) -> Option<&'static QueryCommand> {
    CATALOGUE.iter().find(|command| command.number == number)
}

const fn entry(number: u8, title: &'static str, query: QueryFn) -> QueryCommand {
    QueryCommand {
        number,
        title,
        query,
    }
}

pub(crate) static CATALOGUE: [QueryCommand; 25] = [
    entry(
        1,
        "Population records for India from 2000 to 2023",
        focus_records_2000_2023,
    ),
    entry(2, "Countries with their ISO2 and ISO3 codes", countries),
    entry(
        3,
        "Population records for indicator 'SP.POP.TOTL'",
        total_population_records,
    ),
    entry(
        4,
        "Population records from the last 10 years for all countries",
        recent_records,
    ),
    entry(5, "Total population of India in 2022", focus_total_2022),
    entry(6, "Total population recorded before 2000", total_before_2000),
    entry(7, "Total population recorded after 2010", total_after_2010),
    entry(
        8,
        "Population growth of India between 2010 and 2020",
        focus_growth_2010_2020,
    ),
    entry(9, "Population of India in 2023", focus_total_2023),
    entry(
        10,
        "Year with the lowest population for India",
        focus_lowest_year,
    ),
    entry(11, "Number of population records per year", records_per_year),
    entry(
        12,
        "Countries with population growth above 2% over the last 5 years",
        fast_growing_countries,
    ),
    entry(
        13,
        "Years in which India's population exceeded 1,000 million",
        focus_years_above_billion,
    ),
    entry(
        14,
        "Total population of all countries in 2000",
        world_total_2000,
    ),
    entry(
        15,
        "Lowest population recorded for India in the last 20 years",
        focus_recent_low,
    ),
    entry(
        16,
        "Average population recorded per year for India from 1980 to 2020",
        focus_average_1980_2020,
    ),
    entry(
        17,
        "Number of years with population data for India",
        focus_years_with_data,
    ),
    entry(
        18,
        "Countries with population data for every year from 2000 to 2023",
        complete_countries_2000_2023,
    ),
    entry(19, "Total population of India in 2019", focus_total_2019),
    entry(
        20,
        "Years in which India's population grew by more than 1 million over the previous year",
        focus_growth_years,
    ),
    entry(
        21,
        "Population of India in each decade since 1960",
        focus_decades,
    ),
    entry(
        22,
        "Total population of all countries in 2023",
        world_total_2023,
    ),
    entry(
        23,
        "Years from 1960 to 2023 without population data for India",
        focus_missing_years,
    ),
    entry(
        24,
        "Year with the highest population for India",
        focus_peak_year,
    ),
    entry(
        25,
        "Years with population data for more than 50 countries",
        widely_reported_years,
    ),
];

fn focus_records_2000_2023(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Records(
        engine.records_by_country_and_year_range(FOCUS_COUNTRY, 2000, 2023),
    ))
}

fn countries(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Countries(engine.list_countries()))
}

fn total_population_records(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Records(
        engine.records_by_indicator(TOTAL_POPULATION),
    ))
}

fn recent_records(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Records(
        engine.records_in_last_n_years(DEFAULT_RECENT_YEARS),
    ))
}

fn focus_total_2022(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population(FOCUS_COUNTRY, 2022)))
}

fn total_before_2000(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population_before(2000)))
}

fn total_after_2010(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population_after(2010)))
}

fn focus_growth_2010_2020(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Percent(
        engine.growth_percent(FOCUS_COUNTRY, 2010, 2020),
    ))
}

fn focus_total_2023(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population(FOCUS_COUNTRY, 2023)))
}

fn focus_lowest_year(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    engine
        .year_of_lowest_population(FOCUS_COUNTRY)
        .map(QueryOutput::Year)
}

fn records_per_year(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::RecordsPerYear(engine.record_counts_by_year()))
}

fn fast_growing_countries(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Names(engine.countries_with_growth_above(
        DEFAULT_GROWTH_THRESHOLD,
        DEFAULT_GROWTH_WINDOW,
    )))
}

fn focus_years_above_billion(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Years(
        engine.years_with_population_above(FOCUS_COUNTRY, ONE_BILLION),
    ))
}

fn world_total_2000(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population_by_year(2000)))
}

fn focus_recent_low(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    engine
        .least_population_in_recent_years(FOCUS_COUNTRY, DEFAULT_LOW_WINDOW)
        .map(QueryOutput::Total)
}

fn focus_average_1980_2020(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Average(
        engine.average_population(FOCUS_COUNTRY, 1980, 2020),
    ))
}

fn focus_years_with_data(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::YearCount(
        engine.years_with_data_count(FOCUS_COUNTRY),
    ))
}

fn complete_countries_2000_2023(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Names(
        engine.countries_with_data_for_every_year(2000, 2023),
    ))
}

fn focus_total_2019(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population(FOCUS_COUNTRY, 2019)))
}

fn focus_growth_years(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Years(
        engine.years_with_growth_above(FOCUS_COUNTRY, ONE_MILLION),
    ))
}

fn focus_decades(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::TotalsPerYear(
        engine.population_by_decade(FOCUS_COUNTRY, FIRST_DECADE),
    ))
}

fn world_total_2023(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Total(engine.total_population_by_year(2023)))
}

fn focus_missing_years(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Years(
        engine.years_missing_data(FOCUS_COUNTRY, FIRST_DECADE, 2023),
    ))
}

fn focus_peak_year(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    engine
        .year_of_peak_population(FOCUS_COUNTRY)
        .map(QueryOutput::Year)
}

fn widely_reported_years(engine: &QueryEngine) -> Result<QueryOutput<'_>, QueryError> {
    Ok(QueryOutput::Years(
        engine.years_with_countries_reporting_above(REPORTING_COUNTRIES),
    ))
}
