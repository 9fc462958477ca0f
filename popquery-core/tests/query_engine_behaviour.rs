//! Behavioural coverage for the population query engine.

use std::cell::{Cell, RefCell};

use popquery_core::sample::sample_engine;
use popquery_core::{QueryEngine, QueryError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct EngineWorld {
    engine: RefCell<QueryEngine>,
    total: Cell<Option<u64>>,
    average: Cell<Option<f64>>,
    growth: Cell<Option<f64>>,
    year: RefCell<Option<Result<i32, QueryError>>>,
    countries: RefCell<Vec<String>>,
    record_count: Cell<Option<usize>>,
}

#[fixture]
fn world() -> EngineWorld {
    EngineWorld::default()
}

#[given("the sample dataset")]
fn sample_dataset(#[from(world)] world: &EngineWorld) {
    world.engine.replace(sample_engine());
}

#[given("an empty dataset")]
fn empty_dataset(#[from(world)] world: &EngineWorld) {
    world.engine.replace(QueryEngine::default());
}

#[when("I ask for the total population of {country} in {year}")]
fn ask_total(country: String, year: i32, #[from(world)] world: &EngineWorld) {
    let total = world.engine.borrow().total_population(&country, year);
    world.total.set(Some(total));
}

#[when("I ask for the average population of {country} from {start} to {end}")]
fn ask_average(country: String, start: i32, end: i32, #[from(world)] world: &EngineWorld) {
    let average = world.engine.borrow().average_population(&country, start, end);
    world.average.set(Some(average));
}

#[when("I ask for the growth of {country} from {start} to {end}")]
fn ask_growth(country: String, start: i32, end: i32, #[from(world)] world: &EngineWorld) {
    let growth = world.engine.borrow().growth_percent(&country, start, end);
    world.growth.set(Some(growth));
}

#[when("I ask for the year of lowest population of {country}")]
fn ask_lowest_year(country: String, #[from(world)] world: &EngineWorld) {
    let year = world.engine.borrow().year_of_lowest_population(&country);
    world.year.replace(Some(year));
}

#[when("I ask which countries report every year from {start} to {end}")]
fn ask_coverage(start: i32, end: i32, #[from(world)] world: &EngineWorld) {
    let countries = world
        .engine
        .borrow()
        .countries_with_data_for_every_year(start, end);
    world.countries.replace(countries);
}

#[when("I ask for the records of the last {years} years")]
fn ask_recent(years: u32, #[from(world)] world: &EngineWorld) {
    let count = world.engine.borrow().records_in_last_n_years(years).len();
    world.record_count.set(Some(count));
}

#[then("the total is {expected}")]
fn total_is(expected: u64, #[from(world)] world: &EngineWorld) {
    assert_eq!(world.total.get(), Some(expected));
}

#[then("the average is {expected}")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point averages"
)]
fn average_is(expected: f64, #[from(world)] world: &EngineWorld) {
    let Some(average) = world.average.get() else {
        panic!("average must be recorded");
    };
    assert!((average - expected).abs() < 1e-9, "average was {average}");
}

#[then("the growth is about {expected} percent")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point growth"
)]
fn growth_is(expected: f64, #[from(world)] world: &EngineWorld) {
    let Some(growth) = world.growth.get() else {
        panic!("growth must be recorded");
    };
    assert!((growth - expected).abs() < 1e-6, "growth was {growth}");
}

#[then("the year is {expected}")]
fn year_is(expected: i32, #[from(world)] world: &EngineWorld) {
    assert_eq!(*world.year.borrow(), Some(Ok(expected)));
}

#[then("no population records are found")]
fn not_found(#[from(world)] world: &EngineWorld) {
    let binding = world.year.borrow();
    match binding.as_ref() {
        Some(Err(QueryError::NotFound { .. })) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[then("the reporting countries are {names}")]
fn reporting_countries(names: String, #[from(world)] world: &EngineWorld) {
    let expected: Vec<String> = names.split(", ").map(str::to_owned).collect();
    assert_eq!(*world.countries.borrow(), expected);
}

#[then("{expected} records are returned")]
fn records_returned(expected: usize, #[from(world)] world: &EngineWorld) {
    assert_eq!(world.record_count.get(), Some(expected));
}

#[scenario(path = "tests/features/query_engine.feature", index = 0)]
fn total_for_country_and_year(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 1)]
fn growth_between_sample_years(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 2)]
fn lowest_population_year(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 3)]
fn countries_reporting_every_year(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 4)]
fn unknown_country_aggregates_to_zero(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 5)]
fn unknown_country_has_no_extremum(world: EngineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/query_engine.feature", index = 6)]
fn empty_dataset_has_no_recent_records(world: EngineWorld) {
    let _ = world;
}
