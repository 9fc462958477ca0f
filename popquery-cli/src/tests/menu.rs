//! Tests for the interactive menu loop.

use crate::menu::{run_menu, run_query, write_catalogue};
use super::*;
use popquery_core::sample::sample_engine;
use popquery_core::test_support::MemorySource;
use rstest::rstest;

fn drive(engine: &QueryEngine, input: &str) -> String {
    let mut out = Vec::new();
    run_menu(engine, input.as_bytes(), &mut out).expect("menu loop succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[rstest]
fn catalogue_lists_every_entry_and_exit() {
    let mut out = Vec::new();
    write_catalogue(&mut out).expect("write catalogue");
    let text = String::from_utf8(out).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 27);
    assert_eq!(
        lines.get(1).copied(),
        Some("1. Population records for India from 2000 to 2023")
    );
    assert_eq!(lines.last().copied(), Some("26. Exit"));
}

#[rstest]
fn exit_option_stops_before_later_input() {
    let out = drive(&sample_engine(), "26\n5\n");
    assert!(out.contains("Goodbye."));
    assert!(!out.contains("1350000000"));
}

#[rstest]
fn end_of_input_leaves_quietly() {
    let out = drive(&sample_engine(), "");
    assert_eq!(out.matches("Select an option (1-26): ").count(), 1);
    assert!(!out.contains("Goodbye."));
}

#[rstest]
fn selections_print_titled_results() {
    let out = drive(&sample_engine(), " 5 \n24\n26\n");
    assert!(out.contains("Total population of India in 2022:\n1350000000\n"));
    assert!(out.contains("Year with the highest population for India:\n2023\n"));
    assert_eq!(out.matches("Select an option (1-26): ").count(), 3);
}

#[rstest]
#[case("abc\n")]
#[case("0\n")]
#[case("27\n")]
#[case("\n")]
fn invalid_selections_print_a_hint(#[case] input: &str) {
    let out = drive(&sample_engine(), input);
    assert!(out.contains("Invalid option. Enter a number from 1 to 26."));
}

#[rstest]
fn query_errors_keep_the_loop_running() {
    let engine = MemorySource::default().engine();
    let out = drive(&engine, "10\n9\n26\n");
    assert!(out.contains("Error: year of lowest population: no population records for India"));
    assert!(out.contains("Population of India in 2023:\n0\n"));
    assert!(out.contains("Goodbye."));
}

#[rstest]
fn run_query_reports_unknown_numbers() {
    let mut out = Vec::new();
    let err = run_query(&sample_engine(), 42, &mut out).expect_err("no query 42");
    assert!(matches!(err, CliError::UnknownQuery { number: 42 }));
    assert!(out.is_empty());
}
