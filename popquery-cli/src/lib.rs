//! Command-line interface for popquery.
//!
//! `menu` runs the interactive query loop, `run` answers a single numbered
//! query and `list` prints the catalogue. The data directory can come from
//! CLI flags, configuration files, or environment variables.
#![forbid(unsafe_code)]

mod catalogue;
mod error;
mod menu;
mod render;

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use popquery_core::QueryEngine;
use popquery_data::JsonDataset;
use serde::{Deserialize, Serialize};

pub use error::CliError;

const ARG_DATA_DIR: &str = "data-dir";
const ARG_QUERY: &str = "number";
const ENV_MENU_DATA_DIR: &str = "POPQUERY_CMDS_MENU_DATA_DIR";
const ENV_RUN_DATA_DIR: &str = "POPQUERY_CMDS_RUN_DATA_DIR";
const ENV_RUN_QUERY: &str = "POPQUERY_CMDS_RUN_NUMBER";

/// Run the popquery CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, loading, a
/// requested query, or terminal I/O fails.
pub fn run() -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(std::env::args_os(), stdin.lock(), &mut stdout.lock())
}

/// Run the CLI with explicit arguments, input and output.
///
/// The first argument is the binary name, as with [`std::env::args_os`].
/// Configuration files and environment variables are still consulted.
///
/// # Errors
///
/// Fails in the same situations as [`run`].
pub fn run_with<I, T, R, W>(args: I, input: R, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Menu(args) => {
            let config = MenuConfig::try_from(args.load_and_merge()?)?;
            let engine = load_engine(config.data_dir)?;
            menu::run_menu(&engine, input, out)
        }
        Command::Run(args) => {
            let config = RunConfig::try_from(args.load_and_merge()?)?;
            let engine = load_engine(config.data_dir)?;
            menu::run_query(&engine, config.number, out)
        }
        Command::List => menu::write_catalogue(out),
    }
}

fn load_engine(data_dir: Utf8PathBuf) -> Result<QueryEngine, CliError> {
    let dataset = JsonDataset::load(&data_dir)?;
    info!(
        "loaded {} population records from {data_dir}",
        dataset.population().len()
    );
    Ok(QueryEngine::from_source(dataset))
}

#[derive(Debug, Parser)]
#[command(
    name = "popquery",
    about = "Canned analytical queries over country population datasets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the query catalogue interactively.
    Menu(MenuArgs),
    /// Run one numbered query and exit.
    Run(RunArgs),
    /// Print the numbered query catalogue.
    List,
}

/// CLI arguments for the `menu` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "menu", about = "Browse the query catalogue interactively")]
#[ortho_config(prefix = "POPQUERY")]
struct MenuArgs {
    /// Directory holding population.json, countries.json and indicators.json.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
}

/// CLI arguments for the `run` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "run",
    long_about = "Run a single query from the catalogue by its menu number. \
                 Use `popquery list` to see the numbers.",
    about = "Run one numbered query and exit"
)]
#[ortho_config(prefix = "POPQUERY")]
struct RunArgs {
    /// Menu number of the query to run.
    #[arg(value_name = ARG_QUERY)]
    #[serde(default)]
    number: Option<u8>,
    /// Directory holding population.json, countries.json and indicators.json.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuConfig {
    data_dir: Utf8PathBuf,
}

impl TryFrom<MenuArgs> for MenuConfig {
    type Error = CliError;

    fn try_from(args: MenuArgs) -> Result<Self, Self::Error> {
        let data_dir = args.data_dir.ok_or(CliError::MissingArgument {
            field: ARG_DATA_DIR,
            env: ENV_MENU_DATA_DIR,
        })?;
        Ok(Self { data_dir })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    number: u8,
    data_dir: Utf8PathBuf,
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        let number = args.number.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_RUN_QUERY,
        })?;
        let data_dir = args.data_dir.ok_or(CliError::MissingArgument {
            field: ARG_DATA_DIR,
            env: ENV_RUN_DATA_DIR,
        })?;
        Ok(Self { number, data_dir })
    }
}

#[cfg(test)]
mod tests;
