//! Interactive menu loop and catalogue listing.

use std::io::{BufRead, Write};

use log::debug;
use popquery_core::QueryEngine;

use crate::catalogue::{self, CATALOGUE, EXIT_OPTION};
use crate::error::CliError;

const HEADER: &str = "--- Population query menu ---";
const PROMPT: &str = "Select an option (1-26): ";

/// Write the numbered catalogue followed by the exit entry.
pub(crate) fn write_catalogue<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "{HEADER}")?;
    for command in &CATALOGUE {
        writeln!(out, "{}. {}", command.number, command.title)?;
    }
    writeln!(out, "{EXIT_OPTION}. Exit")?;
    Ok(())
}

/// Run one catalogue entry and write its title and result.
///
/// # Errors
///
/// Returns [`CliError::UnknownQuery`] for numbers outside the catalogue and
/// [`CliError::Query`] when the query has no answer.
pub(crate) fn run_query<W: Write>(
    engine: &QueryEngine,
    number: u8,
    out: &mut W,
) -> Result<(), CliError> {
    let command = catalogue::find(number).ok_or(CliError::UnknownQuery { number })?;
    let output = command.run(engine)?;
    writeln!(out, "{}:", command.title)?;
    writeln!(out, "{output}")?;
    Ok(())
}

/// Drive the interactive loop until the exit option or end of input.
///
/// Query failures and invalid selections are reported on `out` and the loop
/// carries on; only I/O failures end it early.
pub(crate) fn run_menu<R, W>(engine: &QueryEngine, input: R, out: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        writeln!(out)?;
        write_catalogue(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("input closed; leaving menu");
            writeln!(out)?;
            return Ok(());
        };
        match line.trim().parse::<u8>() {
            Ok(EXIT_OPTION) => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            Ok(number) => match run_query(engine, number, out) {
                Ok(()) => {}
                Err(CliError::Io(err)) => return Err(CliError::Io(err)),
                Err(CliError::UnknownQuery { .. }) => {
                    writeln!(out, "Invalid option. Enter a number from 1 to {EXIT_OPTION}.")?;
                }
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            Err(_) => {
                writeln!(out, "Invalid option. Enter a number from 1 to {EXIT_OPTION}.")?;
            }
        }
    }
}
