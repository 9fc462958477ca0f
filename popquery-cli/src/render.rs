//! Plain-text rendering of query results.

use std::fmt::{self, Display, Formatter};

use popquery_core::{CountryRecord, PopulationRecord};

use crate::catalogue::QueryOutput;

const NONE: &str = "(none)";

impl Display for QueryOutput<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Records(records) => lines(f, records.iter().map(|record| RecordLine(*record))),
            Self::Countries(countries) => lines(f, countries.iter().map(CountryLine)),
            Self::Total(total) => write!(f, "{total}"),
            Self::Percent(percent) => write!(f, "{percent:.2}%"),
            Self::Average(average) => write!(f, "{average:.2}"),
            Self::Year(year) => write!(f, "{year}"),
            Self::YearCount(count) => write!(f, "{count}"),
            Self::RecordsPerYear(counts) => lines(
                f,
                counts.iter().map(|(year, count)| format!("{year}: {count}")),
            ),
            Self::TotalsPerYear(totals) => lines(
                f,
                totals.iter().map(|(year, total)| format!("{year}: {total}")),
            ),
            Self::Names(names) => lines(f, names),
            Self::Years(years) => lines(f, years),
        }
    }
}

/// Write one item per line, or a placeholder when there are none.
fn lines<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return f.write_str(NONE);
    }
    let mut first = true;
    for item in items {
        if !first {
            f.write_str("\n")?;
        }
        first = false;
        write!(f, "{item}")?;
    }
    Ok(())
}

struct RecordLine<'a>(&'a PopulationRecord);

impl Display for RecordLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(
            f,
            "{year} {country} ({iso3}) {indicator}: {value}",
            year = record.year,
            country = record.country,
            iso3 = record.iso3_code,
            indicator = record.indicator_id,
            value = record.value,
        )?;
        if !record.unit.is_empty() {
            write!(f, " {}", record.unit)?;
        }
        if !record.status.is_empty() {
            write!(f, " [{}]", record.status)?;
        }
        Ok(())
    }
}

struct CountryLine<'a>(&'a CountryRecord);

impl Display for CountryLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let country = self.0;
        write!(
            f,
            "{} (ISO2 {}, ISO3 {})",
            country.name, country.iso2_code, country.iso3_code
        )
    }
}
