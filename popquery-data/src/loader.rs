//! JSON loader for the three datasets.
//!
//! Each dataset lives in its own file as a JSON array of objects. A missing
//! file is not an error: the built-in sample collection takes its place and
//! is written back so the next run finds it.

use camino::Utf8Path;
use log::{info, warn};
use popquery_core::sample::{sample_countries, sample_indicators, sample_population};
use popquery_core::{CountryRecord, DatasetSource, IndicatorRecord, PopulationRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::LoadError;
use crate::dir::{DataDir, Lookup};

/// File holding population records.
pub const POPULATION_FILE: &str = "population.json";
/// File holding the country reference table.
pub const COUNTRIES_FILE: &str = "countries.json";
/// File holding the indicator reference table.
pub const INDICATORS_FILE: &str = "indicators.json";

/// Indentation used when writing sample files.
const SAMPLE_INDENT: &[u8] = b"    ";

/// Datasets read from a data directory.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use popquery_core::QueryEngine;
/// use popquery_data::JsonDataset;
///
/// let dataset = JsonDataset::load(Utf8Path::new("data")).expect("load datasets");
/// let engine = QueryEngine::from_source(dataset);
/// println!("{}", engine.total_population("India", 2022));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonDataset {
    population: Vec<PopulationRecord>,
    countries: Vec<CountryRecord>,
    indicators: Vec<IndicatorRecord>,
    seeded: Vec<&'static str>,
}

impl JsonDataset {
    /// Load all three datasets from `root`, seeding any missing file.
    ///
    /// The directory is created when it does not exist yet.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the directory cannot be prepared, a file
    /// cannot be read or decoded, or a sample file cannot be written.
    pub fn load(root: &Utf8Path) -> Result<Self, LoadError> {
        let dir = DataDir::open_or_create(root)?;
        Self::load_from(&dir)
    }

    /// Load all three datasets from an already opened directory.
    ///
    /// # Errors
    /// See [`JsonDataset::load`].
    pub fn load_from(dir: &DataDir) -> Result<Self, LoadError> {
        let mut seeded = Vec::new();
        let population = load_collection(dir, POPULATION_FILE, sample_population, &mut seeded)?;
        let countries = load_collection(dir, COUNTRIES_FILE, sample_countries, &mut seeded)?;
        let indicators = load_collection(dir, INDICATORS_FILE, sample_indicators, &mut seeded)?;
        Ok(Self {
            population,
            countries,
            indicators,
            seeded,
        })
    }

    /// Loaded population records.
    #[must_use]
    pub fn population(&self) -> &[PopulationRecord] {
        &self.population
    }

    /// Loaded country reference entries.
    #[must_use]
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Loaded indicator reference entries.
    #[must_use]
    pub fn indicators(&self) -> &[IndicatorRecord] {
        &self.indicators
    }

    /// Names of the files that were absent and replaced by sample data.
    #[must_use]
    pub fn seeded_files(&self) -> &[&'static str] {
        &self.seeded
    }
}

impl DatasetSource for JsonDataset {
    fn into_collections(
        self,
    ) -> (Vec<PopulationRecord>, Vec<CountryRecord>, Vec<IndicatorRecord>) {
        (self.population, self.countries, self.indicators)
    }
}

fn load_collection<T>(
    dir: &DataDir,
    name: &'static str,
    sample: fn() -> Vec<T>,
    seeded: &mut Vec<&'static str>,
) -> Result<Vec<T>, LoadError>
where
    T: Serialize + DeserializeOwned,
{
    match dir.read(name)? {
        Lookup::Found(contents) => {
            let records: Vec<T> =
                serde_json::from_str(&contents).map_err(|source| LoadError::Decode {
                    path: dir.file_path(name),
                    source,
                })?;
            info!("loaded {} records from {}", records.len(), dir.file_path(name));
            Ok(records)
        }
        Lookup::Absent => {
            warn!(
                "{} does not exist; writing sample records",
                dir.file_path(name)
            );
            let records = sample();
            let encoded = encode_pretty(&records).map_err(|source| LoadError::Encode {
                path: dir.file_path(name),
                source,
            })?;
            dir.write(name, &encoded)?;
            seeded.push(name);
            Ok(records)
        }
    }
}

/// Encode `value` as JSON indented with four spaces.
pub(crate) fn encode_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(SAMPLE_INDENT));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}
