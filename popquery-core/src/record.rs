//! Typed records held by the query engine.
//!
//! The three record kinds mirror the JSON datasets the loader reads. They are
//! joined by value rather than by reference: a [`PopulationRecord`] names its
//! country and indicator, and nothing guarantees the matching
//! [`CountryRecord`] or [`IndicatorRecord`] exists.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A population figure for one country, year and indicator.
///
/// `(country, year, indicator_id)` identifies a record in practice, although
/// duplicates are accepted and every query tolerates them.
///
/// # Examples
///
/// ```
/// use popquery_core::PopulationRecord;
///
/// let record = PopulationRecord::new(2020, "India", "IND", "SP.POP.TOTL", 1_300_000_000);
/// assert_eq!(record.year, 2020);
/// assert_eq!(record.value, 1_300_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PopulationRecord {
    /// Calendar year the figure refers to.
    pub year: i32,
    /// Country name, matched against [`CountryRecord::name`].
    pub country: String,
    /// ISO 3166-1 alpha-3 code of the country.
    pub iso3_code: String,
    /// Indicator code, matched against [`IndicatorRecord::id`].
    pub indicator_id: String,
    /// Human-readable indicator description.
    pub description: String,
    /// Observed value; population counts are never negative.
    pub value: u64,
    /// Availability status reported by the source.
    pub status: String,
    /// Unit the value is expressed in.
    pub unit: String,
}

impl PopulationRecord {
    /// Build a record with empty description, status and unit.
    ///
    /// The descriptive fields are rarely needed by queries; use the
    /// `with_*` builders to fill them in.
    pub fn new(
        year: i32,
        country: impl Into<String>,
        iso3_code: impl Into<String>,
        indicator_id: impl Into<String>,
        value: u64,
    ) -> Self {
        Self {
            year,
            country: country.into(),
            iso3_code: iso3_code.into(),
            indicator_id: indicator_id.into(),
            description: String::new(),
            value,
            status: String::new(),
            unit: String::new(),
        }
    }

    /// Set the indicator description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the availability status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the unit of measure.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Report whether the record belongs to `country`.
    #[must_use]
    pub fn is_for(&self, country: &str) -> bool {
        self.country == country
    }
}

/// Reference entry describing a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountryRecord {
    /// Display name, used as the join key for population records.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub iso2_code: String,
    /// ISO 3166-1 alpha-3 code.
    pub iso3_code: String,
}

impl CountryRecord {
    /// Construct a country reference entry.
    pub fn new(
        name: impl Into<String>,
        iso2_code: impl Into<String>,
        iso3_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            iso2_code: iso2_code.into(),
            iso3_code: iso3_code.into(),
        }
    }
}

/// Reference entry describing a statistical indicator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorRecord {
    /// Short indicator code such as `SP.POP.TOTL`.
    pub id: String,
    /// Human-readable description.
    pub description: String,
}

impl IndicatorRecord {
    /// Construct an indicator reference entry.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}
