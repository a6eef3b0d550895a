//! Configuration documents.
//!
//! Two independent JSON tables, both grouped by `(country_code, language)`:
//!
//! * a **region table** listing the regions of each country, and
//! * a **holiday table** listing the holiday rules of each country together
//!   with the ids of the regions they apply to.
//!
//! ```json
//! { "countries": [ { "country_code": "DE", "language": "DE",
//!     "regions": [ { "id": 0, "name": "Catalog" },
//!                  { "id": 2, "name": "Bayern" } ] } ] }
//! ```
//!
//! ```json
//! { "countries": [ { "country_code": "DE", "language": "DE",
//!     "holidays": [ { "id": 10, "name": "Neujahr", "formula": "F:1.1",
//!                     "duration": 1, "valid_from": "01.01.1900",
//!                     "valid_to": "31.12.2099", "regions": "0,1,2" } ] } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use hc_core::errors::{Error, Result};
use hc_core::utilities::data_parsers::parse_id_list;
use hc_core::{fail, HolidayId, RegionId};
use hc_time::Date;

use crate::holiday::Holiday;

/// Read a JSON document from a file.
fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Configuration(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| Error::Configuration(format!("cannot parse {}: {e}", path.display())))
}

/// Parse a JSON document from a string.
fn parse_json<T: for<'de> Deserialize<'de>>(what: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::Configuration(format!("{what}: {e}")))
}

/// Whether a section's key matches the requested country and language,
/// ignoring case and surrounding whitespace.
fn key_matches(code: &str, lang: &str, country_code: &str, language: &str) -> bool {
    code.trim().eq_ignore_ascii_case(country_code.trim())
        && lang.trim().eq_ignore_ascii_case(language.trim())
}

// ── Region table ──────────────────────────────────────────────────────────────

/// The region table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDocument {
    /// One section per country/language pair.
    #[serde(default)]
    pub countries: Vec<RegionSection>,
}

/// Regions of one country/language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSection {
    /// ISO country code, e.g. `"DE"`.
    pub country_code: String,
    /// Language of the region names, e.g. `"DE"`.
    pub language: String,
    /// The regions; id 0 is the aggregate catalog region.
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
}

/// One row of the region table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Region id, unique within the section.
    pub id: RegionId,
    /// Display name.
    pub name: String,
}

impl RegionDocument {
    /// Parse from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_json("region table", text)
    }

    /// Read from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }

    /// Sections for the given country and language.
    pub fn sections<'a>(
        &'a self,
        country_code: &'a str,
        language: &'a str,
    ) -> impl Iterator<Item = &'a RegionSection> + 'a {
        self.countries
            .iter()
            .filter(move |s| key_matches(&s.country_code, &s.language, country_code, language))
    }
}

// ── Holiday table ─────────────────────────────────────────────────────────────

/// The holiday table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDocument {
    /// One section per country/language pair.
    #[serde(default)]
    pub countries: Vec<HolidaySection>,
}

/// Holidays of one country/language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySection {
    /// ISO country code, e.g. `"DE"`.
    pub country_code: String,
    /// Language of the holiday names, e.g. `"DE"`.
    pub language: String,
    /// The holiday rules.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// One row of the holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Holiday id.
    pub id: HolidayId,
    /// Display name.
    pub name: String,
    /// Formula string, e.g. `"E:-2"`.
    pub formula: String,
    /// Number of consecutive days.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// First valid date, `DD.MM.YYYY` or `YYYY-MM-DD`.
    pub valid_from: String,
    /// Last valid date, `DD.MM.YYYY` or `YYYY-MM-DD`.
    pub valid_to: String,
    /// Comma-separated ids of the regions observing the holiday.
    pub regions: String,
}

fn default_duration() -> u32 {
    1
}

impl HolidayDocument {
    /// Parse from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_json("holiday table", text)
    }

    /// Read from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }

    /// Sections for the given country and language.
    pub fn sections<'a>(
        &'a self,
        country_code: &'a str,
        language: &'a str,
    ) -> impl Iterator<Item = &'a HolidaySection> + 'a {
        self.countries
            .iter()
            .filter(move |s| key_matches(&s.country_code, &s.language, country_code, language))
    }
}

impl HolidayRecord {
    /// Build the [`Holiday`] described by this row.
    pub fn to_holiday(&self) -> Result<Holiday> {
        let valid_from = self.date_field("valid_from", &self.valid_from)?;
        let valid_to = self.date_field("valid_to", &self.valid_to)?;
        Holiday::parse(
            self.id,
            self.name.clone(),
            &self.formula,
            self.duration,
            valid_from,
            valid_to,
        )
    }

    /// The region ids of the assignment list.
    pub fn region_ids(&self) -> Result<Vec<RegionId>> {
        match parse_id_list(&self.regions) {
            Some(ids) => Ok(ids),
            None => fail!(
                "holiday {} ({}): malformed region list '{}'",
                self.id,
                self.name,
                self.regions
            ),
        }
    }

    fn date_field(&self, field: &str, text: &str) -> Result<Date> {
        text.parse::<Date>().map_err(|e| {
            Error::Configuration(format!("holiday {} ({}): {field}: {e}", self.id, self.name))
        })
    }
}
