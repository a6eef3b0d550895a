//! Holiday catalog: the holiday lists of every region of one country table.
//!
//! The catalog maps each region id to the holidays observed there.  A
//! holiday assigned to several regions is stored once per region.  Holiday
//! queries can name the region explicitly, or go through the catalog's
//! *current region* cursor.
//!
//! # Example
//! ```
//! use hc_holidays::{Holiday, HolidayCatalog, HolidaySource};
//! use hc_time::Date;
//!
//! let from = Date::from_ymd(1900, 1, 1).unwrap();
//! let to = Date::from_ymd(2099, 12, 31).unwrap();
//! let catalog = HolidayCatalog::builder("DE", "DE")
//!     .region(0, "Catalog")
//!     .region(2, "Bayern")
//!     .holiday(Holiday::parse(10, "Neujahr", "F:1.1", 1, from, to).unwrap(), [0, 2])
//!     .holiday(Holiday::parse(11, "Heilige Drei Könige", "F:6.1", 1, from, to).unwrap(), [0, 2])
//!     .build()
//!     .unwrap();
//!
//! catalog.set_current_region(2).unwrap();
//! assert_eq!(catalog.current_region_name().unwrap(), "Bayern");
//! assert_eq!(catalog.holidays_for_current_region().unwrap().len(), 2);
//! assert!(catalog.set_current_region(5).is_err());
//! ```

use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use hc_core::errors::{Error, Result};
use hc_core::{fail, RegionId};

use crate::config::{HolidayDocument, RegionDocument};
use crate::holiday::Holiday;
use crate::region::{Region, CATALOG_REGION_ID};

/// Source of per-region holiday lists.
///
/// This is the seam between the working-day counter and whatever holds the
/// holiday tables.
pub trait HolidaySource {
    /// The holidays observed in `region`, in table order.
    ///
    /// # Errors
    /// Returns [`Error::UnknownRegion`] if the source has no such region.
    fn holidays_for_region(&self, region: RegionId) -> Result<&[Holiday]>;

    /// The currently selected region.
    fn current_region_id(&self) -> RegionId;

    /// The holidays observed in the currently selected region.
    fn holidays_for_current_region(&self) -> Result<&[Holiday]> {
        self.holidays_for_region(self.current_region_id())
    }
}

/// Regions and holiday lists of one country/language table.
///
/// The current-region cursor lives in a [`Cell`], so the catalog can be
/// re-pointed through a shared reference while counters borrow it.  The
/// catalog is therefore not `Sync`; threads that need different regions
/// should each hold their own catalog, or use the region-explicit queries.
#[derive(Debug, Clone)]
pub struct HolidayCatalog {
    country_code: String,
    language: String,
    regions: BTreeMap<RegionId, Region>,
    holidays: BTreeMap<RegionId, Vec<Holiday>>,
    current_region: Cell<RegionId>,
}

impl HolidayCatalog {
    /// Start building a catalog by hand.
    pub fn builder(country_code: &str, language: &str) -> CatalogBuilder {
        CatalogBuilder::new(country_code, language)
    }

    /// Build the catalog of `country_code`/`language` from parsed tables.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the region table has no section
    /// for the pair, if a region id is declared twice, or if any holiday row
    /// is malformed.
    pub fn from_documents(
        country_code: &str,
        language: &str,
        regions: &RegionDocument,
        holidays: &HolidayDocument,
    ) -> Result<Self> {
        let mut builder = CatalogBuilder::new(country_code, language);
        let mut found = false;
        for section in regions.sections(country_code, language) {
            found = true;
            for record in &section.regions {
                builder = builder.region(record.id, record.name.clone());
            }
        }
        if !found {
            fail!(
                "region table has no section for country {} / language {}",
                builder.country_code,
                builder.language
            );
        }
        for section in holidays.sections(country_code, language) {
            for record in &section.holidays {
                let holiday = record.to_holiday()?;
                let ids = record.region_ids()?;
                builder = builder.holiday(holiday, ids);
            }
        }
        builder.build()
    }

    /// Build the catalog from the JSON text of both tables.
    pub fn from_json_str(
        country_code: &str,
        language: &str,
        regions_json: &str,
        holidays_json: &str,
    ) -> Result<Self> {
        let regions = RegionDocument::from_json_str(regions_json)?;
        let holidays = HolidayDocument::from_json_str(holidays_json)?;
        Self::from_documents(country_code, language, &regions, &holidays)
    }

    /// Build the catalog from two JSON files.
    pub fn load(
        country_code: &str,
        language: &str,
        regions_path: impl AsRef<Path>,
        holidays_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let regions = RegionDocument::from_path(regions_path)?;
        let holidays = HolidayDocument::from_path(holidays_path)?;
        Self::from_documents(country_code, language, &regions, &holidays)
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Country code, trimmed and upper-cased.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Language, trimmed and upper-cased.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All regions, ordered by id.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// Whether `id` names a region of this catalog.
    pub fn contains_region(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    /// The region with the given id.
    pub fn region(&self, id: RegionId) -> Result<&Region> {
        self.regions.get(&id).ok_or(Error::UnknownRegion(id))
    }

    // ── Current region ───────────────────────────────────────────────────

    /// Select the region that cursor-relative queries read from.
    ///
    /// # Errors
    /// Returns [`Error::UnknownRegion`] and leaves the cursor unchanged if
    /// the catalog has no such region.
    pub fn set_current_region(&self, id: RegionId) -> Result<()> {
        if !self.contains_region(id) {
            return Err(Error::UnknownRegion(id));
        }
        self.current_region.set(id);
        Ok(())
    }

    /// Name of the currently selected region.
    pub fn current_region_name(&self) -> Result<&str> {
        self.region(self.current_region.get()).map(Region::name)
    }
}

impl HolidaySource for HolidayCatalog {
    fn holidays_for_region(&self, region: RegionId) -> Result<&[Holiday]> {
        self.holidays
            .get(&region)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownRegion(region))
    }

    fn current_region_id(&self) -> RegionId {
        self.current_region.get()
    }
}

/// Builder for [`HolidayCatalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    country_code: String,
    language: String,
    regions: Vec<Region>,
    assignments: Vec<(Holiday, Vec<RegionId>)>,
}

impl CatalogBuilder {
    /// Begin building the catalog of `country_code`/`language`.
    pub fn new(country_code: &str, language: &str) -> Self {
        Self {
            country_code: country_code.trim().to_ascii_uppercase(),
            language: language.trim().to_ascii_uppercase(),
            regions: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Declare a region.
    pub fn region(mut self, id: RegionId, name: impl Into<String>) -> Self {
        self.regions.push(Region::new(id, name));
        self
    }

    /// Assign `holiday` to each of `region_ids`.
    pub fn holiday(
        mut self,
        holiday: Holiday,
        region_ids: impl IntoIterator<Item = RegionId>,
    ) -> Self {
        self.assignments.push((holiday, region_ids.into_iter().collect()));
        self
    }

    /// Finish the catalog.
    ///
    /// Holidays assigned to an undeclared region id create that region under
    /// the name [`UNKNOWN_REGION_NAME`](crate::region::UNKNOWN_REGION_NAME).
    /// The current region starts at the catalog region (id 0).
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if a region id is declared twice.
    pub fn build(self) -> Result<HolidayCatalog> {
        let mut regions = BTreeMap::new();
        let mut holidays: BTreeMap<RegionId, Vec<Holiday>> = BTreeMap::new();
        for region in self.regions {
            let id = region.id();
            if regions.insert(id, region).is_some() {
                fail!(
                    "region {id} declared twice for {}/{}",
                    self.country_code,
                    self.language
                );
            }
            holidays.insert(id, Vec::new());
        }

        let mut assigned = 0usize;
        for (holiday, ids) in self.assignments {
            for id in ids {
                if !regions.contains_key(&id) {
                    warn!(
                        "holiday {} ({}) assigned to undeclared region {id} in {}/{}",
                        holiday.id(),
                        holiday.name(),
                        self.country_code,
                        self.language
                    );
                    regions.insert(id, Region::unknown(id));
                }
                holidays.entry(id).or_default().push(holiday.clone());
                assigned += 1;
            }
        }

        debug!(
            "holiday catalog {}/{}: {} regions, {} region assignments",
            self.country_code,
            self.language,
            regions.len(),
            assigned
        );

        Ok(HolidayCatalog {
            country_code: self.country_code,
            language: self.language,
            regions,
            holidays,
            current_region: Cell::new(CATALOG_REGION_ID),
        })
    }
}
