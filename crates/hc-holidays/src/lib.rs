//! # hc-holidays
//!
//! Holiday rules, region catalogs, and working-day counting.
//!
//! Holiday tables are loaded per country and language into a
//! [`HolidayCatalog`], which maps every region to the holidays observed
//! there.  A [`WorkingDayCounter`] resolves those holidays year by year and
//! subtracts them from the weekday tally of a date range.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCatalog`, its builder, and the `HolidaySource` trait.
pub mod catalog;

/// JSON region and holiday tables.
pub mod config;

/// `WorkingDayCounter` and the working-day algorithm.
pub mod counter;

/// `HolidayFormula` — the `KIND:PARAM` formula language.
pub mod formula;

/// `Holiday` — one holiday rule.
pub mod holiday;

/// `Region` — a subdivision of a country table.
pub mod region;

/// Easter computus and formula resolution.
pub mod resolver;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::{CatalogBuilder, HolidayCatalog, HolidaySource};
pub use config::{HolidayDocument, RegionDocument};
pub use counter::{count_working_days, holiday_on, WorkingDayCounter, WorkingWeek};
pub use formula::{FormulaKind, HolidayFormula};
pub use holiday::Holiday;
pub use region::{Region, CATALOG_REGION_ID, UNKNOWN_REGION_NAME};
pub use resolver::{
    easter_sunday, holiday_occurrences, representable_occurrences, resolve_holiday_date,
};
