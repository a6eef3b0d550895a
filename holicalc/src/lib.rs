//! # holicalc
//!
//! Working-day counting and holiday resolution driven by configurable
//! holiday tables.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holicalc::holidays::{HolidayCatalog, WorkingDayCounter};
//! use holicalc::time::Date;
//!
//! let regions = r#"{ "countries": [ { "country_code": "DE", "language": "DE",
//!     "regions": [ { "id": 0, "name": "Katalog" }, { "id": 2, "name": "Bayern" } ] } ] }"#;
//! let holidays = r#"{ "countries": [ { "country_code": "DE", "language": "DE",
//!     "holidays": [
//!         { "id": 10, "name": "Neujahr", "formula": "F:1.1", "duration": 1,
//!           "valid_from": "01.01.1900", "valid_to": "31.12.2099", "regions": "0,2" },
//!         { "id": 11, "name": "Heilige Drei Könige", "formula": "F:6.1", "duration": 1,
//!           "valid_from": "01.01.1900", "valid_to": "31.12.2099", "regions": "0,2" }
//!     ] } ] }"#;
//!
//! let catalog = HolidayCatalog::from_json_str("DE", "DE", regions, holidays).unwrap();
//! catalog.set_current_region(2).unwrap();
//!
//! let counter = WorkingDayCounter::new(&catalog);
//! let begin = Date::from_ymd(2009, 12, 6).unwrap();
//! let end = Date::from_ymd(2010, 1, 10).unwrap();
//! assert_eq!(counter.count_working_days(begin, end).unwrap(), 23);
//! assert_eq!(counter.holiday_name(Date::from_ymd(2010, 1, 6).unwrap()).unwrap(),
//!            Some("Heilige Drei Könige"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hc_core as core;

/// Date, weekday, and month types.
pub use hc_time as time;

/// Holiday rules, region catalogs, and working-day counting.
pub use hc_holidays as holidays;

pub use hc_core::{Error, Result};
