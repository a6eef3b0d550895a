//! `Holiday` — one immutable holiday rule.

use hc_core::errors::{Error, Result};
use hc_core::{fail, HolidayId};
use hc_time::Date;

use crate::formula::{FormulaKind, HolidayFormula};

/// A holiday rule: how to find its date in a given year, how many
/// consecutive days it lasts, and the window in which the rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    id: HolidayId,
    name: String,
    formula: HolidayFormula,
    duration_days: u32,
    valid_from: Date,
    valid_to: Date,
}

impl Holiday {
    /// Create a holiday from an already parsed formula.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if `duration_days` is zero or
    /// `valid_from` lies after `valid_to`.
    pub fn new(
        id: HolidayId,
        name: impl Into<String>,
        formula: HolidayFormula,
        duration_days: u32,
        valid_from: Date,
        valid_to: Date,
    ) -> Result<Self> {
        let name = name.into();
        if duration_days == 0 {
            fail!("holiday {id} ({name}): duration must be at least one day");
        }
        if valid_from > valid_to {
            fail!("holiday {id} ({name}): valid from {valid_from} is after valid to {valid_to}");
        }
        Ok(Self {
            id,
            name,
            formula,
            duration_days,
            valid_from,
            valid_to,
        })
    }

    /// Create a holiday from a formula string such as `"E:-2"`.
    pub fn parse(
        id: HolidayId,
        name: impl Into<String>,
        formula: &str,
        duration_days: u32,
        valid_from: Date,
        valid_to: Date,
    ) -> Result<Self> {
        let name = name.into();
        let formula: HolidayFormula = formula.parse().map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("holiday {id} ({name}): {msg}"))
            }
            other => other,
        })?;
        Self::new(id, name, formula, duration_days, valid_from, valid_to)
    }

    /// Table identifier.
    pub fn id(&self) -> HolidayId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formula locating the (first) day of the holiday.
    pub fn formula(&self) -> &HolidayFormula {
        &self.formula
    }

    /// Shorthand for `self.formula().kind()`.
    pub fn formula_kind(&self) -> FormulaKind {
        self.formula.kind()
    }

    /// Number of consecutive days, at least 1.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// First date on which the rule applies.
    pub fn valid_from(&self) -> Date {
        self.valid_from
    }

    /// Last date on which the rule applies.
    pub fn valid_to(&self) -> Date {
        self.valid_to
    }

    /// Whether the rule covers the whole window `[begin, end]`.
    ///
    /// Validity is judged against the entire window, not against single
    /// occurrences: a rule that starts or ends inside the window does not
    /// apply to it at all.
    pub fn is_valid_for(&self, begin: Date, end: Date) -> bool {
        begin >= self.valid_from && end <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn always() -> (Date, Date) {
        (date(1900, 1, 1), date(2099, 12, 31))
    }

    #[test]
    fn parse_and_accessors() {
        let (from, to) = always();
        let h = Holiday::parse(12, "Karfreitag", "E:-2", 1, from, to).unwrap();
        assert_eq!(h.id(), 12);
        assert_eq!(h.name(), "Karfreitag");
        assert_eq!(h.formula_kind(), FormulaKind::EasterOffset);
        assert_eq!(h.formula().offset(), -2);
        assert_eq!(h.formula().to_string(), "E:-2");
        assert_eq!(h.duration_days(), 1);
        assert_eq!(h.valid_from(), from);
        assert_eq!(h.valid_to(), to);
    }

    #[test]
    fn bad_formula_names_the_holiday() {
        let (from, to) = always();
        match Holiday::parse(7, "Broken", "Q:1", 1, from, to) {
            Err(Error::Configuration(msg)) => {
                assert!(msg.contains("holiday 7 (Broken)"), "{msg}");
                assert!(msg.contains("Q:1"), "{msg}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_duration_rejected() {
        let (from, to) = always();
        assert!(Holiday::parse(1, "None", "F:1.1", 0, from, to).is_err());
    }

    #[test]
    fn inverted_validity_rejected() {
        let (from, to) = always();
        assert!(Holiday::parse(1, "Backwards", "F:1.1", 1, to, from).is_err());
    }

    #[test]
    fn validity_covers_whole_window() {
        let h = Holiday::parse(19, "Einheit", "F:3.10", 1, date(1990, 10, 3), date(2099, 12, 31))
            .unwrap();
        assert!(h.is_valid_for(date(1990, 10, 3), date(1990, 10, 3)));
        assert!(h.is_valid_for(date(1991, 1, 1), date(2099, 12, 31)));
        assert!(!h.is_valid_for(date(1990, 9, 1), date(1990, 10, 31)));
        assert!(!h.is_valid_for(date(2099, 12, 1), date(2100, 1, 31)));
    }
}
