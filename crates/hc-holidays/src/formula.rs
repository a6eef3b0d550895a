//! Holiday formulas.
//!
//! A formula is written as `KIND:PARAM`:
//!
//! | formula  | meaning                                         |
//! |----------|-------------------------------------------------|
//! | `F:25.12`| fixed date, 25 December                         |
//! | `E:-49`  | 49 days before Easter Sunday                    |
//! | `E:1`    | 1 day after Easter Sunday                       |
//! | `MD:0`   | Mother's Day (second Sunday of May)             |
//! | `AD:0`   | 4th Advent; `AD:-7` is the 3rd Advent           |
//! | `RP:0`   | Day of Repentance and Prayer                    |
//!
//! Parsing ignores case and surrounding whitespace.

use std::fmt;
use std::str::FromStr;

use hc_core::errors::{Error, Result};
use hc_core::fail;
use hc_time::Month;

/// The anchor a holiday formula is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaKind {
    /// Same day and month every year (`F`).
    Fixed,
    /// Offset from Easter Sunday (`E`).
    EasterOffset,
    /// Offset from Mother's Day (`MD`).
    MothersDay,
    /// Offset from the Day of Repentance and Prayer (`RP`).
    RepentanceDay,
    /// Offset from the 4th Sunday of Advent (`AD`).
    Advent,
}

impl FormulaKind {
    /// The token used in formula strings.
    pub fn token(&self) -> &'static str {
        match self {
            FormulaKind::Fixed => "F",
            FormulaKind::EasterOffset => "E",
            FormulaKind::MothersDay => "MD",
            FormulaKind::RepentanceDay => "RP",
            FormulaKind::Advent => "AD",
        }
    }
}

impl FromStr for FormulaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(FormulaKind::Fixed),
            "E" => Ok(FormulaKind::EasterOffset),
            "MD" => Ok(FormulaKind::MothersDay),
            "RP" => Ok(FormulaKind::RepentanceDay),
            "AD" => Ok(FormulaKind::Advent),
            other => Err(Error::UnsupportedHolidayFormula(other.to_string())),
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed holiday formula.
///
/// Each variant carries exactly the parameters its kind needs: a fixed
/// holiday has a day and month, every other kind has a day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayFormula {
    /// Fixed calendar date.
    Fixed {
        /// Day of the month.
        day: u8,
        /// Month of the year.
        month: Month,
    },
    /// Days relative to Easter Sunday.
    EasterOffset(i32),
    /// Days relative to Mother's Day.
    MothersDay(i32),
    /// Days relative to the Day of Repentance and Prayer.
    RepentanceDay(i32),
    /// Days relative to the 4th Sunday of Advent.
    Advent(i32),
}

impl HolidayFormula {
    /// Build a fixed-date formula.
    ///
    /// The date must exist in every year, so 29 February is rejected.
    pub fn fixed(day: u8, month: u8) -> Result<Self> {
        let Some(m) = Month::from_number(month) else {
            fail!("month {month} out of range [1, 12]");
        };
        let max_day = m.shortest_length();
        if day == 0 || day > max_day {
            fail!("day {day} does not exist in every {m} (max {max_day})");
        }
        Ok(HolidayFormula::Fixed { day, month: m })
    }

    /// Build an offset formula for any kind other than [`FormulaKind::Fixed`].
    pub fn with_offset(kind: FormulaKind, offset: i32) -> Result<Self> {
        match kind {
            FormulaKind::Fixed => fail!("a fixed formula takes a day and month, not an offset"),
            FormulaKind::EasterOffset => Ok(HolidayFormula::EasterOffset(offset)),
            FormulaKind::MothersDay => Ok(HolidayFormula::MothersDay(offset)),
            FormulaKind::RepentanceDay => Ok(HolidayFormula::RepentanceDay(offset)),
            FormulaKind::Advent => Ok(HolidayFormula::Advent(offset)),
        }
    }

    /// The kind of this formula.
    pub fn kind(&self) -> FormulaKind {
        match self {
            HolidayFormula::Fixed { .. } => FormulaKind::Fixed,
            HolidayFormula::EasterOffset(_) => FormulaKind::EasterOffset,
            HolidayFormula::MothersDay(_) => FormulaKind::MothersDay,
            HolidayFormula::RepentanceDay(_) => FormulaKind::RepentanceDay,
            HolidayFormula::Advent(_) => FormulaKind::Advent,
        }
    }

    /// The day offset, or 0 for a fixed formula.
    pub fn offset(&self) -> i32 {
        match *self {
            HolidayFormula::Fixed { .. } => 0,
            HolidayFormula::EasterOffset(n)
            | HolidayFormula::MothersDay(n)
            | HolidayFormula::RepentanceDay(n)
            | HolidayFormula::Advent(n) => n,
        }
    }
}

impl FromStr for HolidayFormula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let Some((kind, param)) = text.split_once(':') else {
            fail!("holiday formula '{text}' has no ':' separator");
        };
        let kind: FormulaKind = kind
            .parse()
            .map_err(|e| Error::Configuration(format!("holiday formula '{text}': {e}")))?;
        let param = param.trim();
        match kind {
            FormulaKind::Fixed => {
                let Some((day, month)) = param.split_once('.') else {
                    fail!("holiday formula '{text}': expected DAY.MONTH");
                };
                let (Ok(day), Ok(month)) = (day.trim().parse::<u8>(), month.trim().parse::<u8>())
                else {
                    fail!("holiday formula '{text}': day and month must be numbers");
                };
                HolidayFormula::fixed(day, month).map_err(|e| match e {
                    Error::Configuration(msg) => {
                        Error::Configuration(format!("holiday formula '{text}': {msg}"))
                    }
                    other => other,
                })
            }
            _ => {
                let Ok(offset) = param.parse::<i32>() else {
                    fail!("holiday formula '{text}': offset '{param}' is not an integer");
                };
                HolidayFormula::with_offset(kind, offset)
            }
        }
    }
}

impl fmt::Display for HolidayFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayFormula::Fixed { day, month } => write!(f, "F:{day}.{}", month.number()),
            other => write!(f, "{}:{}", other.kind(), other.offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<HolidayFormula> {
        s.parse()
    }

    #[test]
    fn parses_every_kind() {
        assert_eq!(
            parse("F:25.12"),
            Ok(HolidayFormula::Fixed {
                day: 25,
                month: Month::December
            })
        );
        assert_eq!(parse("E:-49"), Ok(HolidayFormula::EasterOffset(-49)));
        assert_eq!(parse("E:1"), Ok(HolidayFormula::EasterOffset(1)));
        assert_eq!(parse("MD:0"), Ok(HolidayFormula::MothersDay(0)));
        assert_eq!(parse("AD:-7"), Ok(HolidayFormula::Advent(-7)));
        assert_eq!(parse("RP:0"), Ok(HolidayFormula::RepentanceDay(0)));
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(parse("  md : +3 "), Ok(HolidayFormula::MothersDay(3)));
        assert_eq!(
            parse(" f:1 . 1"),
            Ok(HolidayFormula::Fixed {
                day: 1,
                month: Month::January
            })
        );
    }

    #[test]
    fn malformed_formulas_are_configuration_errors() {
        for bad in ["", "F", "F:", "F:25", "F:x.12", "E:", "E:abc", "XY:3", "E:1.5", "F:31.4"] {
            match parse(bad) {
                Err(Error::Configuration(_)) => {}
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn leap_day_is_rejected() {
        assert!(HolidayFormula::fixed(29, 2).is_err());
        assert!(HolidayFormula::fixed(28, 2).is_ok());
        assert!(HolidayFormula::fixed(1, 13).is_err());
    }

    #[test]
    fn unknown_kind_token() {
        assert_eq!(
            "xy".parse::<FormulaKind>(),
            Err(Error::UnsupportedHolidayFormula("XY".into()))
        );
        assert_eq!(" ad ".parse::<FormulaKind>(), Ok(FormulaKind::Advent));
    }

    #[test]
    fn canonical_display() {
        for text in ["F:25.12", "F:1.1", "E:-49", "E:0", "MD:0", "AD:-14", "RP:0"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
        assert_eq!(parse(" e : +1 ").unwrap().to_string(), "E:1");
    }
}
