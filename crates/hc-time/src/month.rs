//! `Month` — month of the year and month lengths.

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month with number `n` (1 = January), or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Number of days in this month, in a leap year or not.
    pub fn length(&self, leap_year: bool) -> u8 {
        match self {
            Month::February if leap_year => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// The smallest length this month has in any year.  A day-of-month up to
    /// this value exists every year.
    pub fn shortest_length(&self) -> u8 {
        self.length(false)
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for (i, m) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(m.number()), i + 1);
            assert_eq!(Month::from_number(m.number()), Some(*m));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn lengths() {
        assert_eq!(Month::February.length(true), 29);
        assert_eq!(Month::February.shortest_length(), 28);
        assert_eq!(Month::November.length(true), 30);
        assert_eq!(Month::December.shortest_length(), 31);
        let year: u32 = Month::ALL.iter().map(|m| u32::from(m.length(false))).sum();
        assert_eq!(year, 365);
    }
}
