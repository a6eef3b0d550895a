//! Error types for holicalc.
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`Error`].  Malformed tables are rejected early with the
//! [`fail!`](crate::fail) macro defined here.

use thiserror::Error;

use crate::RegionId;

/// The top-level error type used throughout holicalc.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A holiday or region table could not be read or is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A holiday formula names a kind that is not one of `F`, `E`, `MD`,
    /// `AD`, `RP`.
    #[error("unsupported holiday formula kind '{0}'")]
    UnsupportedHolidayFormula(String),

    /// A date range whose begin lies after its end.
    #[error("invalid range: begin {begin} is after end {end}")]
    InvalidRange {
        /// Begin of the rejected range.
        begin: String,
        /// End of the rejected range.
        end: String,
    },

    /// A region id that the catalog does not know.
    #[error("unknown region {0}")]
    UnknownRegion(RegionId),

    /// Date construction or date arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout holicalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` immediately.
///
/// # Example
/// ```
/// use hc_core::{fail, errors::Error};
/// fn always_err() -> hc_core::errors::Result<()> {
///     fail!("missing table {}", "holidays");
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::Configuration("missing table holidays".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::UnknownRegion(7).to_string(), "unknown region 7");
        assert_eq!(
            Error::UnsupportedHolidayFormula("XY".into()).to_string(),
            "unsupported holiday formula kind 'XY'"
        );
        let e = Error::InvalidRange {
            begin: "2010-01-02".into(),
            end: "2010-01-01".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid range: begin 2010-01-02 is after end 2010-01-01"
        );
    }
}
