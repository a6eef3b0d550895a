//! Miscellaneous utilities.

/// String parsers for dates and id lists found in configuration tables.
pub mod data_parsers;
