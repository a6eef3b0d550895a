//! # hc-core
//!
//! Core types, error definitions, and parsing helpers for holicalc.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: id type aliases, the error hierarchy, and the string
//! parsers used when reading holiday and region tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `fail!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Identifier of a region (federal state, canton, …) inside a country table.
pub type RegionId = i32;

/// Identifier of a holiday rule inside a country table.
pub type HolidayId = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
