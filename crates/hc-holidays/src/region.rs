//! `Region` — a federal state, canton, or similar subdivision of a country.

use std::hash::{Hash, Hasher};

use hc_core::RegionId;

/// Id of the aggregate region holding every holiday of a country table.
pub const CATALOG_REGION_ID: RegionId = 0;

/// Name given to regions that holidays are assigned to but that the region
/// table does not declare.
pub const UNKNOWN_REGION_NAME: &str = "Unknown State";

/// A region of a country table.
///
/// Two regions are equal iff their ids match; the name is display data only.
#[derive(Debug, Clone, Eq)]
pub struct Region {
    id: RegionId,
    name: String,
}

impl Region {
    /// Create a region.
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// A placeholder for an id referenced by a holiday assignment but missing
    /// from the region table.
    pub fn unknown(id: RegionId) -> Self {
        Self::new(id, UNKNOWN_REGION_NAME)
    }

    /// Region id.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the aggregate catalog region (id 0).
    pub fn is_catalog(&self) -> bool {
        self.id == CATALOG_REGION_ID
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
