// File: crates/rt-core/src/region.rs
// Summary: Read-only region metadata lookup (fips -> display name).

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegionInfo {
    /// Human readable name, e.g. "Los Angeles County".
    #[serde(alias = "county")]
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Static region table. The core only reads it.
pub trait RegionDirectory {
    fn region(&self, fips: &str) -> Option<&RegionInfo>;

    /// Display name, or the raw id when the table has no entry.
    fn display_name<'a>(&'a self, fips: &'a str) -> &'a str {
        self.region(fips).map_or(fips, |r| r.name.as_str())
    }
}

impl RegionDirectory for HashMap<String, RegionInfo> {
    fn region(&self, fips: &str) -> Option<&RegionInfo> {
        self.get(fips)
    }
}

/// Empty directory; every lookup falls back to the id.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRegions;

impl RegionDirectory for NoRegions {
    fn region(&self, _fips: &str) -> Option<&RegionInfo> {
        None
    }
}

/// Parse a `{ "<fips>": { "county": "...", ... } }` JSON table.
pub fn regions_from_json(json: &str) -> serde_json::Result<HashMap<String, RegionInfo>> {
    serde_json::from_str(json)
}
