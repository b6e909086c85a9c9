//! Crop baseline yields
//!
//! Static mapping from crop identifier to a reference yield (tons/ha),
//! built once at startup and passed by reference into the calculators.
//! Lookups never fail: an unrecognized crop degrades to a fixed default
//! baseline instead of signaling an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

/// Baseline yield used for any crop not present in the table (tons/ha).
pub const DEFAULT_BASELINE: f64 = 2.5;

/// Built-in reference yields (tons/ha).
const BUILTIN_BASELINES: &[(&str, f64)] = &[
    ("Wheat", 3.0),
    ("Rice", 4.0),
    ("Maize", 5.0),
    ("Soybean", 2.2),
    ("Cotton", 1.5),
];

/// Immutable crop → baseline yield table.
#[derive(Debug, Clone)]
pub struct BaselineTable {
    baselines: FxHashMap<String, f64>,
}

impl BaselineTable {
    /// Build the table with the built-in reference yields.
    pub fn builtin() -> Self {
        let baselines = BUILTIN_BASELINES
            .iter()
            .map(|(crop, yield_t_ha)| (crop.to_string(), *yield_t_ha))
            .collect();
        Self { baselines }
    }

    /// Load a baseline table from a JSON object of `{"Crop": tons_per_ha}`.
    ///
    /// Only construction is fallible; lookups on the resulting table never are.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read baseline file: {:?}", path))?;

        let baselines: FxHashMap<String, f64> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse baseline JSON")?;

        Ok(Self { baselines })
    }

    /// Reference yield for `crop`, or `DEFAULT_BASELINE` for unknown crops.
    pub fn lookup(&self, crop: &str) -> f64 {
        self.baselines.get(crop).copied().unwrap_or(DEFAULT_BASELINE)
    }

    /// Number of configured crops.
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_crops_resolve() {
        let table = BaselineTable::builtin();
        assert_eq!(table.lookup("Wheat"), 3.0);
        assert_eq!(table.lookup("Rice"), 4.0);
        assert_eq!(table.lookup("Maize"), 5.0);
        assert_eq!(table.lookup("Soybean"), 2.2);
        assert_eq!(table.lookup("Cotton"), 1.5);
    }

    #[test]
    fn unknown_crop_falls_back_to_default() {
        let table = BaselineTable::builtin();
        assert_eq!(table.lookup("UnknownCrop"), DEFAULT_BASELINE);
        assert_eq!(table.lookup(""), DEFAULT_BASELINE);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // "wheat" is not a configured key; it degrades like any unknown crop.
        let table = BaselineTable::builtin();
        assert_eq!(table.lookup("wheat"), DEFAULT_BASELINE);
    }
}
