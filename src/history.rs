//! Bounded prediction history
//!
//! Newest-first log of past predictions, capped at `HISTORY_CAP` entries
//! with the oldest evicted on overflow. The core keeps this purely in
//! memory; durable storage belongs to an external collaborator, which can
//! serde round-trip the records.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum retained records.
pub const HISTORY_CAP: usize = 50;

/// One past prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Crop identifier the prediction was made for
    pub crop: String,
    /// Predicted yield (tons/ha)
    pub predicted: f64,
    /// Human-readable timestamp label
    pub timestamp_label: String,
}

impl HistoryRecord {
    /// Build a record stamped with the current local time.
    pub fn now(crop: impl Into<String>, predicted: f64) -> Self {
        Self {
            crop: crop.into(),
            predicted,
            timestamp_label: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} • {} • {} t/ha", self.timestamp_label, self.crop, self.predicted)
    }
}

/// Newest-first bounded sequence of prediction records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: VecDeque<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, evicting the oldest record past `HISTORY_CAP`.
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_front(record);
        self.records.truncate(HISTORY_CAP);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// The newest `n` records, for compact previews.
    pub fn preview(&self, n: usize) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().take(n)
    }
}
