//! Cropcast - deterministic crop-yield estimation core
//!
//! Pure computation layer behind a yield-estimation UI:
//! - `baseline`: crop → reference yield table with a graceful default
//! - `factors`: one multiplicative adjustment per input dimension
//! - `predictor`: composes baseline and factors into a clamped prediction
//! - `summary`: rule-based narrative explanation, capped at 3 sentences
//! - `sensitivity`: one-dimension-at-a-time curves for visualization
//! - `history`: bounded newest-first log of past predictions
//!
//! The core never performs network or storage I/O and never raises an
//! error from the computation path; invalid inputs are absorbed by
//! defensive defaults.

pub mod baseline;
pub mod factors;
pub mod history;
pub mod predictor;
pub mod sensitivity;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use baseline::{BaselineTable, DEFAULT_BASELINE};
pub use history::{History, HistoryRecord, HISTORY_CAP};
pub use predictor::{FactorBreakdown, Predictor, MIN_YIELD};
pub use sensitivity::{profile_vector, sample, Dimension, SensitivityTriple};
pub use summary::{summarize, MAX_SENTENCES};
pub use types::{PredictionInput, WeatherObservation};
