//! Core input types for yield prediction
//!
//! All numeric fields arrive already defaulted/coerced by the caller; the
//! core does not validate ranges. The weather observation is an explicit
//! `Option` so that a legitimate zero value is never confused with absence.

use serde::{Deserialize, Serialize};

/// External weather observation, supplied by an out-of-scope collaborator.
///
/// `rain` stays `Option` inside the observation: a station can report a
/// temperature and humidity without any rain figure, and `Some(0.0)` means
/// "observed, no rain", which is not the same as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Observed temperature (°C)
    pub temp: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Recent rainfall (mm), if the station reported one
    pub rain: Option<f64>,
}

/// One complete set of prediction inputs.
///
/// `crop` is a free-form identifier; unrecognized names fall back to the
/// default baseline rather than failing (see `BaselineTable::lookup`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Crop identifier, matched against the baseline table
    pub crop: String,
    /// Seasonal rainfall (mm)
    pub rainfall: f64,
    /// Mean temperature (°C)
    pub temp: f64,
    /// Soil quality score (0-100)
    pub soil: f64,
    /// Fertilizer application (kg/ha equivalent)
    pub fert: f64,
    /// Optional external weather observation
    pub weather: Option<WeatherObservation>,
}

impl PredictionInput {
    /// Build an input with the caller-side form defaults: rainfall 0,
    /// temperature 25, soil 50, fertilizer 100, no weather observation.
    pub fn new(crop: impl Into<String>) -> Self {
        Self {
            crop: crop.into(),
            rainfall: 0.0,
            temp: 25.0,
            soil: 50.0,
            fert: 100.0,
            weather: None,
        }
    }
}
