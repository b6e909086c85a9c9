//! FACTOR 5: OBSERVED RAIN ADJUSTMENT
//!
//! Secondary bonus from an external weather observation's rain figure.
//! Neutral when no observation was supplied or the observation carried no
//! rain value. Presence is an explicit `Option` check: a reported 0 mm is
//! an observation (bonus of exactly 1.0), not absence.

use crate::types::WeatherObservation;

/// Observed rain cap (mm); heavier readings add no further bonus.
pub const OBSERVED_RAIN_CAP: f64 = 200.0;

/// Divisor converting capped observed rain into bonus multiplier.
const BONUS_DIVISOR: f64 = 500.0;

/// Rain adjustment multiplier: 1.0 when absent, up to 1.4 at the cap.
pub fn rain_adjustment_factor(weather: Option<&WeatherObservation>) -> f64 {
    match weather.and_then(|w| w.rain) {
        Some(rain_mm) => 1.0 + rain_mm.min(OBSERVED_RAIN_CAP) / BONUS_DIVISOR,
        None => 1.0,
    }
}
