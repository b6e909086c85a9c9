//! Yield predictor - composes baseline and factors into a prediction
//!
//! The predictor holds the immutable baseline table and runs the five
//! factor calculators over one input, multiplying everything into a single
//! clamped, rounded yield figure. Identical inputs always produce the
//! identical output, so callers may memoize or invoke concurrently without
//! coordination.

use tracing::debug;

use crate::baseline::BaselineTable;
use crate::factors::*;
use crate::types::PredictionInput;

/// Lowest yield the predictor will ever report (tons/ha).
pub const MIN_YIELD: f64 = 0.1;

/// Per-term decomposition of one prediction.
///
/// The rainfall factor can be negative for extreme inputs; only the
/// composed result is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorBreakdown {
    /// Reference yield for the crop (tons/ha)
    pub baseline: f64,
    /// Rainfall multiplier (unbounded below)
    pub rainfall: f64,
    /// Temperature multiplier
    pub temperature: f64,
    /// Soil quality multiplier
    pub soil: f64,
    /// Fertilizer multiplier
    pub fertilizer: f64,
    /// Observed-rain adjustment multiplier
    pub rain_adjustment: f64,
}

/// Main yield predictor.
#[derive(Debug, Clone)]
pub struct Predictor {
    baselines: BaselineTable,
}

impl Predictor {
    pub fn new(baselines: BaselineTable) -> Self {
        Self { baselines }
    }

    /// Decompose one input into baseline and per-dimension multipliers.
    pub fn breakdown(&self, input: &PredictionInput) -> FactorBreakdown {
        FactorBreakdown {
            baseline: self.baselines.lookup(&input.crop),
            rainfall: rainfall_factor(input.rainfall),
            temperature: temperature_factor(input.temp),
            soil: soil_factor(input.soil),
            fertilizer: fertilizer_factor(input.fert),
            rain_adjustment: rain_adjustment_factor(input.weather.as_ref()),
        }
    }

    /// Compose a breakdown into the final yield figure: product of all six
    /// terms, floored at `MIN_YIELD`, rounded to 2 decimals
    /// (half away from zero).
    pub fn compose(&self, breakdown: &FactorBreakdown) -> f64 {
        let product = breakdown.baseline
            * breakdown.rainfall
            * breakdown.temperature
            * breakdown.soil
            * breakdown.fertilizer
            * breakdown.rain_adjustment;

        round2(product.max(MIN_YIELD))
    }

    /// Predict yield (tons/ha) for one input.
    pub fn predict(&self, input: &PredictionInput) -> f64 {
        let breakdown = self.breakdown(input);
        let predicted = self.compose(&breakdown);

        debug!(
            crop = %input.crop,
            baseline = breakdown.baseline,
            rainfall = breakdown.rainfall,
            temperature = breakdown.temperature,
            soil = breakdown.soil,
            fertilizer = breakdown.fertilizer,
            rain_adjustment = breakdown.rain_adjustment,
            predicted,
            "yield prediction"
        );

        predicted
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(BaselineTable::builtin())
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeatherObservation;
    use approx::assert_relative_eq;

    fn reference_input() -> PredictionInput {
        PredictionInput {
            crop: "Wheat".to_string(),
            rainfall: 200.0,
            temp: 25.0,
            soil: 100.0,
            fert: 200.0,
            weather: None,
        }
    }

    #[test]
    fn reference_wheat_prediction() {
        // 3.0 * 1 * 1 * 1.3 * 1.6667 = 6.5
        let predictor = Predictor::default();
        assert_relative_eq!(predictor.predict(&reference_input()), 6.5);
    }

    #[test]
    fn unknown_crop_uses_default_baseline() {
        let predictor = Predictor::default();
        let mut input = reference_input();
        input.crop = "UnknownCrop".to_string();
        // 2.5 * 1.3 * 1.6667 = 5.4167 → 5.42
        assert_relative_eq!(predictor.predict(&input), 5.42);
    }

    #[test]
    fn breakdown_matches_reference_factors() {
        let predictor = Predictor::default();
        let breakdown = predictor.breakdown(&reference_input());
        assert_relative_eq!(breakdown.baseline, 3.0);
        assert_relative_eq!(breakdown.rainfall, 1.0);
        assert_relative_eq!(breakdown.temperature, 1.0);
        assert_relative_eq!(breakdown.soil, 1.3);
        assert_relative_eq!(breakdown.fertilizer, 1.0 + 200.0 / 300.0);
        assert_relative_eq!(breakdown.rain_adjustment, 1.0);
    }

    #[test]
    fn negative_rainfall_factor_clamps_to_floor() {
        let predictor = Predictor::default();
        let mut input = reference_input();
        input.rainfall = 1000.0;
        let breakdown = predictor.breakdown(&input);
        assert!(breakdown.rainfall < 0.0);
        assert_relative_eq!(predictor.predict(&input), MIN_YIELD);
    }

    #[test]
    fn weather_rain_raises_the_prediction() {
        let predictor = Predictor::default();
        let mut input = reference_input();
        input.weather = Some(WeatherObservation { temp: 24.0, humidity: 60.0, rain: Some(100.0) });
        // 6.5 * 1.2 = 7.8
        assert_relative_eq!(predictor.predict(&input), 7.8);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let predictor = Predictor::default();
        // 0.125 rounds up to 0.13, not to even.
        assert_relative_eq!(
            predictor.compose(&FactorBreakdown {
                baseline: 0.125,
                rainfall: 1.0,
                temperature: 1.0,
                soil: 1.0,
                fertilizer: 1.0,
                rain_adjustment: 1.0,
            }),
            0.13
        );
    }
}
