//! FACTOR 2: TEMPERATURE
//!
//! Optimal around 25 °C with a ±3 °C deadband of no penalty. Beyond the
//! deadband the penalty grows linearly, 1/40 of the multiplier per degree.

/// Optimal mean temperature (°C).
pub const IDEAL_TEMP_C: f64 = 25.0;

/// Half-width of the no-penalty band around the ideal (°C).
const DEADBAND_C: f64 = 3.0;

/// Degrees of excess divergence that would zero the multiplier.
const PENALTY_SPAN_C: f64 = 40.0;

/// Temperature multiplier: 1.0 inside the deadband, linear penalty beyond.
pub fn temperature_factor(temp_c: f64) -> f64 {
    1.0 - ((temp_c - IDEAL_TEMP_C).abs() - DEADBAND_C).max(0.0) / PENALTY_SPAN_C
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn deadband_carries_no_penalty() {
        assert_relative_eq!(temperature_factor(25.0), 1.0);
        assert_relative_eq!(temperature_factor(22.0), 1.0);
        assert_relative_eq!(temperature_factor(28.0), 1.0);
    }

    #[test]
    fn penalty_starts_past_the_deadband() {
        // 30 °C is 2 degrees past the band: 1 - 2/40 = 0.95
        assert_relative_eq!(temperature_factor(30.0), 0.95);
        assert_relative_eq!(temperature_factor(20.0), 0.95);
    }

    #[test]
    fn heat_and_cold_penalize_symmetrically() {
        assert_relative_eq!(temperature_factor(40.0), temperature_factor(10.0));
        assert_relative_eq!(temperature_factor(40.0), 0.7);
    }
}
