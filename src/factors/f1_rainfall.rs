//! FACTOR 1: RAINFALL
//!
//! Linear penalty around an ideal seasonal rainfall of 200 mm, losing half
//! the multiplier per 200 mm of divergence in either direction.
//!
//! Unlike the temperature factor, this one has no explicit floor: far
//! enough from the ideal it goes negative, and only the final composed
//! yield is clamped. Callers rely on that clamp, so the factor itself is
//! left unbounded.

/// Ideal seasonal rainfall (mm).
pub const IDEAL_RAINFALL_MM: f64 = 200.0;

/// Multiplier lost per `IDEAL_RAINFALL_MM` of divergence from the ideal.
const PENALTY_RATE: f64 = 0.5;

/// Rainfall multiplier: 1.0 at the ideal, decreasing linearly with
/// divergence, unbounded below.
pub fn rainfall_factor(rainfall_mm: f64) -> f64 {
    1.0 - (rainfall_mm - IDEAL_RAINFALL_MM).abs() / IDEAL_RAINFALL_MM * PENALTY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ideal_rainfall_is_neutral() {
        assert_relative_eq!(rainfall_factor(200.0), 1.0);
    }

    #[test]
    fn divergence_is_symmetric() {
        assert_relative_eq!(rainfall_factor(100.0), rainfall_factor(300.0));
        assert_relative_eq!(rainfall_factor(100.0), 0.75);
    }

    #[test]
    fn zero_rainfall_halves_the_multiplier() {
        assert_relative_eq!(rainfall_factor(0.0), 0.5);
    }

    #[test]
    fn extreme_rainfall_goes_negative() {
        // 1000 mm is 800 mm past the ideal: 1 - 4 * 0.5 = -1.
        assert_relative_eq!(rainfall_factor(1000.0), -1.0);
    }
}
