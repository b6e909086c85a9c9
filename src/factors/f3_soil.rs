//! FACTOR 3: SOIL QUALITY
//!
//! Linear rescale of the 0-100 quality score onto a 0.5-1.3 multiplier.
//! Scores outside 0-100 are not rejected; they extrapolate on the same line.

/// Multiplier at a quality score of zero.
const FLOOR_MULTIPLIER: f64 = 0.5;

/// Multiplier gained across the full 0-100 score range.
const SPAN_MULTIPLIER: f64 = 0.8;

/// Soil multiplier: 0.5 at score 0, 1.3 at score 100.
pub fn soil_factor(soil_score: f64) -> f64 {
    FLOOR_MULTIPLIER + (soil_score / 100.0) * SPAN_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_of_the_rescale() {
        assert_relative_eq!(soil_factor(0.0), 0.5);
        assert_relative_eq!(soil_factor(100.0), 1.3);
    }

    #[test]
    fn midpoint_score() {
        assert_relative_eq!(soil_factor(50.0), 0.9);
    }

    #[test]
    fn factor_is_monotonic_in_score() {
        let mut prev = soil_factor(0.0);
        for score in 1..=100 {
            let next = soil_factor(score as f64);
            assert!(next > prev);
            prev = next;
        }
    }
}
