//! FACTOR 4: FERTILIZER
//!
//! Diminishing-returns bonus: application contributes 1/300 of a multiplier
//! per kg/ha up to an effective cap of 200, beyond which extra input adds
//! nothing.

/// Effective application cap (kg/ha equivalent).
pub const EFFECTIVE_CAP: f64 = 200.0;

/// Divisor converting capped application into bonus multiplier.
const BONUS_DIVISOR: f64 = 300.0;

/// Fertilizer multiplier: 1.0 with no application, up to 1.6667 at the cap.
pub fn fertilizer_factor(fert_kg_ha: f64) -> f64 {
    1.0 + fert_kg_ha.min(EFFECTIVE_CAP) / BONUS_DIVISOR
}
