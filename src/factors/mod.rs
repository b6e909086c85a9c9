//! Factor calculators
//!
//! Each factor is implemented in its own module and converts one raw input
//! dimension into a dimensionless multiplier. All five are pure functions;
//! the product of baseline and factors is composed in `predictor`.

pub mod f1_rainfall;
pub mod f2_temperature;
pub mod f3_soil;
pub mod f4_fertilizer;
pub mod f5_rain_adjustment;

// Re-export factor functions
pub use f1_rainfall::rainfall_factor;
pub use f2_temperature::temperature_factor;
pub use f3_soil::soil_factor;
pub use f4_fertilizer::fertilizer_factor;
pub use f5_rain_adjustment::rain_adjustment_factor;
