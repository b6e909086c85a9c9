//! Sensitivity sampling for visualization
//!
//! Re-runs the predictor with one input dimension perturbed to show how
//! the estimate responds, plus a raw profile vector for multi-axis charts.
//! Perturbation deltas are fixed constants matching the charts they feed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::predictor::Predictor;
use crate::types::PredictionInput;

/// Rainfall perturbation deltas (mm): low, current, high.
const RAINFALL_DELTAS: [f64; 3] = [-50.0, 0.0, 50.0];

/// Fertilizer perturbation deltas (kg/ha): low, current, high.
const FERTILIZER_DELTAS: [f64; 3] = [-50.0, 0.0, 100.0];

/// Input dimension a sensitivity curve varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Rainfall,
    Fertilizer,
}

/// One sensitivity curve: predictions at the perturbed-low, unperturbed,
/// and perturbed-high input values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityTriple {
    pub low: f64,
    pub current: f64,
    pub high: f64,
}

/// Sample the yield response to perturbing one dimension. Perturbed values
/// are clamped at 0; every point goes through the full predictor pipeline
/// with all other fields unchanged.
pub fn sample(
    predictor: &Predictor,
    input: &PredictionInput,
    dimension: Dimension,
) -> SensitivityTriple {
    let deltas = match dimension {
        Dimension::Rainfall => RAINFALL_DELTAS,
        Dimension::Fertilizer => FERTILIZER_DELTAS,
    };

    let mut points = [0.0; 3];
    for (point, delta) in points.iter_mut().zip(deltas) {
        let mut perturbed = input.clone();
        match dimension {
            Dimension::Rainfall => perturbed.rainfall = (input.rainfall + delta).max(0.0),
            Dimension::Fertilizer => perturbed.fert = (input.fert + delta).max(0.0),
        }
        *point = predictor.predict(&perturbed);
    }

    trace!(?dimension, low = points[0], current = points[1], high = points[2], "sensitivity curve");

    SensitivityTriple { low: points[0], current: points[1], high: points[2] }
}

/// Raw inputs in the fixed radar-chart order (soil, rainfall, temp, fert).
/// No computation, only field reads.
pub fn profile_vector(input: &PredictionInput) -> [f64; 4] {
    [input.soil, input.rainfall, input.temp, input.fert]
}
