//! Heuristic summary generation
//!
//! Produces a short narrative explanation of one prediction input from an
//! ordered table of (category, predicate, sentence) rules. Rules are
//! evaluated in sequence; the first matching rule per category contributes
//! its sentence, and the combined list is truncated to the first
//! `MAX_SENTENCES` before joining.
//!
//! The truncation is deliberate legacy behavior: rainfall, temperature and
//! soil always contribute one sentence each, so fertilizer and humidity
//! advisories are usually suppressed by the cap. Do not reorder or lift
//! the cap to surface them.

use smallvec::SmallVec;

use crate::types::PredictionInput;

/// Maximum sentences in a summary.
pub const MAX_SENTENCES: usize = 3;

/// Input dimension a rule speaks about. At most one sentence per category
/// survives rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rainfall,
    Temperature,
    Soil,
    Fertilizer,
    Humidity,
}

/// One narrative rule: if `predicate` holds and the category has not yet
/// produced a sentence, `sentence` is appended.
pub struct SummaryRule {
    pub category: Category,
    pub predicate: fn(&PredictionInput) -> bool,
    pub sentence: &'static str,
}

fn rain_low(i: &PredictionInput) -> bool {
    i.rainfall < 50.0
}
fn rain_excessive(i: &PredictionInput) -> bool {
    i.rainfall > 350.0
}
fn temp_high(i: &PredictionInput) -> bool {
    i.temp > 35.0
}
fn temp_low(i: &PredictionInput) -> bool {
    i.temp < 10.0
}
fn soil_poor(i: &PredictionInput) -> bool {
    i.soil < 40.0
}
fn fert_low(i: &PredictionInput) -> bool {
    i.fert < 50.0
}
fn fert_high(i: &PredictionInput) -> bool {
    i.fert > 300.0
}
fn humidity_low(i: &PredictionInput) -> bool {
    i.weather.as_ref().is_some_and(|w| w.humidity < 30.0)
}
fn humidity_high(i: &PredictionInput) -> bool {
    i.weather.as_ref().is_some_and(|w| w.humidity > 85.0)
}
fn always(_: &PredictionInput) -> bool {
    true
}

/// Ordered rule table. Rainfall, temperature and soil each end with a
/// catch-all rule, so those categories always produce a sentence;
/// fertilizer and humidity stay silent in their nominal range.
pub static RULES: &[SummaryRule] = &[
    SummaryRule {
        category: Category::Rainfall,
        predicate: rain_low,
        sentence: "Low rainfall may reduce yield potential.",
    },
    SummaryRule {
        category: Category::Rainfall,
        predicate: rain_excessive,
        sentence: "Excessive rainfall could cause waterlogging issues.",
    },
    SummaryRule {
        category: Category::Rainfall,
        predicate: always,
        sentence: "Rainfall levels look suitable for crop growth.",
    },
    SummaryRule {
        category: Category::Temperature,
        predicate: temp_high,
        sentence: "High temperature could stress the crop and lower yield.",
    },
    SummaryRule {
        category: Category::Temperature,
        predicate: temp_low,
        sentence: "Low temperatures may slow crop development.",
    },
    SummaryRule {
        category: Category::Temperature,
        predicate: always,
        sentence: "Temperature falls within an optimal range.",
    },
    SummaryRule {
        category: Category::Soil,
        predicate: soil_poor,
        sentence: "Soil quality is low — consider organic amendments or compost.",
    },
    SummaryRule {
        category: Category::Soil,
        predicate: always,
        sentence: "Soil quality appears sufficient for good yield.",
    },
    SummaryRule {
        category: Category::Fertilizer,
        predicate: fert_low,
        sentence: "Fertilizer usage seems low; balanced nutrients may improve yield.",
    },
    SummaryRule {
        category: Category::Fertilizer,
        predicate: fert_high,
        sentence: "Fertilizer usage is high — check for diminishing returns or runoff.",
    },
    SummaryRule {
        category: Category::Humidity,
        predicate: humidity_low,
        sentence: "Low humidity may increase water loss through evapotranspiration.",
    },
    SummaryRule {
        category: Category::Humidity,
        predicate: humidity_high,
        sentence: "High humidity may encourage diseases — monitor crop health.",
    },
];

/// Generate the summary narrative for one input: at most `MAX_SENTENCES`
/// sentences, joined by single spaces.
pub fn summarize(input: &PredictionInput) -> String {
    let mut sentences: SmallVec<[&'static str; 5]> = SmallVec::new();
    let mut matched: SmallVec<[Category; 5]> = SmallVec::new();

    for rule in RULES {
        if matched.contains(&rule.category) {
            continue;
        }
        if (rule.predicate)(input) {
            matched.push(rule.category);
            sentences.push(rule.sentence);
        }
    }

    sentences.truncate(MAX_SENTENCES);
    sentences.join(" ")
}
