//! Mock camera analysis.
//!
//! No real vision happens anywhere in this crate. A [`FeatureSource`]
//! produces simulated [`VisualFeatures`]; the default implementation is
//! random to mirror the reference behavior, and tests inject a fixed one.

use rand::Rng;

use crate::models::enums::{LesionPattern, Severity, SymptomCategory};
use crate::models::visual::REDNESS_THRESHOLD;
use crate::models::{Symptom, VisualFeatures};

/// Injectable source of mocked visual features. One capture per call;
/// the session keeps only the most recent capture.
pub trait FeatureSource: Send + Sync {
    fn capture(&self) -> VisualFeatures;
}

/// Default source: random mock features, simulating a camera analysis.
pub struct RandomFeatureSource;

impl FeatureSource for RandomFeatureSource {
    fn capture(&self) -> VisualFeatures {
        let mut rng = rand::thread_rng();

        let lesion_present = rng.gen_bool(0.6);
        if !lesion_present {
            return VisualFeatures::clear();
        }

        let pattern = match rng.gen_range(0..4) {
            0 => LesionPattern::Vesicular,
            1 => LesionPattern::Ulcerative,
            2 => LesionPattern::Verrucous,
            _ => LesionPattern::Erythematous,
        };

        VisualFeatures {
            lesion_present: true,
            pattern,
            redness_score: rng.gen_range(10..=100),
            lesion_count: rng.gen_range(1..=8),
            analyzed_at: chrono::Local::now().naive_local(),
        }
    }
}

/// Deterministic source for tests: always returns the same capture.
pub struct FixedFeatureSource(pub VisualFeatures);

impl FeatureSource for FixedFeatureSource {
    fn capture(&self) -> VisualFeatures {
        self.0.clone()
    }
}

/// Map a capture onto visual-kind symptom tags so the diagnosis selector
/// sees one unified tag set. A clear capture contributes nothing.
pub fn visual_symptoms(features: &VisualFeatures) -> Vec<Symptom> {
    let mut symptoms = Vec::new();

    if features.lesion_present {
        let severity = if features.lesion_count >= 5 {
            Severity::Severe
        } else {
            Severity::Moderate
        };

        let category = match features.pattern {
            LesionPattern::Vesicular => Some(SymptomCategory::Vesicles),
            LesionPattern::Ulcerative => Some(SymptomCategory::Ulcer),
            LesionPattern::Verrucous => Some(SymptomCategory::Warts),
            LesionPattern::Erythematous => Some(SymptomCategory::Redness),
            LesionPattern::None => None,
        };

        if let Some(category) = category {
            symptoms.push(Symptom::visual(category, severity));
        }
    }

    if features.redness_score > REDNESS_THRESHOLD {
        symptoms.push(Symptom::visual(SymptomCategory::Redness, Severity::Moderate));
    }

    symptoms
}
