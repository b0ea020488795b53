//! The decision-table core: symptom extraction, mock visual features, and
//! the ordered first-match-wins diagnosis selector.

pub mod engine;
pub mod extraction;
pub mod features;
pub mod messages;
pub mod rules;
pub mod types;

pub use engine::DefaultScreeningEngine;
pub use extraction::extract_symptoms;
pub use features::{FeatureSource, FixedFeatureSource, RandomFeatureSource};
pub use rules::select_diagnosis;
pub use types::{ScreeningEngine, ScreeningError, ScreeningReport};
