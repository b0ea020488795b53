use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::LesionPattern;

/// Mocked lesion attributes from a simulated camera analysis.
/// At most one per session; each analysis call overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualFeatures {
    pub lesion_present: bool,
    pub pattern: LesionPattern,
    /// 0–100. Above [`REDNESS_THRESHOLD`] counts as a redness signal.
    pub redness_score: u8,
    pub lesion_count: u8,
    pub analyzed_at: NaiveDateTime,
}

/// Redness score at which a capture contributes a redness symptom tag.
pub const REDNESS_THRESHOLD: u8 = 60;

impl VisualFeatures {
    /// A capture with nothing visible.
    pub fn clear() -> Self {
        Self {
            lesion_present: false,
            pattern: LesionPattern::None,
            redness_score: 0,
            lesion_count: 0,
            analyzed_at: chrono::Local::now().naive_local(),
        }
    }
}
