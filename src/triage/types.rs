use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DiagnosisResult, ModelError};
use crate::session::ScreeningSession;

// ---------------------------------------------------------------------------
// ScreeningReport
// ---------------------------------------------------------------------------

/// One diagnosis pass over a session: the result record plus the tag counts
/// that went into it and how long selection took.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub session_id: Uuid,
    pub result: DiagnosisResult,
    pub reported_count: usize,
    pub visual_count: usize,
    pub processing_time_ms: u64,
}

impl ScreeningReport {
    /// Serialize for the consuming UI. The report is display-only;
    /// nothing is persisted.
    pub fn to_json(&self) -> Result<String, ScreeningError> {
        serde_json::to_string(self).map_err(|e| ScreeningError::Serialization(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ScreeningError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ---------------------------------------------------------------------------
// ScreeningEngine trait
// ---------------------------------------------------------------------------

/// The analysis entry points. Sessions are passed in explicitly; the engine
/// holds no per-user state of its own.
pub trait ScreeningEngine {
    /// Run the diagnosis selector over the session's accumulated tags.
    fn analyze(&self, session: &mut ScreeningSession)
        -> Result<ScreeningReport, ScreeningError>;

    /// Trigger a mock camera capture, fold it into the session, then run
    /// the selector. The capture overwrites any previous one.
    fn analyze_with_visual(
        &self,
        session: &mut ScreeningSession,
    ) -> Result<ScreeningReport, ScreeningError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Urgency;

    #[test]
    fn report_to_json_includes_codes() {
        let report = ScreeningReport {
            session_id: Uuid::new_v4(),
            result: DiagnosisResult::new(
                "QA00",
                "No abnormality detected",
                90,
                vec![],
                "clear".into(),
                vec![],
                Urgency::Low,
            ),
            reported_count: 0,
            visual_count: 0,
            processing_time_ms: 1,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("QA00"));
        assert!(json.contains("\"processing_time_ms\":1"));
    }
}
