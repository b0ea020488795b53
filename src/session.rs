//! Per-session accumulator for the symptom interview.
//!
//! One `ScreeningSession` value is passed explicitly between calls — there
//! is no global engine state. The session holds the ordered symptom
//! sequence, at most one mock capture, and the conversation flag.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::ConversationPhase;
use crate::models::{Symptom, VisualFeatures};
use crate::triage::extraction::extract_symptoms;
use crate::triage::features::visual_symptoms;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningSession {
    pub id: Uuid,
    pub phase: ConversationPhase,
    symptoms: Vec<Symptom>,
    visual: Option<VisualFeatures>,
    pub started_at: NaiveDateTime,
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: ConversationPhase::Greeting,
            symptoms: Vec::new(),
            visual: None,
            started_at: chrono::Local::now().naive_local(),
        }
    }

    /// Extract tags from a transcript and append them. Duplicates are
    /// permitted; the first transcript moves the session to listening.
    /// Returns the tags this transcript contributed.
    pub fn record_transcript(&mut self, text: &str) -> Vec<Symptom> {
        if self.phase == ConversationPhase::Greeting {
            self.phase = ConversationPhase::Listening;
        }

        let extracted = extract_symptoms(text);
        tracing::debug!(
            session_id = %self.id,
            extracted = extracted.len(),
            "Transcript processed"
        );

        self.symptoms.extend(extracted.iter().cloned());
        extracted
    }

    /// Record a mock capture, overwriting any previous one, and append the
    /// symptom tags derived from it.
    pub fn record_visual(&mut self, features: VisualFeatures) {
        let derived = visual_symptoms(&features);
        self.symptoms.extend(derived);
        self.visual = Some(features);
    }

    /// Mark the session as under analysis.
    pub fn begin_analysis(&mut self) {
        self.phase = ConversationPhase::Analyzing;
    }

    /// Drop everything accumulated and return to the greeting phase.
    /// The session keeps its id.
    pub fn reset(&mut self) {
        self.phase = ConversationPhase::Greeting;
        self.symptoms.clear();
        self.visual = None;
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn visual(&self) -> Option<&VisualFeatures> {
        self.visual.as_ref()
    }

    pub fn has_findings(&self) -> bool {
        !self.symptoms.is_empty()
            || self.visual.as_ref().is_some_and(|v| v.lesion_present)
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new()
    }
}
