//! Guided interview script.
//!
//! The ordered prompts the consuming UI walks through during the interview.
//! Pure data plus a view type; speech synthesis/recognition and rendering
//! belong to the excluded collaborators.

use serde::{Deserialize, Serialize};

use crate::models::enums::ConversationPhase;

/// One scripted prompt. `key` is stable for the UI; `question` is the
/// patient-facing wording the UI speaks or displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterviewStep {
    pub key: &'static str,
    pub question: &'static str,
    pub phase: ConversationPhase,
}

pub const INTERVIEW_STEPS: &[InterviewStep] = &[
    InterviewStep {
        key: "greeting",
        question: "Hello. This is a private self-check, nothing you say is stored. \
                   What brings you here today?",
        phase: ConversationPhase::Greeting,
    },
    InterviewStep {
        key: "chief_complaint",
        question: "In your own words, what have you noticed?",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "duration",
        question: "How long has this been going on?",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "pain",
        question: "Is there any pain or burning, for example when urinating?",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "discharge",
        question: "Have you noticed any discharge or unusual smell?",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "skin_changes",
        question: "Any blisters, sores, warts or other skin changes? \
                   You can also use the camera check for this.",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "exposure",
        question: "Have you had a new partner or unprotected contact recently?",
        phase: ConversationPhase::Listening,
    },
    InterviewStep {
        key: "closing",
        question: "Thank you. Give me a moment to put this together.",
        phase: ConversationPhase::Analyzing,
    },
];

/// Serialized view of a step for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepInfo {
    pub key: String,
    pub question: String,
    pub phase: ConversationPhase,
}

/// The full script as view types, in interview order.
pub fn interview_script() -> Vec<StepInfo> {
    INTERVIEW_STEPS
        .iter()
        .map(|step| StepInfo {
            key: step.key.to_string(),
            question: step.question.to_string(),
            phase: step.phase,
        })
        .collect()
}

/// The step after `key`, or `None` at the end of the script.
pub fn next_step(key: &str) -> Option<&'static InterviewStep> {
    let idx = INTERVIEW_STEPS.iter().position(|s| s.key == key)?;
    INTERVIEW_STEPS.get(idx + 1)
}
