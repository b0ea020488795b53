use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::Urgency;

/// The selected condition with its ICD-11-style code.
/// Codes are label-only; they are never used for lookup or billing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryDiagnosis {
    pub code: String,
    pub name: String,
    /// 0–100, statically assigned per rule. Not a learned probability.
    pub confidence: u8,
}

/// One alternative condition, ordered by the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Differential {
    pub code: String,
    pub name: String,
    pub probability: u8,
}

/// The outcome of one diagnosis pass. Immutable once produced; never
/// persisted — the consuming UI displays it and discards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub primary: PrimaryDiagnosis,
    pub differentials: Vec<Differential>,
    /// Patient-facing explanation of why this branch matched.
    pub reasoning: String,
    pub actions: Vec<String>,
    pub urgency: Urgency,
    pub produced_at: NaiveDateTime,
}

impl DiagnosisResult {
    pub fn new(
        code: &str,
        name: &str,
        confidence: u8,
        differentials: Vec<Differential>,
        reasoning: String,
        actions: Vec<String>,
        urgency: Urgency,
    ) -> Self {
        Self {
            primary: PrimaryDiagnosis {
                code: code.to_string(),
                name: name.to_string(),
                confidence,
            },
            differentials,
            reasoning,
            actions,
            urgency,
            produced_at: chrono::Local::now().naive_local(),
        }
    }
}
