/// Message template builder for the diagnosis records.
/// Calm, preparatory framing: the result is a conversation starter for a
/// clinician visit, never an alarm. No diagnostic certainty is implied.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Reasoning line: which signals matched and what they suggest.
    pub fn reasoning(finding: &str, suggests: &str) -> String {
        format!(
            "You described {}. This pattern is most often associated with {}, \
             but only an in-person examination and testing can confirm it.",
            finding, suggests,
        )
    }

    /// Reasoning for the generic advisory branch.
    pub fn reasoning_advisory() -> String {
        "What you described doesn't match a specific pattern, but some of it \
         may still be worth a professional look."
            .to_string()
    }

    /// Reasoning for the no-abnormality branch.
    pub fn reasoning_clear() -> String {
        "Nothing you reported, and nothing in the image check, points to a \
         specific concern right now."
            .to_string()
    }

    /// Actions for findings that should be seen within days.
    pub fn actions_prompt_visit() -> Vec<String> {
        vec![
            "Arrange a sexual health consultation in the next few days.".to_string(),
            "Ask for a full STI panel so the result can be confirmed or ruled out.".to_string(),
            "Avoid intimate contact until a clinician has taken a look.".to_string(),
        ]
    }

    /// Actions for findings that can wait for a routine appointment.
    pub fn actions_routine_visit() -> Vec<String> {
        vec![
            "Mention this at your next routine appointment.".to_string(),
            "Keep the area clean and avoid irritating products in the meantime.".to_string(),
            "Note any changes so you can describe them to your clinician.".to_string(),
        ]
    }

    /// Actions when nothing was found.
    pub fn actions_all_clear() -> Vec<String> {
        vec![
            "No action needed right now.".to_string(),
            "Consider periodic sexual health check-ups as part of routine care.".to_string(),
            "Come back and repeat this check if anything changes.".to_string(),
        ]
    }

    /// Standing disclaimer appended by the UI alongside every result.
    pub fn disclaimer() -> String {
        "This self-assessment is not a medical diagnosis. A clinician is the \
         only one who can give you one."
            .to_string()
    }
}
