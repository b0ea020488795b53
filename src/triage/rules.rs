//! The diagnosis selector: a fixed, ordered list of condition predicates.
//! First match wins and every branch returns a statically defined record.
//! There is no numeric scoring; confidence values are part of the table.

use crate::models::enums::{Severity, SymptomCategory, Urgency};
use crate::models::{DiagnosisResult, Differential, Symptom, VisualFeatures};

use super::messages::MessageTemplates;

fn differential(code: &str, name: &str, probability: u8) -> Differential {
    Differential {
        code: code.into(),
        name: name.into(),
        probability,
    }
}

fn has(symptoms: &[Symptom], category: SymptomCategory) -> bool {
    symptoms.iter().any(|s| s.category == category)
}

fn worst_severity(symptoms: &[Symptom], category: SymptomCategory) -> Option<Severity> {
    symptoms
        .iter()
        .filter(|s| s.category == category)
        .map(|s| s.severity)
        .max_by_key(|s| match s {
            Severity::Mild => 0,
            Severity::Moderate => 1,
            Severity::Severe => 2,
        })
}

/// Evaluate the rule table against the accumulated tags and the optional
/// mock capture. Duplicate tags and tag order never change the outcome.
pub fn select_diagnosis(
    symptoms: &[Symptom],
    visual: Option<&VisualFeatures>,
) -> DiagnosisResult {
    // 1. Vesicles → herpes.
    if has(symptoms, SymptomCategory::Vesicles) {
        return DiagnosisResult::new(
            "1A94.0",
            "Genital herpes simplex infection",
            85,
            vec![
                differential("1A61", "Primary syphilis", 20),
                differential("EA80", "Contact dermatitis", 10),
            ],
            MessageTemplates::reasoning(
                "small fluid-filled blisters",
                "a herpes simplex infection",
            ),
            MessageTemplates::actions_prompt_visit(),
            Urgency::Moderate,
        );
    }

    // 2. Ulcer → syphilis. Evaluated before the candidiasis branch, so a
    // transcript naming both an ulcer and itching resolves here.
    if has(symptoms, SymptomCategory::Ulcer) {
        return DiagnosisResult::new(
            "1A61",
            "Primary syphilis",
            75,
            vec![
                differential("1A94.0", "Genital herpes simplex infection", 30),
                differential("1A93", "Chancroid", 15),
            ],
            MessageTemplates::reasoning("an open sore or ulcer", "primary syphilis"),
            MessageTemplates::actions_prompt_visit(),
            Urgency::High,
        );
    }

    // 3. Wart pattern → HPV.
    if has(symptoms, SymptomCategory::Warts) {
        return DiagnosisResult::new(
            "1A95",
            "Anogenital warts (HPV)",
            80,
            vec![
                differential("2F10", "Benign skin tag", 25),
                differential("1A94.0", "Genital herpes simplex infection", 10),
            ],
            MessageTemplates::reasoning(
                "wart-like growths",
                "human papillomavirus (HPV) infection",
            ),
            MessageTemplates::actions_routine_visit(),
            Urgency::Low,
        );
    }

    // 4. Discharge or dysuria → urethritis, with a secondary branch for
    // gonorrhoea vs. chlamydia. Itching+discharge is left for the
    // candidiasis branch below.
    let discharge = has(symptoms, SymptomCategory::Discharge);
    let dysuria = has(symptoms, SymptomCategory::Dysuria);
    let itching = has(symptoms, SymptomCategory::Itching);

    if dysuria || (discharge && !itching) {
        let severe_discharge =
            worst_severity(symptoms, SymptomCategory::Discharge) == Some(Severity::Severe);

        if severe_discharge {
            return DiagnosisResult::new(
                "1A70",
                "Gonococcal urethritis",
                70,
                vec![
                    differential("1A81", "Chlamydial urethritis", 60),
                    differential("GC02", "Nonspecific urethritis", 30),
                ],
                MessageTemplates::reasoning(
                    "heavy discharge with urinary discomfort",
                    "a gonococcal infection",
                ),
                MessageTemplates::actions_prompt_visit(),
                Urgency::High,
            );
        }

        return DiagnosisResult::new(
            "1A81",
            "Chlamydial urethritis",
            65,
            vec![
                differential("1A70", "Gonococcal urethritis", 45),
                differential("GC02", "Nonspecific urethritis", 30),
            ],
            MessageTemplates::reasoning(
                "discharge or burning during urination",
                "a chlamydial infection",
            ),
            MessageTemplates::actions_prompt_visit(),
            Urgency::Moderate,
        );
    }

    // 5. Itching + discharge → candidiasis.
    if itching && discharge {
        return DiagnosisResult::new(
            "1F23.1",
            "Genital candidosis",
            70,
            vec![
                differential("1A81", "Chlamydial urethritis", 25),
                differential("EA80", "Contact dermatitis", 20),
            ],
            MessageTemplates::reasoning(
                "itching together with discharge",
                "a yeast (candida) infection",
            ),
            MessageTemplates::actions_routine_visit(),
            Urgency::Low,
        );
    }

    // 6. Redness or pain → nonspecific inflammation.
    if has(symptoms, SymptomCategory::Redness) || has(symptoms, SymptomCategory::Pain) {
        return DiagnosisResult::new(
            "GC0Z",
            "Nonspecific genital inflammation",
            60,
            vec![
                differential("EA80", "Contact dermatitis", 35),
                differential("1F23.1", "Genital candidosis", 20),
            ],
            MessageTemplates::reasoning(
                "redness or localized pain",
                "a nonspecific irritation or inflammation",
            ),
            MessageTemplates::actions_routine_visit(),
            Urgency::Low,
        );
    }

    // 7. Anything else reported or seen → generic advisory.
    let lesion_seen = visual.map(|v| v.lesion_present).unwrap_or(false);
    if !symptoms.is_empty() || lesion_seen {
        return DiagnosisResult::new(
            "QA02",
            "Sexual health screening advised",
            50,
            vec![],
            MessageTemplates::reasoning_advisory(),
            MessageTemplates::actions_routine_visit(),
            Urgency::Moderate,
        );
    }

    // 8. Nothing reported, nothing seen.
    DiagnosisResult::new(
        "QA00",
        "No abnormality detected",
        90,
        vec![],
        MessageTemplates::reasoning_clear(),
        MessageTemplates::actions_all_clear(),
        Urgency::Low,
    )
}
