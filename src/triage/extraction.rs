//! Free-text symptom extraction.
//!
//! Pure functions: lowercase the transcript once, then test fixed keyword
//! lists by substring membership. Each category group contributes at most
//! one tag per transcript (first matching keyword wins); the severity
//! heuristic is shared by every tag extracted from the same text.

use crate::models::enums::{Severity, SymptomCategory};
use crate::models::Symptom;

/// Category groups in evaluation order. Keyword lists are fixed; no stemming,
/// no ambiguity resolution beyond first-match-per-group.
const CATEGORY_KEYWORDS: &[(SymptomCategory, &[&str])] = &[
    (
        SymptomCategory::Vesicles,
        &["blister", "vesicle", "fluid-filled", "small bumps with fluid"],
    ),
    (
        SymptomCategory::Ulcer,
        &["ulcer", "open sore", "sore that", "chancre", "open wound"],
    ),
    (
        SymptomCategory::Warts,
        &["wart", "cauliflower", "skin growth", "bumpy growth"],
    ),
    (
        SymptomCategory::Discharge,
        &["discharge", "dripping", "pus", "leaking"],
    ),
    (
        SymptomCategory::Dysuria,
        &[
            "burning when i pee",
            "burning when urinating",
            "burns when i pee",
            "burns when i urinate",
            "painful urination",
            "hurts to pee",
            "hurts to urinate",
            "dysuria",
        ],
    ),
    (SymptomCategory::Itching, &["itch"]),
    (
        SymptomCategory::Redness,
        &["redness", "looks red", "is red", "reddish", "inflamed", "irritated"],
    ),
    (
        SymptomCategory::Pain,
        &["pain", "ache", "aching", "hurts", "tender", "burning"],
    ),
    (SymptomCategory::Odor, &["odor", "odour", "smell"]),
    (
        SymptomCategory::Swelling,
        &["swollen", "swelling", "lump", "bump"],
    ),
];

const SEVERE_QUALIFIERS: &[&str] = &[
    "severe", "very", "extremely", "unbearable", "intense", "terrible", "worst",
];

const MILD_QUALIFIERS: &[&str] = &["mild", "slight", "a little", "a bit", "barely"];

/// Severity heuristic from intensity qualifiers anywhere in the transcript.
/// Severe qualifiers win over mild ones; the default is moderate.
pub fn severity_from_text(text: &str) -> Severity {
    let lower = text.to_lowercase();
    if SEVERE_QUALIFIERS.iter().any(|q| lower.contains(q)) {
        return Severity::Severe;
    }
    if MILD_QUALIFIERS.iter().any(|q| lower.contains(q)) {
        return Severity::Mild;
    }
    Severity::Moderate
}

/// Extract reported symptom tags from a free-text transcript.
/// Case-insensitive substring membership against the fixed keyword lists.
/// Returns zero or more tags; an unrecognized transcript yields none.
pub fn extract_symptoms(text: &str) -> Vec<Symptom> {
    let lower = text.to_lowercase();
    let severity = severity_from_text(&lower);

    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| Symptom::reported(*category, severity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::SymptomKind;

    fn categories(text: &str) -> Vec<SymptomCategory> {
        extract_symptoms(text).iter().map(|s| s.category).collect()
    }

    #[test]
    fn blister_yields_vesicles() {
        let symptoms = extract_symptoms("I noticed a blister yesterday");
        assert_eq!(symptoms.len(), 1);
        assert_eq!(symptoms[0].category, SymptomCategory::Vesicles);
        assert_eq!(symptoms[0].kind, SymptomKind::Reported);
    }

    #[test]
    fn extraction_is_case_insensitive() {
        assert_eq!(categories("A BLISTER appeared"), vec![SymptomCategory::Vesicles]);
        assert_eq!(categories("An Ulcer formed"), vec![SymptomCategory::Ulcer]);
    }

    #[test]
    fn multiple_categories_from_one_transcript() {
        let cats = categories("there is discharge and it itches a lot");
        assert!(cats.contains(&SymptomCategory::Discharge));
        assert!(cats.contains(&SymptomCategory::Itching));
    }

    #[test]
    fn one_tag_per_category_group() {
        // Two vesicle keywords still produce a single vesicles tag.
        let cats = categories("a blister, almost like a vesicle");
        assert_eq!(
            cats.iter()
                .filter(|c| **c == SymptomCategory::Vesicles)
                .count(),
            1
        );
    }

    #[test]
    fn unrecognized_text_yields_nothing() {
        assert!(extract_symptoms("I feel completely fine today").is_empty());
    }

    #[test]
    fn severe_qualifier_marks_severe() {
        let symptoms = extract_symptoms("severe pain down there");
        assert_eq!(symptoms.len(), 1);
        assert_eq!(symptoms[0].severity, Severity::Severe);
    }

    #[test]
    fn mild_qualifier_marks_mild() {
        let symptoms = extract_symptoms("a slight itch, nothing more");
        assert_eq!(symptoms[0].severity, Severity::Mild);
    }

    #[test]
    fn default_severity_is_moderate() {
        let symptoms = extract_symptoms("there is some discharge");
        assert_eq!(symptoms[0].severity, Severity::Moderate);
    }

    #[test]
    fn severe_wins_over_mild() {
        // "very" outranks "a little" when both appear.
        assert_eq!(
            severity_from_text("it hurts very much, itches a little"),
            Severity::Severe
        );
    }

    #[test]
    fn dysuria_phrases_match() {
        assert_eq!(
            categories("it burns when I pee")[0],
            SymptomCategory::Dysuria
        );
        assert!(categories("painful urination since Monday")
            .contains(&SymptomCategory::Dysuria));
    }

    #[test]
    fn bothered_does_not_match_redness() {
        // Guard against bare substrings: "bothered" must not read as "red".
        assert!(!categories("I am bothered by this").contains(&SymptomCategory::Redness));
    }
}
