use serde::{Deserialize, Serialize};

use super::enums::{Severity, SymptomCategory, SymptomKind};

/// One categorical symptom signal, either spoken/typed by the user or
/// derived from a mock camera analysis. Sessions accumulate these in
/// order; duplicates are permitted and the order never changes the
/// diagnosis outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub kind: SymptomKind,
    pub category: SymptomCategory,
    pub severity: Severity,
}

impl Symptom {
    pub fn reported(category: SymptomCategory, severity: Severity) -> Self {
        Self {
            kind: SymptomKind::Reported,
            category,
            severity,
        }
    }

    pub fn visual(category: SymptomCategory, severity: Severity) -> Self {
        Self {
            kind: SymptomKind::Visual,
            category,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let r = Symptom::reported(SymptomCategory::Ulcer, Severity::Moderate);
        assert_eq!(r.kind, SymptomKind::Reported);
        assert_eq!(r.category, SymptomCategory::Ulcer);

        let v = Symptom::visual(SymptomCategory::Redness, Severity::Mild);
        assert_eq!(v.kind, SymptomKind::Visual);
        assert_eq!(v.severity, Severity::Mild);
    }
}
