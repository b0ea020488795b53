use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SymptomKind {
    Reported => "reported",
    Visual => "visual",
});

str_enum!(SymptomCategory {
    Vesicles => "vesicles",
    Ulcer => "ulcer",
    Warts => "warts",
    Discharge => "discharge",
    Dysuria => "dysuria",
    Itching => "itching",
    Redness => "redness",
    Pain => "pain",
    Odor => "odor",
    Swelling => "swelling",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(Urgency {
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Urgent => "urgent",
});

str_enum!(ConversationPhase {
    Greeting => "greeting",
    Listening => "listening",
    Analyzing => "analyzing",
});

str_enum!(LesionPattern {
    None => "none",
    Vesicular => "vesicular",
    Ulcerative => "ulcerative",
    Verrucous => "verrucous",
    Erythematous => "erythematous",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn symptom_category_round_trip() {
        for (variant, s) in [
            (SymptomCategory::Vesicles, "vesicles"),
            (SymptomCategory::Ulcer, "ulcer"),
            (SymptomCategory::Warts, "warts"),
            (SymptomCategory::Discharge, "discharge"),
            (SymptomCategory::Dysuria, "dysuria"),
            (SymptomCategory::Itching, "itching"),
            (SymptomCategory::Redness, "redness"),
            (SymptomCategory::Pain, "pain"),
            (SymptomCategory::Odor, "odor"),
            (SymptomCategory::Swelling, "swelling"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SymptomCategory::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_round_trip() {
        for (variant, s) in [
            (Urgency::Low, "low"),
            (Urgency::Moderate, "moderate"),
            (Urgency::High, "high"),
            (Urgency::Urgent, "urgent"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Urgency::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn conversation_phase_round_trip() {
        for (variant, s) in [
            (ConversationPhase::Greeting, "greeting"),
            (ConversationPhase::Listening, "listening"),
            (ConversationPhase::Analyzing, "analyzing"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ConversationPhase::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(SymptomCategory::from_str("invalid").is_err());
        assert!(Severity::from_str("unknown").is_err());
        assert!(LesionPattern::from_str("").is_err());
    }
}
