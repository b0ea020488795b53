use std::time::Instant;

use crate::models::enums::SymptomKind;
use crate::session::ScreeningSession;

use super::features::{FeatureSource, RandomFeatureSource};
use super::rules::select_diagnosis;
use super::types::{ScreeningEngine, ScreeningError, ScreeningReport};

/// Default implementation of the screening engine.
/// Runs the rule table over a session's accumulated tags; the feature
/// source is injected so tests can pin the mock capture.
pub struct DefaultScreeningEngine {
    feature_source: Box<dyn FeatureSource>,
}

impl DefaultScreeningEngine {
    pub fn new(feature_source: Box<dyn FeatureSource>) -> Self {
        Self { feature_source }
    }

    /// Engine with the random mock capture, mirroring the reference app.
    pub fn with_random_features() -> Self {
        Self::new(Box::new(RandomFeatureSource))
    }

    fn run_selection(
        &self,
        session: &mut ScreeningSession,
    ) -> Result<ScreeningReport, ScreeningError> {
        let start = Instant::now();

        session.begin_analysis();
        let result = select_diagnosis(session.symptoms(), session.visual());

        let reported_count = session
            .symptoms()
            .iter()
            .filter(|s| s.kind == SymptomKind::Reported)
            .count();
        let visual_count = session.symptoms().len() - reported_count;
        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            session_id = %session.id,
            primary = %result.primary.code,
            urgency = result.urgency.as_str(),
            reported = reported_count,
            visual = visual_count,
            processing_ms = processing_time_ms,
            "Screening analysis complete"
        );

        Ok(ScreeningReport {
            session_id: session.id,
            result,
            reported_count,
            visual_count,
            processing_time_ms,
        })
    }
}

impl ScreeningEngine for DefaultScreeningEngine {
    fn analyze(
        &self,
        session: &mut ScreeningSession,
    ) -> Result<ScreeningReport, ScreeningError> {
        self.run_selection(session)
    }

    fn analyze_with_visual(
        &self,
        session: &mut ScreeningSession,
    ) -> Result<ScreeningReport, ScreeningError> {
        let features = self.feature_source.capture();
        session.record_visual(features);
        self.run_selection(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ConversationPhase, LesionPattern, Urgency};
    use crate::models::VisualFeatures;
    use crate::triage::features::FixedFeatureSource;

    fn fixed_engine(pattern: LesionPattern) -> DefaultScreeningEngine {
        DefaultScreeningEngine::new(Box::new(FixedFeatureSource(VisualFeatures {
            lesion_present: pattern != LesionPattern::None,
            pattern,
            redness_score: 20,
            lesion_count: 2,
            analyzed_at: chrono::Local::now().naive_local(),
        })))
    }

    #[test]
    fn empty_session_reports_no_abnormality() {
        let engine = DefaultScreeningEngine::with_random_features();
        let mut session = ScreeningSession::new();

        let report = engine.analyze(&mut session).unwrap();
        assert_eq!(report.result.primary.code, "QA00");
        assert_eq!(report.result.urgency, Urgency::Low);
        assert_eq!(report.reported_count, 0);
        assert_eq!(session.phase, ConversationPhase::Analyzing);
    }

    #[test]
    fn transcript_then_analysis_selects_herpes() {
        let engine = DefaultScreeningEngine::with_random_features();
        let mut session = ScreeningSession::new();
        session.record_transcript("I found a blister this morning");

        let report = engine.analyze(&mut session).unwrap();
        assert_eq!(report.result.primary.code, "1A94.0");
        assert_eq!(report.result.primary.confidence, 85);
        assert_eq!(report.reported_count, 1);
    }

    #[test]
    fn visual_capture_feeds_the_selector() {
        let engine = fixed_engine(LesionPattern::Vesicular);
        let mut session = ScreeningSession::new();

        let report = engine.analyze_with_visual(&mut session).unwrap();
        assert_eq!(report.result.primary.code, "1A94.0");
        assert_eq!(report.visual_count, 1);
        assert!(session.visual().is_some());
    }

    #[test]
    fn second_capture_overwrites_the_first() {
        let mut session = ScreeningSession::new();

        let vesicular = fixed_engine(LesionPattern::Vesicular);
        vesicular.analyze_with_visual(&mut session).unwrap();

        let verrucous = fixed_engine(LesionPattern::Verrucous);
        verrucous.analyze_with_visual(&mut session).unwrap();

        assert_eq!(
            session.visual().unwrap().pattern,
            LesionPattern::Verrucous
        );
    }

    #[test]
    fn reported_symptoms_survive_a_visual_pass() {
        let engine = fixed_engine(LesionPattern::None);
        let mut session = ScreeningSession::new();
        session.record_transcript("there is an ulcer");

        let report = engine.analyze_with_visual(&mut session).unwrap();
        assert_eq!(report.result.primary.code, "1A61");
        assert_eq!(report.reported_count, 1);
        assert_eq!(report.visual_count, 0);
    }

    #[test]
    fn report_serializes_for_display() {
        let engine = DefaultScreeningEngine::with_random_features();
        let mut session = ScreeningSession::new();
        session.record_transcript("a wart appeared");

        let report = engine.analyze(&mut session).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("1A95"));
    }
}
