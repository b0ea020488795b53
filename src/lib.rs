//! PrivaScreen core: a simulated symptom interview feeding a rule-based
//! differential diagnosis engine with ICD-11-style labels.
//!
//! The crate is the decision core only. Speech, camera capture, and
//! rendering live in the consuming UI; what crosses the boundary is
//! free-text transcripts in and [`triage::ScreeningReport`] out.

pub mod config;
pub mod interview;
pub mod models;
pub mod session;
pub mod triage;

pub use models::{DiagnosisResult, Symptom, VisualFeatures};
pub use session::ScreeningSession;
pub use triage::{DefaultScreeningEngine, ScreeningEngine, ScreeningReport};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a consuming binary. Honors RUST_LOG, falling
/// back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
