pub mod enums;
pub mod result;
pub mod symptom;
pub mod visual;

pub use result::{DiagnosisResult, Differential, PrimaryDiagnosis};
pub use symptom::Symptom;
pub use visual::VisualFeatures;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
