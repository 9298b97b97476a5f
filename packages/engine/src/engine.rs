//! Runs one validated panel through the pre-trained classifier

use crate::config::EngineConfig;
use crate::error::{InferenceError, InferenceResult};
use crate::input::PatientInput;
use crate::model::ThyroidModel;
use crate::schema::CLASS_LABELS;
use crate::vector::FeatureVector;
use std::fmt;

/// Predicted class of a single patient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub index: usize,
    pub label: &'static str,
}

impl Verdict {
    pub fn from_index(index: usize) -> InferenceResult<Self> {
        let label = CLASS_LABELS
            .get(index)
            .copied()
            .ok_or(InferenceError::UnknownClass {
                index,
                labels: CLASS_LABELS,
            })?;
        Ok(Verdict { index, label })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VERDICT: {}", self.label)
    }
}

/// Classify an already loaded model against one patient
pub fn classify(model: &ThyroidModel, input: &PatientInput) -> InferenceResult<Verdict> {
    let vector = FeatureVector::from_input(input);
    tracing::debug!("Built instance: {:?}", vector.as_slice());

    let t0 = std::time::Instant::now();
    let index = model.classify(&vector)?;
    tracing::debug!("Classify instance: {:?}", t0.elapsed());

    Verdict::from_index(index)
}

/// Load the configured model and classify one patient
pub fn predict(config: &EngineConfig, input: &PatientInput) -> InferenceResult<Verdict> {
    let t0 = std::time::Instant::now();
    let model = ThyroidModel::load(&config.model_path)?;
    tracing::debug!("Load model: {:?}", t0.elapsed());

    classify(&model, input)
}
