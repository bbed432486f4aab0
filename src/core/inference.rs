use thiserror::Error;
use crate::core::{
    classifier::Model,
    encoder::{encode, EncodeError},
    importance::rank_importance,
};
use crate::models::{Diagnosis, FeatureVector, Importance, InvalidVectorLength, PatientRecord};

/// Errors a caller can cause; all are invalid-request errors
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    InvalidVector(#[from] InvalidVectorLength),
}

/// Raw label and its interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub label: i64,
    pub diagnosis: Diagnosis,
}

/// Outcome of screening one patient
#[derive(Debug, Clone)]
pub struct Assessment {
    pub features: FeatureVector,
    pub prediction: Prediction,
    pub importance: Option<Importance>,
}

/// Owns the loaded classifier and runs the encode/predict/explain flow
///
/// Built once at startup from a successfully loaded model; there is no way
/// to construct one without a model.
#[derive(Debug)]
pub struct InferenceService {
    model: Model,
}

impl InferenceService {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let label = self.model.predict(features);
        Prediction {
            label,
            diagnosis: Diagnosis::from_label(label),
        }
    }

    /// Predict from an unchecked sequence of values
    pub fn predict_values(&self, values: &[f64]) -> Result<(FeatureVector, Prediction), InferenceError> {
        let features = FeatureVector::try_from(values)?;
        Ok((features, self.predict(&features)))
    }

    pub fn importance(&self) -> Importance {
        rank_importance(&self.model)
    }

    /// Encode, predict and optionally explain one patient record
    pub fn assess(&self, record: &PatientRecord, explain: bool) -> Result<Assessment, InferenceError> {
        let features = encode(record)?;
        let prediction = self.predict(&features);

        tracing::info!(
            "Prediction: label={} diagnosis={:?} (model: {})",
            prediction.label,
            prediction.diagnosis,
            self.model.kernel_name()
        );

        let importance = explain.then(|| self.importance());
        if let Some(Importance::Unavailable { reason }) = &importance {
            tracing::info!("Importance unavailable: {}", reason);
        }

        Ok(Assessment {
            features,
            prediction,
            importance,
        })
    }
}
