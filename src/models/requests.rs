use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::PatientRecord;

/// Request to screen one patient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(nested)]
    pub patient: PatientRecord,
    /// Include the importance ranking; falls back to the configured default
    #[serde(default)]
    pub explain: Option<bool>,
}

/// Request to classify an already-encoded feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictVectorRequest {
    pub features: Vec<f64>,
    #[serde(default)]
    pub explain: Option<bool>,
}
