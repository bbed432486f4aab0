use serde::{Deserialize, Serialize};
use crate::core::classifier::ModelKind;
use crate::core::form::FormField;
use crate::models::domain::{Diagnosis, FeatureVector, Importance};

/// Response for the predict endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction_id: String,
    pub label: i64,
    pub diagnosis: Diagnosis,
    pub message: String,
    pub features: FeatureVector,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub importance: Option<Importance>,
}

/// Response for the importance endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceResponse {
    pub model_kind: ModelKind,
    pub kernel: String,
    pub importance: Importance,
}

/// Intake form description
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub fields: Vec<FormField>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_kind: ModelKind,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
