// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PatientRecord, FeatureVector, InvalidVectorLength, Diagnosis, Importance, ImportanceEntry, FEATURE_COUNT, FEATURE_NAMES};
pub use requests::{PredictRequest, PredictVectorRequest};
pub use responses::{PredictResponse, ImportanceResponse, FormResponse, HealthResponse, ErrorResponse};
