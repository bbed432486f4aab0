//! Cardio Predict - heart disease screening service
//!
//! Encodes patient attributes into the feature layout a pre-trained SVM was
//! trained on, runs the classifier and reports per-feature importance when
//! the model is linear.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{encode, EncodeError, InferenceService, Model, ModelKind};
pub use crate::models::{PatientRecord, FeatureVector, Diagnosis, Importance, PredictRequest, PredictResponse};
pub use crate::services::{load_model, LoadError};
