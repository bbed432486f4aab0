// Core algorithm exports
pub mod classifier;
pub mod encoder;
pub mod form;
pub mod importance;
pub mod inference;

pub use classifier::{Kernel, Model, ModelArtifact, ModelError, ModelKind};
pub use encoder::{encode, EncodeError};
pub use form::form_schema;
pub use importance::{rank_coefficients, rank_importance};
pub use inference::{Assessment, InferenceError, InferenceService, Prediction};
