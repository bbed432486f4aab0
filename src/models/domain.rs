use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Number of features the classifier was trained on
pub const FEATURE_COUNT: usize = 13;

/// Feature names in training-time column order
///
/// The position of each name is the position of its value in a
/// [`FeatureVector`]. Reordering this list corrupts every prediction.
pub static FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "sex",
    "cp",
    "trestbps",
    "chol",
    "fbs",
    "restecg",
    "thalach",
    "exang",
    "oldpeak",
    "slope",
    "ca",
    "thal",
];

/// Patient attributes as collected by the intake form
///
/// Categorical fields carry the human-readable label shown in the form;
/// the encoder maps them to their numeric codes. Numeric ranges mirror the
/// form sliders and are checked here, not by the encoder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientRecord {
    #[validate(range(min = 20, max = 100))]
    pub age: u8,
    pub sex: String,
    #[serde(rename = "chestPainType", alias = "cp")]
    pub chest_pain_type: String,
    #[validate(range(min = 80, max = 200))]
    #[serde(rename = "restingBp", alias = "trestbps")]
    pub resting_bp: u16,
    #[validate(range(min = 100, max = 600))]
    #[serde(alias = "chol")]
    pub cholesterol: u16,
    #[serde(rename = "fastingBloodSugar", alias = "fbs")]
    pub fasting_blood_sugar: String,
    #[serde(rename = "restingEcg", alias = "restecg")]
    pub resting_ecg: String,
    #[validate(range(min = 70, max = 220))]
    #[serde(rename = "maxHeartRate", alias = "thalach")]
    pub max_heart_rate: u16,
    #[serde(rename = "exerciseAngina", alias = "exang")]
    pub exercise_angina: String,
    #[validate(range(min = 0.0, max = 6.0))]
    pub oldpeak: f64,
    pub slope: String,
    #[validate(range(max = 3))]
    #[serde(rename = "majorVessels", alias = "ca")]
    pub major_vessels: u8,
    #[serde(alias = "thal")]
    pub thalassemia: String,
}

/// Raised when a raw feature sequence does not have [`FEATURE_COUNT`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} features, got {actual}")]
pub struct InvalidVectorLength {
    pub expected: usize,
    pub actual: usize,
}

/// Fixed-order numeric encoding of a patient record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Pair every value with its feature name
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = InvalidVectorLength;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| InvalidVectorLength {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self(array))
    }
}

/// Interpreted classifier output
///
/// The model was trained with label `1` meaning the negative finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    NoDiseaseDetected,
    DiseaseDetected,
}

impl Diagnosis {
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Diagnosis::NoDiseaseDetected
        } else {
            Diagnosis::DiseaseDetected
        }
    }

    /// Message shown to the person filling in the form
    pub fn message(&self) -> &'static str {
        match self {
            Diagnosis::NoDiseaseDetected => "No Heart Disease Detected.",
            Diagnosis::DiseaseDetected => {
                "Heart Disease Detected. Please consult a healthcare provider."
            }
        }
    }
}

/// One bar of the importance chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub feature: String,
    pub magnitude: f64,
    /// Magnitude relative to the largest one, in `0.0..=1.0`
    pub relative: f64,
}

/// Per-feature importance, or the reason it cannot be computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Importance {
    Available { ranking: Vec<ImportanceEntry> },
    Unavailable { reason: String },
}

impl Importance {
    pub fn is_available(&self) -> bool {
        matches!(self, Importance::Available { .. })
    }

    pub fn ranking(&self) -> Option<&[ImportanceEntry]> {
        match self {
            Importance::Available { ranking } => Some(ranking.as_slice()),
            Importance::Unavailable { .. } => None,
        }
    }
}
