use thiserror::Error;
use crate::models::{FeatureVector, PatientRecord};

/// Errors raised while encoding a patient record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid {field} {value:?}: expected one of {expected:?}")]
    InvalidCategory {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
}

/// A yes/no style attribute: the first label encodes to 1, the second to 0
#[derive(Debug, Clone, Copy)]
pub struct BinaryField {
    pub name: &'static str,
    pub labels: [&'static str; 2],
}

pub const SEX: BinaryField = BinaryField { name: "sex", labels: ["Male", "Female"] };
pub const FASTING_BLOOD_SUGAR: BinaryField = BinaryField {
    name: "fasting blood sugar",
    labels: ["Yes", "No"],
};
pub const EXERCISE_ANGINA: BinaryField = BinaryField {
    name: "exercise induced angina",
    labels: ["Yes", "No"],
};

// Reference orderings. A label encodes to its index.
pub const CHEST_PAIN_TYPES: [&str; 4] = [
    "Typical Angina",
    "Atypical Angina",
    "Non-anginal Pain",
    "Asymptomatic",
];
pub const RESTING_ECG_RESULTS: [&str; 3] = [
    "Normal",
    "ST-T Abnormality",
    "Left Ventricular Hypertrophy",
];
pub const SLOPES: [&str; 3] = ["Upsloping", "Flat", "Downsloping"];
pub const THALASSEMIA_TYPES: [&str; 3] = ["Normal", "Fixed Defect", "Reversible Defect"];

/// Added to the thalassemia index; the training data coded this field as 3..=5
pub const THALASSEMIA_OFFSET: f64 = 3.0;

/// Zero-based position of `value` in a reference ordering
///
/// Labels must match exactly.
pub fn category_index(
    field: &'static str,
    options: &'static [&'static str],
    value: &str,
) -> Result<usize, EncodeError> {
    options
        .iter()
        .position(|option| *option == value)
        .ok_or_else(|| EncodeError::InvalidCategory {
            field,
            value: value.to_string(),
            expected: options,
        })
}

/// 1.0 for the affirmative label, 0.0 for the other one
pub fn binary_flag(field: &'static BinaryField, value: &str) -> Result<f64, EncodeError> {
    let index = category_index(field.name, &field.labels, value)?;
    Ok(if index == 0 { 1.0 } else { 0.0 })
}

/// Encode a patient record into the classifier's feature order
///
/// Numeric fields pass through untouched; their ranges are checked when the
/// request is validated.
pub fn encode(record: &PatientRecord) -> Result<FeatureVector, EncodeError> {
    let sex = binary_flag(&SEX, &record.sex)?;
    let chest_pain = category_index("chest pain type", &CHEST_PAIN_TYPES, &record.chest_pain_type)?;
    let fbs = binary_flag(&FASTING_BLOOD_SUGAR, &record.fasting_blood_sugar)?;
    let resting_ecg = category_index("resting ECG", &RESTING_ECG_RESULTS, &record.resting_ecg)?;
    let exang = binary_flag(&EXERCISE_ANGINA, &record.exercise_angina)?;
    let slope = category_index("slope", &SLOPES, &record.slope)?;
    let thal = category_index("thalassemia", &THALASSEMIA_TYPES, &record.thalassemia)?;

    let vector = FeatureVector::new([
        record.age as f64,
        sex,
        chest_pain as f64,
        record.resting_bp as f64,
        record.cholesterol as f64,
        fbs,
        resting_ecg as f64,
        record.max_heart_rate as f64,
        exang,
        record.oldpeak,
        slope as f64,
        record.major_vessels as f64,
        thal as f64 + THALASSEMIA_OFFSET,
    ]);

    tracing::debug!("Encoded patient record: {:?}", vector.named().collect::<Vec<_>>());

    Ok(vector)
}
