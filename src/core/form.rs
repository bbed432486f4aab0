use serde::Serialize;
use crate::core::encoder::{
    BinaryField, CHEST_PAIN_TYPES, EXERCISE_ANGINA, FASTING_BLOOD_SUGAR, RESTING_ECG_RESULTS, SEX,
    SLOPES, THALASSEMIA_TYPES,
};

/// Slider bounds for a numeric attribute
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const AGE_RANGE: NumericRange = NumericRange { min: 20.0, max: 100.0, step: 1.0, default: 30.0 };
pub const RESTING_BP_RANGE: NumericRange = NumericRange { min: 80.0, max: 200.0, step: 1.0, default: 120.0 };
pub const CHOLESTEROL_RANGE: NumericRange = NumericRange { min: 100.0, max: 600.0, step: 1.0, default: 200.0 };
pub const MAX_HEART_RATE_RANGE: NumericRange = NumericRange { min: 70.0, max: 220.0, step: 1.0, default: 150.0 };
pub const OLDPEAK_RANGE: NumericRange = NumericRange { min: 0.0, max: 6.0, step: 0.1, default: 1.0 };
pub const MAJOR_VESSELS_RANGE: NumericRange = NumericRange { min: 0.0, max: 3.0, step: 1.0, default: 0.0 };

/// How a field is collected
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "input", rename_all = "lowercase")]
pub enum FieldInput {
    Slider(NumericRange),
    Radio { choices: &'static [&'static str], default: &'static str },
    Select { choices: &'static [&'static str], default: &'static str },
}

/// One entry of the intake form, listed in feature order
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    /// JSON key in `PatientRecord`
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub input: FieldInput,
}

fn slider(key: &'static str, label: &'static str, range: NumericRange) -> FormField {
    FormField { key, label, input: FieldInput::Slider(range) }
}

fn radio(key: &'static str, label: &'static str, field: &'static BinaryField) -> FormField {
    FormField {
        key,
        label,
        input: FieldInput::Radio { choices: &field.labels, default: field.labels[0] },
    }
}

fn select(key: &'static str, label: &'static str, choices: &'static [&'static str]) -> FormField {
    FormField {
        key,
        label,
        input: FieldInput::Select { choices, default: choices[0] },
    }
}

/// Intake form fields, in the order the encoder emits features
pub fn form_schema() -> Vec<FormField> {
    vec![
        slider("age", "Age", AGE_RANGE),
        radio("sex", "Sex", &SEX),
        select("chestPainType", "Chest Pain Type", &CHEST_PAIN_TYPES),
        slider("restingBp", "Resting BP (mm Hg)", RESTING_BP_RANGE),
        slider("cholesterol", "Cholesterol (mg/dl)", CHOLESTEROL_RANGE),
        radio("fastingBloodSugar", "Fasting Blood Sugar > 120", &FASTING_BLOOD_SUGAR),
        select("restingEcg", "Resting ECG", &RESTING_ECG_RESULTS),
        slider("maxHeartRate", "Max Heart Rate", MAX_HEART_RATE_RANGE),
        radio("exerciseAngina", "Exercise Induced Angina", &EXERCISE_ANGINA),
        slider("oldpeak", "Oldpeak", OLDPEAK_RANGE),
        select("slope", "Slope", &SLOPES),
        slider("majorVessels", "Major Vessels (0-3)", MAJOR_VESSELS_RANGE),
        select("thalassemia", "Thalassemia", &THALASSEMIA_TYPES),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_COUNT;

    #[test]
    fn test_one_field_per_feature() {
        assert_eq!(form_schema().len(), FEATURE_COUNT);
    }

    #[test]
    fn test_defaults_inside_ranges() {
        for range in [
            AGE_RANGE,
            RESTING_BP_RANGE,
            CHOLESTEROL_RANGE,
            MAX_HEART_RATE_RANGE,
            OLDPEAK_RANGE,
            MAJOR_VESSELS_RANGE,
        ] {
            assert!(range.contains(range.default));
        }
    }

    #[test]
    fn test_select_serialization() {
        let field = select("slope", "Slope", &SLOPES);
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["key"], "slope");
        assert_eq!(json["input"], "select");
        assert_eq!(json["default"], "Upsloping");
        assert_eq!(json["choices"][2], "Downsloping");
    }

    #[test]
    fn test_slider_serialization() {
        let json = serde_json::to_value(&slider("oldpeak", "Oldpeak", OLDPEAK_RANGE)).unwrap();
        assert_eq!(json["input"], "slider");
        assert_eq!(json["max"], 6.0);
        assert_eq!(json["step"], 0.1);
    }
}
