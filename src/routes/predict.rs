use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{form_schema, Assessment, InferenceError, InferenceService};
use crate::models::{
    ErrorResponse, FormResponse, HealthResponse, ImportanceResponse, PredictRequest,
    PredictResponse, PredictVectorRequest,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<InferenceService>,
    pub explain_by_default: bool,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/form", web::get().to(get_form))
        .route("/predict", web::post().to(predict))
        .route("/predict/vector", web::post().to(predict_vector))
        .route("/model/importance", web::get().to(get_importance));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn inference_error_response(err: &InferenceError) -> HttpResponse {
    match err {
        InferenceError::Encode(e) => bad_request("invalid_category", e.to_string()),
        InferenceError::InvalidVector(e) => bad_request("invalid_vector", e.to_string()),
    }
}

fn to_response(assessment: Assessment) -> PredictResponse {
    PredictResponse {
        prediction_id: uuid::Uuid::new_v4().to_string(),
        label: assessment.prediction.label,
        diagnosis: assessment.prediction.diagnosis,
        message: assessment.prediction.diagnosis.message().to_string(),
        features: assessment.features,
        importance: assessment.importance,
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_kind: state.inference.model().kind(),
        timestamp: chrono::Utc::now(),
    })
}

/// Intake form description
///
/// GET /api/v1/form
async fn get_form() -> impl Responder {
    HttpResponse::Ok().json(FormResponse { fields: form_schema() })
}

/// Screen one patient
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "patient": {
///     "age": 55, "sex": "Male", "chestPainType": "Asymptomatic",
///     "restingBp": 140, "cholesterol": 250, "fastingBloodSugar": "No",
///     "restingEcg": "Normal", "maxHeartRate": 150, "exerciseAngina": "No",
///     "oldpeak": 1.5, "slope": "Flat", "majorVessels": 1,
///     "thalassemia": "Fixed Defect"
///   },
///   "explain": true
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let explain = req.explain.unwrap_or(state.explain_by_default);

    match state.inference.assess(&req.patient, explain) {
        Ok(assessment) => HttpResponse::Ok().json(to_response(assessment)),
        Err(e) => {
            tracing::info!("Rejected patient record: {}", e);
            inference_error_response(&e)
        }
    }
}

/// Classify an already-encoded feature vector
///
/// POST /api/v1/predict/vector
async fn predict_vector(
    state: web::Data<AppState>,
    req: web::Json<PredictVectorRequest>,
) -> impl Responder {
    let (features, prediction) = match state.inference.predict_values(&req.features) {
        Ok(result) => result,
        Err(e) => {
            tracing::info!("Rejected feature vector: {}", e);
            return inference_error_response(&e);
        }
    };

    let explain = req.explain.unwrap_or(state.explain_by_default);

    HttpResponse::Ok().json(to_response(Assessment {
        features,
        prediction,
        importance: explain.then(|| state.inference.importance()),
    }))
}

/// Feature importance of the loaded model
///
/// GET /api/v1/model/importance
async fn get_importance(state: web::Data<AppState>) -> impl Responder {
    let model = state.inference.model();

    HttpResponse::Ok().json(ImportanceResponse {
        model_kind: model.kind(),
        kernel: model.kernel_name().to_string(),
        importance: state.inference.importance(),
    })
}
