use actix_web::HttpResponse;
use thiserror::Error;

/// Faults that escape the action layer: blocking-pool failures and
/// unrecognized authentication errors. Validation and store failures are
/// returned as structured action results, not as this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Internal server error"
        }))
    }
}
