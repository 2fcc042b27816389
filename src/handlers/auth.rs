use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::actions::auth::{authenticate, Credentials};
use crate::errors::AppError;
use crate::AppState;

/// POST /login
///
/// Recognized authentication failures come back as a message body;
/// anything the verifier cannot categorize surfaces as a 500.
#[utoipa::path(
    post,
    path = "/login",
    responses(
        (status = 303, description = "Signed in; redirect to the dashboard"),
        (status = 401, description = "Recognized authentication failure", body = String),
        (status = 500, description = "Internal server error"),
    ),
    tag = "auth"
)]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<Credentials>,
) -> Result<HttpResponse, AppError> {
    let credentials = form.into_inner();

    match authenticate(state.verifier.as_ref(), &credentials) {
        Ok(None) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/dashboard"))
            .finish()),
        Ok(Some(message)) => Ok(HttpResponse::Unauthorized().json(json!({ "message": message }))),
        Err(e) => Err(AppError::Internal(e.to_string())),
    }
}
