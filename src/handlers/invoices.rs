use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::actions;
use crate::errors::AppError;
use crate::validation::FormFields;
use crate::AppState;

use super::respond;

/// POST /dashboard/invoices
#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    responses(
        (status = 303, description = "Invoice created; redirect to the invoices listing"),
        (status = 422, description = "Validation or database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    state: web::Data<AppState>,
    form: web::Form<FormFields>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let outcome = web::block(move || {
        actions::invoices::create_invoice(&state.invoices, state.cache.as_ref(), &form)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}

/// POST /dashboard/invoices/{id}
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}",
    params(
        ("id" = Uuid, Path, description = "Invoice UUID"),
    ),
    responses(
        (status = 303, description = "Invoice updated; redirect to the invoices listing"),
        (status = 422, description = "Validation or database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn update_invoice(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<FormFields>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    let outcome = web::block(move || {
        actions::invoices::update_invoice(&state.invoices, state.cache.as_ref(), id, &form)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}

/// POST /dashboard/invoices/{id}/delete
#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Invoice UUID"),
    ),
    responses(
        (status = 204, description = "Invoice deleted (or was already absent)"),
        (status = 422, description = "Database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "invoices"
)]
pub async fn delete_invoice(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let outcome = web::block(move || {
        actions::invoices::delete_invoice(&state.invoices, state.cache.as_ref(), id)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}
