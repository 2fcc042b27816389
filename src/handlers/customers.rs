use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::actions;
use crate::errors::AppError;
use crate::validation::FormFields;
use crate::AppState;

use super::respond;

/// POST /dashboard/customers
#[utoipa::path(
    post,
    path = "/dashboard/customers",
    responses(
        (status = 303, description = "Customer created; redirect to the customers listing"),
        (status = 422, description = "Validation or database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    state: web::Data<AppState>,
    form: web::Form<FormFields>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let outcome = web::block(move || {
        actions::customers::create_customer(&state.customers, state.cache.as_ref(), &form)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}

/// POST /dashboard/customers/{id}
#[utoipa::path(
    post,
    path = "/dashboard/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 303, description = "Customer updated; redirect to the customers listing"),
        (status = 422, description = "Validation or database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    form: web::Form<FormFields>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    let outcome = web::block(move || {
        actions::customers::update_customer(&state.customers, state.cache.as_ref(), id, &form)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}

/// POST /dashboard/customers/{id}/delete
#[utoipa::path(
    post,
    path = "/dashboard/customers/{id}/delete",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 204, description = "Customer deleted (or was already absent)"),
        (status = 422, description = "Database failure", body = crate::actions::ActionFailure),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let outcome = web::block(move || {
        actions::customers::delete_customer(&state.customers, state.cache.as_ref(), id)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(respond(outcome))
}
