pub mod auth;
pub mod customers;
pub mod invoices;

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::actions::ActionOutcome;

/// Translate an action outcome into its HTTP shape: a 303 redirect to the
/// listing, 204 for deletes, or a 422 with the structured failure body.
pub(crate) fn respond(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Redirect(path) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, path))
            .finish(),
        ActionOutcome::Done => HttpResponse::NoContent().finish(),
        ActionOutcome::Failure(failure) => HttpResponse::UnprocessableEntity().json(failure),
    }
}
