use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{InvoiceStore, ListingCache};
use crate::validation::{self, FormFields};

use super::{ActionFailure, ActionOutcome, INVOICES_PATH};

/// Validate the form, insert the invoice with a server-assigned date,
/// then invalidate the invoices listing and redirect to it.
pub fn create_invoice<S, C>(store: &S, cache: &C, form: &FormFields) -> ActionOutcome
where
    S: InvoiceStore,
    C: ListingCache,
{
    let fields = match validation::validate_invoice(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionFailure::validation(errors, "Missing Fields. Failed to Create Invoice.")
        }
    };

    let date = Utc::now().date_naive();
    if let Err(e) = store.insert(&fields, date) {
        log::error!("invoice insert failed: {e}");
        return ActionFailure::store("Database Error: Failed to Create Invoice.");
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Same rules as create, but keyed by id and without touching the date.
pub fn update_invoice<S, C>(store: &S, cache: &C, id: Uuid, form: &FormFields) -> ActionOutcome
where
    S: InvoiceStore,
    C: ListingCache,
{
    let fields = match validation::validate_invoice(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionFailure::validation(errors, "Missing Fields. Failed to Update Invoice.")
        }
    };

    if let Err(e) = store.update(id, &fields) {
        log::error!("invoice update failed: {e}");
        return ActionFailure::store("Database Error: Failed to Update Invoice.");
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// No form, no validation. Deleting an unknown id is success; invoked
/// from within the listing, so no redirect is issued.
pub fn delete_invoice<S, C>(store: &S, cache: &C, id: Uuid) -> ActionOutcome
where
    S: InvoiceStore,
    C: ListingCache,
{
    if let Err(e) = store.delete(id) {
        log::error!("invoice delete failed: {e}");
        return ActionFailure::store("Database Error: Failed to Delete Invoice.");
    }

    cache.invalidate(INVOICES_PATH);
    ActionOutcome::Done
}
