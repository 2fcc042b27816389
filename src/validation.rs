//! Pure form validation: raw submitted fields in, typed payload or
//! per-field error messages out. Never touches the store.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{CustomerFields, InvoiceFields, InvoiceStatus};

/// Raw form submission: field name to raw text value.
pub type FormFields = HashMap<String, String>;

/// Field name to list of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}

// The same message covers a missing field and a failed coercion, matching
// how the forms report them to the user.
pub const CUSTOMER_REF_MSG: &str = "Please select a customer.";
pub const AMOUNT_MSG: &str = "Please enter a numeric amount.";
pub const STATUS_MSG: &str = "Please select an invoice status.";
pub const CUSTOMER_NAME_MSG: &str = "Please enter the customer's name.";
pub const EMAIL_MSG: &str = "Please enter an email address.";
pub const IMAGE_URL_MSG: &str = "Please provide a valid URL for the image.";

fn raw<'a>(form: &'a FormFields, field: &str) -> Option<&'a str> {
    form.get(field).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn text(form: &FormFields, field: &str, message: &str, errors: &mut FieldErrors) -> Option<String> {
    match raw(form, field) {
        Some(value) => Some(value.to_string()),
        None => {
            errors.push(field, message);
            None
        }
    }
}

fn customer_ref(
    form: &FormFields,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<Uuid> {
    match raw(form, field).and_then(|v| Uuid::parse_str(v).ok()) {
        Some(id) => Some(id),
        None => {
            errors.push(field, message);
            None
        }
    }
}

/// Coerce a decimal string into integer cents, rounding half-up.
fn cents(form: &FormFields, field: &str, message: &str, errors: &mut FieldErrors) -> Option<i64> {
    match raw(form, field).and_then(parse_cents) {
        Some(amount) => Some(amount),
        None => {
            errors.push(field, message);
            None
        }
    }
}

fn parse_cents(value: &str) -> Option<i64> {
    let amount = BigDecimal::from_str(value).ok()?;
    (amount * BigDecimal::from(100))
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
}

fn status(
    form: &FormFields,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<InvoiceStatus> {
    match raw(form, field).and_then(InvoiceStatus::parse) {
        Some(status) => Some(status),
        None => {
            errors.push(field, message);
            None
        }
    }
}

/// Invoice form rules, shared by create and update. The `name` field
/// carries the customer reference chosen in the form; `id` and `date`
/// are never form fields.
pub fn validate_invoice(form: &FormFields) -> Result<InvoiceFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = customer_ref(form, "name", CUSTOMER_REF_MSG, &mut errors);
    let amount_cents = cents(form, "amount", AMOUNT_MSG, &mut errors);
    let status = status(form, "status", STATUS_MSG, &mut errors);

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(InvoiceFields {
            customer_id,
            amount_cents,
            status,
        }),
        _ => Err(errors),
    }
}

/// Customer form rules, shared by create and update.
pub fn validate_customer(form: &FormFields) -> Result<CustomerFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = text(form, "name", CUSTOMER_NAME_MSG, &mut errors);
    let email = text(form, "email", EMAIL_MSG, &mut errors);
    let image_url = text(form, "image_url", IMAGE_URL_MSG, &mut errors);

    match (name, email, image_url) {
        (Some(name), Some(email), Some(image_url)) => Ok(CustomerFields {
            name,
            email,
            image_url,
        }),
        _ => Err(errors),
    }
}
