use uuid::Uuid;

/// Invoice status as accepted from the form. Anything else is a
/// validation error, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// Validated invoice form payload. The amount is already converted to
/// integer cents; the creation date is supplied separately because it is
/// server-assigned and never part of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFields {
    pub customer_id: Uuid,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Validated customer form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub image_url: String,
}
