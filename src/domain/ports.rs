use chrono::NaiveDate;
use uuid::Uuid;

use super::entities::{CustomerFields, InvoiceFields};
use super::errors::StoreError;

/// Persistence port for invoices. One statement per call; no transaction
/// spans calls. Delete is idempotent: zero affected rows is success.
pub trait InvoiceStore: Send + Sync + 'static {
    fn insert(&self, fields: &InvoiceFields, date: NaiveDate) -> Result<Uuid, StoreError>;
    fn update(&self, id: Uuid, fields: &InvoiceFields) -> Result<(), StoreError>;
    fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Persistence port for customers.
pub trait CustomerStore: Send + Sync + 'static {
    fn insert(&self, fields: &CustomerFields) -> Result<Uuid, StoreError>;
    fn update(&self, id: Uuid, fields: &CustomerFields) -> Result<(), StoreError>;
    fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Invalidation signal for cached listing views, keyed by listing path.
pub trait ListingCache: Send + Sync + 'static {
    fn invalidate(&self, path: &str);
}
