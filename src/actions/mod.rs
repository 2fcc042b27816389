//! Server actions: validate submitted fields, run a single persistence
//! statement, then invalidate the listing cache and signal navigation.
//! Steps are strictly ordered and a failed step stops the flow.

pub mod auth;
pub mod customers;
pub mod invoices;

use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::FieldErrors;

pub const INVOICES_PATH: &str = "/dashboard/invoices";
pub const CUSTOMERS_PATH: &str = "/dashboard/customers";

/// Outcome of a mutating dashboard action.
#[derive(Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Mutation committed; the caller should navigate to the listing path.
    Redirect(&'static str),
    /// Mutation committed with no navigation (deletes).
    Done,
    /// Validation or store failure; nothing was written past the failing
    /// step and the cache was not invalidated.
    Failure(ActionFailure),
}

/// Structured failure returned to the caller instead of a thrown fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActionFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionFailure {
    fn validation(errors: FieldErrors, message: &str) -> ActionOutcome {
        ActionOutcome::Failure(ActionFailure {
            errors: Some(errors),
            message: Some(message.to_string()),
        })
    }

    fn store(message: &str) -> ActionOutcome {
        ActionOutcome::Failure(ActionFailure {
            errors: None,
            message: Some(message.to_string()),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::domain::entities::{CustomerFields, InvoiceFields};
    use crate::domain::errors::StoreError;
    use crate::domain::ports::{CustomerStore, InvoiceStore, ListingCache};

    #[derive(Default)]
    pub struct RecordingCache {
        pub invalidated: Mutex<Vec<String>>,
    }

    impl RecordingCache {
        pub fn paths(&self) -> Vec<String> {
            self.invalidated.lock().unwrap().clone()
        }
    }

    impl ListingCache for RecordingCache {
        fn invalidate(&self, path: &str) {
            self.invalidated.lock().unwrap().push(path.to_string());
        }
    }

    fn failure() -> StoreError {
        StoreError::Statement("connection refused".to_string())
    }

    #[derive(Default)]
    pub struct StubInvoiceStore {
        pub fail: bool,
        pub inserts: Mutex<Vec<(InvoiceFields, NaiveDate)>>,
        pub updates: Mutex<Vec<(Uuid, InvoiceFields)>>,
        pub deletes: Mutex<Vec<Uuid>>,
    }

    impl StubInvoiceStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl InvoiceStore for StubInvoiceStore {
        fn insert(&self, fields: &InvoiceFields, date: NaiveDate) -> Result<Uuid, StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.inserts.lock().unwrap().push((fields.clone(), date));
            Ok(Uuid::new_v4())
        }

        fn update(&self, id: Uuid, fields: &InvoiceFields) -> Result<(), StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.updates.lock().unwrap().push((id, fields.clone()));
            Ok(())
        }

        fn delete(&self, id: Uuid) -> Result<(), StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.deletes.lock().unwrap().push(id);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct StubCustomerStore {
        pub fail: bool,
        pub inserts: Mutex<Vec<CustomerFields>>,
        pub updates: Mutex<Vec<(Uuid, CustomerFields)>>,
        pub deletes: Mutex<Vec<Uuid>>,
    }

    impl StubCustomerStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl CustomerStore for StubCustomerStore {
        fn insert(&self, fields: &CustomerFields) -> Result<Uuid, StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.inserts.lock().unwrap().push(fields.clone());
            Ok(Uuid::new_v4())
        }

        fn update(&self, id: Uuid, fields: &CustomerFields) -> Result<(), StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.updates.lock().unwrap().push((id, fields.clone()));
            Ok(())
        }

        fn delete(&self, id: Uuid) -> Result<(), StoreError> {
            if self.fail {
                return Err(failure());
            }
            self.deletes.lock().unwrap().push(id);
            Ok(())
        }
    }
}
