use uuid::Uuid;

use crate::domain::ports::{CustomerStore, ListingCache};
use crate::validation::{self, FormFields};

use super::{ActionFailure, ActionOutcome, CUSTOMERS_PATH};

pub fn create_customer<S, C>(store: &S, cache: &C, form: &FormFields) -> ActionOutcome
where
    S: CustomerStore,
    C: ListingCache,
{
    let fields = match validation::validate_customer(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionFailure::validation(errors, "Missing Fields. Failed to Create Customer.")
        }
    };

    if let Err(e) = store.insert(&fields) {
        log::error!("customer insert failed: {e}");
        return ActionFailure::store("Database Error: Failed to Create Customer.");
    }

    cache.invalidate(CUSTOMERS_PATH);
    ActionOutcome::Redirect(CUSTOMERS_PATH)
}

pub fn update_customer<S, C>(store: &S, cache: &C, id: Uuid, form: &FormFields) -> ActionOutcome
where
    S: CustomerStore,
    C: ListingCache,
{
    let fields = match validation::validate_customer(form) {
        Ok(fields) => fields,
        Err(errors) => {
            return ActionFailure::validation(errors, "Missing Fields. Failed to Update Customer.")
        }
    };

    if let Err(e) = store.update(id, &fields) {
        log::error!("customer update failed: {e}");
        return ActionFailure::store("Database Error: Failed to Update Customer.");
    }

    cache.invalidate(CUSTOMERS_PATH);
    ActionOutcome::Redirect(CUSTOMERS_PATH)
}

pub fn delete_customer<S, C>(store: &S, cache: &C, id: Uuid) -> ActionOutcome
where
    S: CustomerStore,
    C: ListingCache,
{
    if let Err(e) = store.delete(id) {
        log::error!("customer delete failed: {e}");
        return ActionFailure::store("Database Error: Failed to Delete Customer.");
    }

    cache.invalidate(CUSTOMERS_PATH);
    ActionOutcome::Done
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::actions::testing::{RecordingCache, StubCustomerStore};

    fn form(name: &str, email: &str, image_url: &str) -> FormFields {
        FormFields::from([
            ("name".to_string(), name.to_string()),
            ("email".to_string(), email.to_string()),
            ("image_url".to_string(), image_url.to_string()),
        ])
    }

    #[test]
    fn create_inserts_then_invalidates_and_redirects() {
        let store = StubCustomerStore::default();
        let cache = RecordingCache::default();

        let outcome = create_customer(
            &store,
            &cache,
            &form("Ana Lopez", "ana@example.com", "/c/ana.png"),
        );

        assert_eq!(outcome, ActionOutcome::Redirect("/dashboard/customers"));
        let inserts = store.inserts.lock().unwrap();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].name, "Ana Lopez");
        assert_eq!(inserts[0].email, "ana@example.com");
        assert_eq!(inserts[0].image_url, "/c/ana.png");
        assert_eq!(cache.paths(), vec!["/dashboard/customers".to_string()]);
    }

    #[test]
    fn create_with_missing_email_reports_that_field_only() {
        let store = StubCustomerStore::default();
        let cache = RecordingCache::default();

        let outcome = create_customer(
            &store,
            &cache,
            &FormFields::from([
                ("name".to_string(), "Ana Lopez".to_string()),
                ("image_url".to_string(), "/c/ana.png".to_string()),
            ]),
        );

        let ActionOutcome::Failure(failure) = outcome else {
            panic!("expected failure");
        };
        let errors = failure.errors.expect("field errors");
        assert!(errors.get("email").is_some());
        assert!(errors.get("name").is_none());
        assert_eq!(
            failure.message.as_deref(),
            Some("Missing Fields. Failed to Create Customer.")
        );
        assert!(store.inserts.lock().unwrap().is_empty());
        assert!(cache.paths().is_empty());
    }

    #[test]
    fn update_is_keyed_by_the_supplied_id() {
        let store = StubCustomerStore::default();
        let cache = RecordingCache::default();
        let id = Uuid::new_v4();

        let outcome = update_customer(
            &store,
            &cache,
            id,
            &form("Ana Lopez", "ana@lopez.example", "/c/ana2.png"),
        );

        assert_eq!(outcome, ActionOutcome::Redirect("/dashboard/customers"));
        let updates = store.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, id);
        assert_eq!(updates[0].1.email, "ana@lopez.example");
    }

    #[test]
    fn update_store_failure_returns_message() {
        let store = StubCustomerStore::failing();
        let cache = RecordingCache::default();

        let outcome = update_customer(
            &store,
            &cache,
            Uuid::new_v4(),
            &form("Ana Lopez", "ana@example.com", "/c/ana.png"),
        );

        assert_eq!(
            outcome,
            ActionFailure::store("Database Error: Failed to Update Customer.")
        );
        assert!(cache.paths().is_empty());
    }

    #[test]
    fn delete_invalidates_but_does_not_redirect() {
        let store = StubCustomerStore::default();
        let cache = RecordingCache::default();
        let id = Uuid::new_v4();

        let outcome = delete_customer(&store, &cache, id);

        assert_eq!(outcome, ActionOutcome::Done);
        assert_eq!(*store.deletes.lock().unwrap(), vec![id]);
        assert_eq!(cache.paths(), vec!["/dashboard/customers".to_string()]);
    }

    #[test]
    fn delete_store_failure_skips_invalidation() {
        let store = StubCustomerStore::failing();
        let cache = RecordingCache::default();

        let outcome = delete_customer(&store, &cache, Uuid::new_v4());

        assert_eq!(
            outcome,
            ActionFailure::store("Database Error: Failed to Delete Customer.")
        );
        assert!(cache.paths().is_empty());
    }
}
