use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::ports::ListingCache;

/// In-memory record of listing paths whose cached render is stale.
/// Listing views check (and clear) their mark when they regenerate.
#[derive(Debug, Default)]
pub struct PathCache {
    stale: Mutex<HashSet<String>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stale(&self, path: &str) -> bool {
        self.stale.lock().expect("poisoned cache lock").contains(path)
    }

    /// Clears the stale mark for `path`, returning whether it was set.
    pub fn take_stale(&self, path: &str) -> bool {
        self.stale.lock().expect("poisoned cache lock").remove(path)
    }
}

impl ListingCache for PathCache {
    fn invalidate(&self, path: &str) {
        self.stale
            .lock()
            .expect("poisoned cache lock")
            .insert(path.to_string());
    }
}
