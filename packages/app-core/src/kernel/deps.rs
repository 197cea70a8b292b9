// AppDeps - dependency container for the application core
//
// Holds trait objects so tests can swap in the in-memory store and the
// recording account service mock.

use std::sync::Arc;

use docstore::DocumentStore;

use super::BaseAccountService;

#[derive(Clone)]
pub struct AppDeps {
    pub store: Arc<dyn DocumentStore>,
    pub accounts: Arc<dyn BaseAccountService>,
}

impl AppDeps {
    pub fn new(store: Arc<dyn DocumentStore>, accounts: Arc<dyn BaseAccountService>) -> Self {
        Self { store, accounts }
    }
}
