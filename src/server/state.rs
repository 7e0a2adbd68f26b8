use crate::server::recognition::fallback::FallbackCoordinator;
use crate::server::store::memory::MemStore;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    store: MemStore,
    recognizer: Arc<FallbackCoordinator>,
}

impl AppState {
    pub fn new(store: MemStore, recognizer: FallbackCoordinator) -> Self {
        Self {
            store,
            recognizer: Arc::new(recognizer),
        }
    }

    pub fn get_store(&self) -> &MemStore {
        &self.store
    }

    pub fn get_recognizer(&self) -> &FallbackCoordinator {
        &self.recognizer
    }
}
