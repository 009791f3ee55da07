//! Application State

use std::sync::Arc;

use atrium_core::{Carousel, DirectoryEntry, HistoryEntry, MemoryStore, NavLayout, Registry};

/// Shared handles to the in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub forms: Arc<MemoryStore>,
    pub layouts: Arc<Registry<NavLayout>>,
    pub carousels: Arc<Registry<Carousel>>,
    pub history: Arc<Registry<HistoryEntry>>,
    pub directory: Arc<Registry<DirectoryEntry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            forms: Arc::new(MemoryStore::new()),
            layouts: Arc::new(Registry::new()),
            carousels: Arc::new(Registry::new()),
            history: Arc::new(Registry::new()),
            directory: Arc::new(Registry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
