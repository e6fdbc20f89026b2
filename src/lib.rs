mod domain;
mod interfaces;

pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod pages;
pub mod settings;

pub use domain::{entities, snapshot};
pub use interfaces::{handlers, repositories, routes};

use repositories::memory::MemoryStore;

/// Shared state behind every handler. The store starts out seeded with the
/// bundled portfolio content so a fresh server serves real data immediately.
pub struct AppState {
    pub store: MemoryStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: MemoryStore::seeded(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
