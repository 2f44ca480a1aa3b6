//! Application state for the HTTP server.

use std::sync::Arc;

use slotbook_engine::Scheduler;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide schedule. Its internal lock serializes mutations.
    pub scheduler: Arc<Scheduler>,
}

impl AppState {
    pub fn new(scheduler: Arc<Scheduler>) -> Self {
        Self { scheduler }
    }
}
