//! Application state for the Travel Claim Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateSchedule};

/// Shared application state.
///
/// Holds the loaded rate schedule, shared read-only across all handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the rate schedule applied to every request.
    pub fn schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }
}
