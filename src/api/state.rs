//! Application state for the rating API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RatingConfig};

/// Shared application state.
///
/// Holds the loaded rating configuration shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rating configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the rating configuration.
    pub fn config(&self) -> &RatingConfig {
        self.config.config()
    }

    /// Returns a shared handle to the configuration loader.
    pub(crate) fn shared_config(&self) -> Arc<ConfigLoader> {
        Arc::clone(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_config() {
        let state = AppState::new(ConfigLoader::default());
        assert_eq!(state.config().result_sheet, "results");
    }
}
