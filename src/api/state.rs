//! API state
//!
//! Shared state for the mock API. Unlike a real backend there is nothing
//! mutable here: the state is the startup configuration behind an `Arc`,
//! cloned cheaply into every handler via axum's `State` extractor.

use std::sync::Arc;

use crate::config::MockConfig;

/// Shared API state
#[derive(Debug, Clone)]
pub struct ApiState {
    config: Arc<MockConfig>,
}

impl ApiState {
    /// Create API state from startup configuration
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Read access to the startup configuration
    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_config() {
        let state = ApiState::new(MockConfig {
            server_status: "down".to_string(),
            ..MockConfig::default()
        });
        let clone = state.clone();
        assert_eq!(clone.config().server_status, "down");
        assert!(Arc::ptr_eq(&state.config, &clone.config));
    }
}
