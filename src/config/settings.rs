//! Mock server settings
//!
//! Holds the values every mocked response is built from. Defaults match the
//! CLI flag defaults so a bare `mocknest` invocation is fully functional.

use serde::{Deserialize, Serialize};

/// Immutable mock server configuration
///
/// Built once from CLI flags in `main` and shared read-only with all
/// handlers for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// TCP port the server listens on
    pub port: u16,
    /// Status string reported by `/v1/status` (e.g. "up" or "down")
    pub server_status: String,
    /// User count reported by `/v1/usercount`
    pub user_count: i64,
    /// The one user id that `/v1/usercheck/{id}` recognizes
    pub check_username: String,
    /// Value returned when the recognized user id is checked
    pub check_response: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            server_status: "up".to_string(),
            user_count: 1000,
            check_username: "gigel".to_string(),
            check_response: "true".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let config = MockConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.server_status, "up");
        assert_eq!(config.user_count, 1000);
        assert_eq!(config.check_username, "gigel");
        assert_eq!(config.check_response, "true");
    }
}
