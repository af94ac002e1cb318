//! Mock endpoint handlers
//!
//! Each handler builds its response from the startup configuration alone.
//! The user-check result in particular is a pure function of the requested
//! id and the configuration, so concurrent requests can never observe each
//! other's results.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::envelope::{Envelope, MOCK_RESPONSE_ID, STATUS_RESPONSE_ID};
use super::state::ApiState;
use crate::config::MockConfig;

/// Placeholder reported as `ProcessId`, not the real OS process id
const PLACEHOLDER_PROCESS_ID: u32 = 1234;

/// Payload of `/v1/status` responses
///
/// Field names are part of the wire contract and deliberately PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusData {
    #[serde(rename = "ServerStatus")]
    pub server_status: String,
    #[serde(rename = "ProcessId")]
    pub process_id: u32,
}

/// `GET /v1/status`
///
/// Always 200 with the configured status string and the placeholder
/// process id.
pub async fn status_handler(State(state): State<ApiState>) -> Json<Envelope<StatusData>> {
    Json(Envelope::success(
        STATUS_RESPONSE_ID,
        StatusData {
            server_status: state.config().server_status.clone(),
            process_id: PLACEHOLDER_PROCESS_ID,
        },
    ))
}

/// Evaluate a user-check request
///
/// Returns the configured response value for the one recognized username and
/// the literal "false" for everything else.
fn check_user(isid: &str, config: &MockConfig) -> String {
    if isid == config.check_username {
        config.check_response.clone()
    } else {
        "false".to_string()
    }
}

/// `GET /v1/usercheck/{*isid}`
///
/// 200 with the check result for a nonempty id. An empty id gets a bare 404
/// with an empty body instead of the envelope, matching the contract clients
/// already depend on.
pub async fn usercheck_handler(
    State(state): State<ApiState>,
    Path(isid): Path<String>,
) -> Response {
    if isid.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }

    Json(Envelope::success(
        MOCK_RESPONSE_ID,
        check_user(&isid, state.config()),
    ))
    .into_response()
}

/// `GET /v1/usercheck/` - no id given
pub async fn usercheck_missing_id() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// `GET /v1/usercount`
///
/// Always 200 with the configured count as a JSON integer.
pub async fn usercount_handler(State(state): State<ApiState>) -> Json<Envelope<i64>> {
    Json(Envelope::success(
        MOCK_RESPONSE_ID,
        state.config().user_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MockConfig {
        MockConfig {
            check_username: "gigel".to_string(),
            check_response: "true".to_string(),
            ..MockConfig::default()
        }
    }

    #[test]
    fn known_user_returns_configured_response() {
        assert_eq!(check_user("gigel", &test_config()), "true");
    }

    #[test]
    fn unknown_user_returns_false_literal() {
        assert_eq!(check_user("bob", &test_config()), "false");
    }

    #[test]
    fn check_is_case_sensitive() {
        assert_eq!(check_user("Gigel", &test_config()), "false");
    }

    #[test]
    fn repeated_checks_are_idempotent() {
        let config = test_config();
        let first = check_user("bob", &config);
        let second = check_user("bob", &config);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn status_reports_configured_value() {
        let state = ApiState::new(MockConfig {
            server_status: "down".to_string(),
            ..MockConfig::default()
        });

        let Json(envelope) = status_handler(State(state)).await;
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.id, STATUS_RESPONSE_ID);
        assert_eq!(envelope.message, "Success");
        assert_eq!(envelope.data.server_status, "down");
        assert_eq!(envelope.data.process_id, 1234);
    }

    #[tokio::test]
    async fn usercount_reports_configured_value() {
        let state = ApiState::new(MockConfig {
            user_count: 42,
            ..MockConfig::default()
        });

        let Json(envelope) = usercount_handler(State(state)).await;
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.id, MOCK_RESPONSE_ID);
        assert_eq!(envelope.data, 42);
    }
}
