//! Response envelope
//!
//! Every non-404 response shares one JSON shape:
//!
//! ```json
//! {"code": 200, "id": "...", "message": "Success", "data": <variant>}
//! ```
//!
//! `data` is polymorphic per endpoint (mapping, string, or integer), so the
//! envelope is generic over its payload. The `id` field is a fixed literal
//! per endpoint, not a per-response identifier.

use serde::{Deserialize, Serialize};

/// Fixed envelope id used by status responses
pub const STATUS_RESPONSE_ID: &str = "f21609a2-643a-4dc4-9c30-7e63c08d8283";

/// Fixed envelope id used by usercheck and usercount responses
pub const MOCK_RESPONSE_ID: &str = "mock-62a1dee8-1acf-429d-91c0-eefa95b62371";

/// Uniform JSON wrapper for mock responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Mirrors the HTTP status code of the response
    pub code: u16,
    /// Fixed per-endpoint identifier
    pub id: String,
    /// Human-readable outcome, always "Success" on the 200 paths
    pub message: String,
    /// Endpoint-specific payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Build a 200 "Success" envelope around `data`
    pub fn success(id: &str, data: T) -> Self {
        Self {
            code: 200,
            id: id.to_string(),
            message: "Success".to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_fixed_field_names() {
        let envelope = Envelope::success(MOCK_RESPONSE_ID, "false");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["code"], 200);
        assert_eq!(value["id"], MOCK_RESPONSE_ID);
        assert_eq!(value["message"], "Success");
        assert_eq!(value["data"], "false");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn integer_payload_stays_an_integer() {
        let envelope = Envelope::success(MOCK_RESPONSE_ID, 1000i64);
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"data\":1000"));
        assert!(!json.contains("\"data\":\"1000\""));
    }
}
