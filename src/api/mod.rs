//! Mock HTTP API
//!
//! Router, middleware chain, and handlers for the three mock endpoints.
//!
//! ## Endpoints
//!
//! - `GET /v1/status` - configured server status plus a placeholder process id
//! - `GET /v1/usercheck/{id}` - check result for the given user id
//! - `GET /v1/usercount` - configured user count
//!
//! ## Request flow
//!
//! Inbound request -> request-id middleware (assigns or propagates
//! `X-Request-Id`) -> logging middleware (one line per request, emitted after
//! the handler completes) -> router -> handler -> JSON envelope.

mod envelope;
mod handlers;
mod middleware;
mod server;
mod state;

pub use envelope::{Envelope, MOCK_RESPONSE_ID, STATUS_RESPONSE_ID};
pub use middleware::{REQUEST_ID_HEADER, RequestId};
pub use server::{ServerError, create_router, start_api_server};
pub use state::ApiState;
