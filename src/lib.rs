//! Mocknest - Configurable HTTP Mock Server
//!
//! A small HTTP server returning preconfigured, static responses so client
//! integrations can be tested without a real backend.
//!
//! ## Endpoints
//!
//! - `GET /v1/status` - server status (configured at startup)
//! - `GET /v1/usercheck/{id}` - whether the given user id "exists"
//! - `GET /v1/usercount` - configured user count
//!
//! All non-404 responses share a uniform JSON envelope (`code`, `id`,
//! `message`, `data`) and carry an `X-Request-Id` correlation header.
//!
//! ## Modules
//!
//! - [`config`] - Startup configuration (immutable for the process lifetime)
//! - [`api`] - Router, middleware chain, and handlers

pub mod api;
pub mod config;
