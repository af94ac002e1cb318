//! Startup configuration
//!
//! All mock responses are driven by scalar values fixed at process start.
//! The configuration is immutable for the process lifetime: handlers receive
//! it behind an `Arc` and only ever read it.

mod settings;

pub use settings::MockConfig;
