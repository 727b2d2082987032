//! # garden-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** (`/providers`, `/services`, `/requests`,
//!   `/reviews`) plus the liveness (`/`) and diagnostics (`/test`) endpoints
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Accept cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `garden-app` (for port traits and services) and `garden-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
