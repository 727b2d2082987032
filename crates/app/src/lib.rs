//! # garden-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement:
//!   - `DocumentStore` — insert and query JSON documents per entity kind
//! - Define **driving/inbound** use-case services:
//!   - `RecordService` — validate then create, list with an optional filter
//!   - `DiagnosticsService` — connectivity report for operators
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `garden-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
