//! # garden-domain
//!
//! Pure domain model for the garden services API.
//!
//! ## Responsibilities
//! - Foundational types: record identifiers, error conventions
//! - Enumerate the **entity kinds** and the collection each is stored in
//! - Define the four record schemas: **Provider**, **Service**,
//!   **`ServiceRequest`**, **Review**
//! - Validate raw payloads field by field, applying defaults
//! - Define **documents** (stored record + id) and list **filters**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod kind;
pub mod validation;

pub mod document;
pub mod provider;
pub mod record;
pub mod review;
pub mod service;
pub mod service_request;
