//! # garden-adapter-storage-sqlite-sqlx
//!
//! `SQLite` document store using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `garden-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain documents and database rows
//!
//! ## Dependency rule
//! Depends on `garden-app` (for port traits) and `garden-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod document_store;
pub mod error;
pub mod pool;

pub use document_store::SqliteDocumentStore;
pub use error::StorageError;
pub use pool::{Config, Database};
