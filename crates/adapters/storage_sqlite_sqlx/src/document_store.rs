//! `SQLite` implementation of [`DocumentStore`].
//!
//! All collections share the `documents` table; the `collection` column holds
//! [`EntityKind::collection`] and `body` the record as a JSON object.

use std::future::Future;
use std::str::FromStr;

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use garden_app::ports::DocumentStore;
use garden_domain::document::{Document, Filter};
use garden_domain::error::GardenError;
use garden_domain::id::RecordId;
use garden_domain::kind::EntityKind;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Document`].
struct Wrapper(Document);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let body: String = row.try_get("body")?;

        let id = RecordId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let fields: Map<String, Value> =
            serde_json::from_str(&body).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Document::new(id, fields)))
    }
}

const INSERT: &str = "INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_COLLECTION: &str =
    "SELECT id, body FROM documents WHERE collection = ? ORDER BY rowid";
const SELECT_BY_FIELD: &str = "SELECT id, body FROM documents WHERE collection = ? AND json_extract(body, ?) = ? ORDER BY rowid";
const SELECT_COLLECTIONS: &str = "SELECT DISTINCT collection FROM documents ORDER BY collection";

/// JSON path selecting the top-level `field` of a body.
fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', ""))
}

/// `SQLite`-backed document store.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn insert(
        &self,
        kind: EntityKind,
        fields: Map<String, Value>,
    ) -> impl Future<Output = Result<RecordId, GardenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = RecordId::new();
            let body = serde_json::to_string(&fields).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(id.to_string())
                .bind(kind.collection())
                .bind(body)
                .bind(chrono::Utc::now().to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(id)
        }
    }

    fn find(
        &self,
        kind: EntityKind,
        filter: Option<&Filter>,
    ) -> impl Future<Output = Result<Vec<Document>, GardenError>> + Send {
        let pool = self.pool.clone();
        let filter = filter.map(|f| (json_path(&f.field), f.value.clone()));
        async move {
            let query = match filter {
                Some((path, value)) => sqlx::query_as(SELECT_BY_FIELD)
                    .bind(kind.collection())
                    .bind(path)
                    .bind(value),
                None => sqlx::query_as(SELECT_BY_COLLECTION).bind(kind.collection()),
            };
            let rows: Vec<Wrapper> = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn collection_names(&self) -> impl Future<Output = Result<Vec<String>, GardenError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<(String,)> = sqlx::query_as(SELECT_COLLECTIONS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|(name,)| name).collect())
        }
    }
}
