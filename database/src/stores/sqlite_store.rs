use super::{document_id, DocumentStore};
use crate::models::{validate_field, Collection, Condition, Filter, FindOptions};
use crate::{DatabaseConfig, DatabaseError};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::error::DatabaseError as _;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

/// Document store over a single SQLite table. Each document is kept as JSON
/// text and queried with SQLite's JSON functions.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the configured database and brings its schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = config.create_pool().await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;
        tracing::debug!("Document store migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn insert_parts(document: &Value) -> Result<(String, String), DatabaseError> {
        let id = document_id(document)?.to_string();
        let body = serde_json::to_string(document).map_err(DatabaseError::Serialization)?;
        Ok((id, body))
    }

    fn map_insert_error(collection: Collection, id: &str, error: sqlx::Error) -> DatabaseError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => DatabaseError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            },
            _ => DatabaseError::Query(error.to_string()),
        }
    }
}

fn json_path(field: &str) -> String {
    format!("$.{field}")
}

/// `json_type` names matching a filter value's kind. Guarding on them keeps
/// SQLite from equating `true` with `1` or a string with an array's text.
fn json_kinds(value: &Value) -> &'static str {
    match value {
        Value::Null => "('null')",
        Value::Bool(_) => "('true', 'false')",
        Value::Number(_) => "('integer', 'real')",
        Value::String(_) => "('text')",
        Value::Array(_) => "('array')",
        Value::Object(_) => "('object')",
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: &Value) {
    match value {
        Value::Null => {
            builder.push("NULL");
        }
        Value::Bool(b) => {
            builder.push_bind(*b);
        }
        Value::Number(n) => match n.as_i64() {
            Some(i) => {
                builder.push_bind(i);
            }
            None => {
                builder.push_bind(n.as_f64().unwrap_or(f64::NAN));
            }
        },
        Value::String(s) => {
            builder.push_bind(s.clone());
        }
        // json_extract renders arrays and objects as minified JSON text
        Value::Array(_) | Value::Object(_) => {
            builder.push("json(").push_bind(value.to_string()).push(")");
        }
    }
}

fn push_extract(builder: &mut QueryBuilder<'_, Sqlite>, field: &str) {
    builder
        .push("json_extract(body, ")
        .push_bind(json_path(field))
        .push(")");
}

fn push_kind_guard(builder: &mut QueryBuilder<'_, Sqlite>, field: &str, value: &Value) {
    builder
        .push(" AND json_type(body, ")
        .push_bind(json_path(field))
        .push(") IN ")
        .push(json_kinds(value));
}

fn push_where(builder: &mut QueryBuilder<'_, Sqlite>, collection: Collection, filter: &Filter) {
    builder
        .push(" WHERE collection = ")
        .push_bind(collection.name().to_string());
    for condition in filter.conditions() {
        let field = condition.field();
        match condition {
            Condition::Eq(_, Value::String(id)) if field == "id" => {
                builder.push(" AND id = ").push_bind(id.clone());
            }
            Condition::Eq(_, Value::Null) | Condition::Between(_, Value::Null, Value::Null) => {
                builder.push(" AND ");
                push_extract(builder, field);
                builder.push(" IS NULL");
            }
            Condition::Eq(_, value) => {
                push_kind_guard(builder, field, value);
                builder.push(" AND ");
                push_extract(builder, field);
                builder.push(" = ");
                push_value(builder, value);
            }
            Condition::Between(_, low, high)
                if low.is_null()
                    || std::mem::discriminant(low) != std::mem::discriminant(high) =>
            {
                // bounds of different kinds admit nothing
                builder.push(" AND 0");
            }
            Condition::Between(_, low, high) => {
                push_kind_guard(builder, field, low);
                builder.push(" AND ");
                push_extract(builder, field);
                builder.push(" BETWEEN ");
                push_value(builder, low);
                builder.push(" AND ");
                push_value(builder, high);
            }
        }
    }
}

fn parse_body(row: &sqlx::sqlite::SqliteRow) -> Result<Value, DatabaseError> {
    let body: String = row
        .try_get("body")
        .map_err(|e| DatabaseError::Query(e.to_string()))?;
    serde_json::from_str(&body).map_err(DatabaseError::Serialization)
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, DatabaseError> {
        filter.validate()?;
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT body FROM documents");
        push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY seq LIMIT 1");

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        row.as_ref().map(parse_body).transpose()
    }

    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>, DatabaseError> {
        filter.validate()?;
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT body FROM documents");
        push_where(&mut builder, collection, filter);

        builder.push(" ORDER BY ");
        if let Some(sort) = &options.sort {
            validate_field(&sort.field)?;
            builder
                .push("json_extract(body, ")
                .push_bind(json_path(&sort.field))
                .push(if sort.descending { ") DESC, " } else { ") ASC, " });
        }
        builder.push("seq ASC");

        if let Some(limit) = options.limit {
            builder.push(" LIMIT ").push_bind(limit as i64);
        }

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        rows.iter().map(parse_body).collect()
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: &Value,
    ) -> Result<(), DatabaseError> {
        let (id, body) = Self::insert_parts(document)?;
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)")
            .bind(collection.name())
            .bind(&id)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_insert_error(collection, &id, e))?;
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: &[Value],
    ) -> Result<(), DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;

        for document in documents {
            let (id, body) = Self::insert_parts(document)?;
            sqlx::query("INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)")
                .bind(collection.name())
                .bind(&id)
                .bind(body)
                .execute(&mut *tx)
                .await
                .map_err(|e| Self::map_insert_error(collection, &id, e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;
        Ok(())
    }

    async fn insert_batch(
        &self,
        batch: &[(Collection, Vec<Value>)],
    ) -> Result<(), DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;

        // any early return drops the transaction, which rolls it back
        for (collection, documents) in batch {
            for document in documents {
                let (id, body) = Self::insert_parts(document)?;
                sqlx::query("INSERT INTO documents (collection, id, body) VALUES (?, ?, ?)")
                    .bind(collection.name())
                    .bind(&id)
                    .bind(body)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| Self::map_insert_error(*collection, &id, e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::Transaction(e.to_string()))?;
        tracing::debug!("Committed batch across {} collections", batch.len());
        Ok(())
    }

    async fn insert_if_absent(
        &self,
        collection: Collection,
        document: &Value,
    ) -> Result<bool, DatabaseError> {
        let (id, body) = Self::insert_parts(document)?;
        let result =
            sqlx::query("INSERT OR IGNORE INTO documents (collection, id, body) VALUES (?, ?, ?)")
                .bind(collection.name())
                .bind(id)
                .bind(body)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::Query(e.to_string()))?;
        Ok(result.rows_affected() == 1)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, DatabaseError> {
        filter.validate()?;
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) AS total FROM documents");
        push_where(&mut builder, collection, filter);

        let row = builder
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;
        let total: i64 = row
            .try_get("total")
            .map_err(|e| DatabaseError::Query(e.to_string()))?;
        Ok(total as u64)
    }

    async fn atomic_increment(
        &self,
        collection: Collection,
        filter: &Filter,
        field: &str,
        delta: i64,
    ) -> Result<u64, DatabaseError> {
        filter.validate()?;
        validate_field(field)?;

        // One UPDATE statement: SQLite serialises writers, so concurrent
        // increments cannot interleave between the read and the write.
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE documents SET body = json_set(body, ");
        builder
            .push_bind(json_path(field))
            .push(", COALESCE(json_extract(body, ")
            .push_bind(json_path(field))
            .push("), 0) + ")
            .push_bind(delta)
            .push(") WHERE seq = (SELECT seq FROM documents");
        push_where(&mut builder, collection, filter);
        builder.push(" ORDER BY seq LIMIT 1)");

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
