use async_trait::async_trait;
use serde_json::Value;

use crate::models::{Collection, Filter, FindOptions};
use crate::DatabaseError;

/// A collection-oriented document store.
///
/// Implementations own all cross-caller consistency: `atomic_increment` must
/// be a single read-modify-write inside the store, and `insert_if_absent`
/// must decide the winner of concurrent inserts of the same id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First matching document in insertion order.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, DatabaseError>;

    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>, DatabaseError>;

    /// Fails with [`DatabaseError::DuplicateId`] if the id is taken.
    async fn insert_one(&self, collection: Collection, document: &Value)
        -> Result<(), DatabaseError>;

    /// Inserts all documents or none of them.
    async fn insert_many(
        &self,
        collection: Collection,
        documents: &[Value],
    ) -> Result<(), DatabaseError>;

    /// Inserts every group into its collection in one unit: either all
    /// documents land or none do. A taken id fails the whole batch with
    /// [`DatabaseError::DuplicateId`] naming the offending collection.
    async fn insert_batch(&self, batch: &[(Collection, Vec<Value>)])
        -> Result<(), DatabaseError>;

    /// Returns `false` without writing when the id is already present.
    async fn insert_if_absent(
        &self,
        collection: Collection,
        document: &Value,
    ) -> Result<bool, DatabaseError>;

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, DatabaseError>;

    /// Adds `delta` to `field` of the first matching document. Returns the
    /// number of documents matched, 0 or 1.
    async fn atomic_increment(
        &self,
        collection: Collection,
        filter: &Filter,
        field: &str,
        delta: i64,
    ) -> Result<u64, DatabaseError>;
}
