pub mod memory_store;
pub mod sqlite_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
pub use traits::DocumentStore;

use serde_json::Value;

use crate::DatabaseError;

/// Every stored document is a JSON object carrying a string `id`.
pub(crate) fn document_id(document: &Value) -> Result<&str, DatabaseError> {
    document
        .as_object()
        .and_then(|object| object.get("id"))
        .and_then(Value::as_str)
        .ok_or(DatabaseError::MissingId)
}
