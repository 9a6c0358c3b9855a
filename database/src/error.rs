use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Invalid field name: {0}")]
    InvalidField(String),

    #[error("Unsupported filter value: {0}")]
    UnsupportedValue(String),

    #[error("Document has no string id")]
    MissingId,

    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: String, id: String },
}
