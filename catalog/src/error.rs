use database::{Collection, DatabaseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Malformed document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document {id} vanished from {collection}")]
    Vanished { collection: Collection, id: String },
}
