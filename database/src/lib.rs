pub mod config;
pub mod error;
pub mod models;
pub mod retry;
pub mod stores;

pub use config::DatabaseConfig;
pub use error::DatabaseError;
pub use models::{Collection, Condition, Filter, FindOptions, Sort};
pub use retry::retry_with_backoff;
pub use stores::{DocumentStore, MemoryStore, SqliteStore};
