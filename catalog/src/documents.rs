use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::CatalogError;

pub(crate) fn to_document<T: Serialize>(record: &T) -> Result<Value, CatalogError> {
    Ok(serde_json::to_value(record)?)
}

pub(crate) fn to_documents<T: Serialize>(records: &[T]) -> Result<Vec<Value>, CatalogError> {
    records.iter().map(to_document).collect()
}

pub(crate) fn from_document<T: DeserializeOwned>(document: Value) -> Result<T, CatalogError> {
    Ok(serde_json::from_value(document)?)
}

pub(crate) fn from_documents<T: DeserializeOwned>(
    documents: Vec<Value>,
) -> Result<Vec<T>, CatalogError> {
    documents.into_iter().map(from_document).collect()
}
