use super::{document_id, DocumentStore};
use crate::models::{compare_values, validate_field, Collection, Filter, FindOptions};
use crate::DatabaseError;
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Process-local store. Every operation runs under one lock, which makes
/// each call atomic with respect to the others.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_id(documents: &[Value], id: &str) -> bool {
    documents
        .iter()
        .any(|d| d.get("id").and_then(Value::as_str) == Some(id))
}

/// `current + delta` with SQLite's arithmetic: missing or null counts as 0,
/// booleans as 0/1, reals stay real, and integer overflow falls back to a
/// real. Text is read by its numeric value, anything else as 0.
fn incremented(current: Option<&Value>, delta: i64) -> Value {
    let real = |base: f64| Value::from(base + delta as f64);
    let integer = |base: i64| match base.checked_add(delta) {
        Some(sum) => Value::from(sum),
        None => real(base as f64),
    };
    match current {
        Some(Value::Bool(b)) => integer(i64::from(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => integer(i),
            None => real(n.as_f64().unwrap_or(0.0)),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            match (s.parse::<i64>(), s.parse::<f64>()) {
                (Ok(i), _) => integer(i),
                (_, Ok(f)) => real(f),
                _ => integer(0),
            }
        }
        _ => integer(0),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Value>, DatabaseError> {
        filter.validate()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>, DatabaseError> {
        filter.validate()?;
        let mut found: Vec<Value> = {
            let collections = self.collections.lock().await;
            collections
                .get(&collection)
                .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
                .unwrap_or_default()
        };

        if let Some(sort) = &options.sort {
            validate_field(&sort.field)?;
            // stable, so ties keep insertion order
            found.sort_by(|a, b| {
                let ordering = compare_values(
                    a.get(&sort.field).unwrap_or(&Value::Null),
                    b.get(&sort.field).unwrap_or(&Value::Null),
                )
                .unwrap_or(Ordering::Equal);
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        if let Some(limit) = options.limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: &Value,
    ) -> Result<(), DatabaseError> {
        let id = document_id(document)?;
        let mut collections = self.collections.lock().await;
        let documents = collections.entry(collection).or_default();
        if contains_id(documents, id) {
            return Err(DatabaseError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        documents.push(document.clone());
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: &[Value],
    ) -> Result<(), DatabaseError> {
        let mut collections = self.collections.lock().await;
        let existing = collections.entry(collection).or_default();

        let mut batch: Vec<Value> = Vec::with_capacity(documents.len());
        for document in documents {
            let id = document_id(document)?;
            if contains_id(existing, id) || contains_id(&batch, id) {
                return Err(DatabaseError::DuplicateId {
                    collection: collection.to_string(),
                    id: id.to_string(),
                });
            }
            batch.push(document.clone());
        }
        existing.extend(batch);
        Ok(())
    }

    async fn insert_batch(
        &self,
        batch: &[(Collection, Vec<Value>)],
    ) -> Result<(), DatabaseError> {
        let mut collections = self.collections.lock().await;

        let mut staged: Vec<(Collection, &Value)> = Vec::new();
        for (collection, documents) in batch {
            for document in documents {
                let id = document_id(document)?;
                let taken = collections
                    .get(collection)
                    .is_some_and(|existing| contains_id(existing, id))
                    || staged.iter().any(|(c, d)| {
                        c == collection && d.get("id").and_then(Value::as_str) == Some(id)
                    });
                if taken {
                    return Err(DatabaseError::DuplicateId {
                        collection: collection.to_string(),
                        id: id.to_string(),
                    });
                }
                staged.push((*collection, document));
            }
        }

        for (collection, document) in staged {
            collections
                .entry(collection)
                .or_default()
                .push(document.clone());
        }
        Ok(())
    }

    async fn insert_if_absent(
        &self,
        collection: Collection,
        document: &Value,
    ) -> Result<bool, DatabaseError> {
        let id = document_id(document)?;
        let mut collections = self.collections.lock().await;
        let documents = collections.entry(collection).or_default();
        if contains_id(documents, id) {
            return Ok(false);
        }
        documents.push(document.clone());
        Ok(true)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, DatabaseError> {
        filter.validate()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count() as u64)
            .unwrap_or(0))
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
        let mut collections = self.collections.lock().await;
        let target = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| filter.matches(d)))
            .and_then(Value::as_object_mut);

        match target {
            Some(object) => {
                let next = incremented(object.get(field), delta);
                object.insert(field.to_string(), next);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
