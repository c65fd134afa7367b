//! In-Memory Document Store
//!
//! Backs the `memory` backend and the tests. Failures can be injected per
//! collection to exercise the error paths of habit creation.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;

use super::traits::DocumentStore;
use crate::domain::{DocumentId, Fields, Record};
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<String, BTreeMap<DocumentId, Fields>>>,
    next_id: Cell<u64>,
    failing_creates: RefCell<HashMap<String, StoreError>>,
    failing_deletes: RefCell<Option<StoreError>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every create in `collection` fail with `error`
    pub fn fail_creates_in(&self, collection: &str, error: StoreError) {
        self.failing_creates.borrow_mut().insert(collection.to_string(), error);
    }

    /// Make every delete fail with `error`
    pub fn fail_deletes(&self, error: StoreError) {
        *self.failing_deletes.borrow_mut() = Some(error);
    }

    /// Clear all injected failures
    pub fn heal(&self) {
        self.failing_creates.borrow_mut().clear();
        *self.failing_deletes.borrow_mut() = None;
    }

    /// Number of documents currently in `collection`
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .borrow()
            .get(collection)
            .map_or(0, |docs| docs.len())
    }

    /// Successful create calls so far, across all collections
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn get(&self, collection: &str, id: &DocumentId) -> Option<Fields> {
        self.collections
            .borrow()
            .get(collection)
            .and_then(|docs| docs.get(id).cloned())
    }

    /// All documents of `collection` decoded as `T`, ordered by id
    pub fn list<T: Record>(&self, collection: &str) -> Result<Vec<(DocumentId, T)>, StoreError> {
        let collections = self.collections.borrow();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        docs.iter()
            .map(|(id, fields)| T::from_fields(fields.clone()).map(|record| (id.clone(), record)))
            .collect()
    }

    fn assign_id(&self) -> DocumentId {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        DocumentId::new(format!("doc-{:06}", n))
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError> {
        if let Some(err) = self.failing_creates.borrow().get(collection) {
            return Err(err.clone());
        }

        let id = self.assign_id();
        self.collections
            .borrow_mut()
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        self.writes.set(self.writes.get() + 1);
        tracing::debug!(collection, id = %id, "memory store: document created");
        Ok(id)
    }

    async fn delete_document(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError> {
        if let Some(err) = self.failing_deletes.borrow().as_ref() {
            return Err(err.clone());
        }

        let removed = self
            .collections
            .borrow_mut()
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));
        match removed {
            Some(_) => {
                tracing::debug!(collection, id = %id, "memory store: document deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.clone(),
            }),
        }
    }
}
