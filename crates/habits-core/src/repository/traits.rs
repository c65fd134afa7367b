//! Repository Layer - Core Traits
//!
//! The document database is an external service; this is the slice of it the
//! habit dialog uses. Futures are not `Send` because browser SDK calls resolve
//! JS promises on the page's event loop.

use async_trait::async_trait;

use crate::domain::{DocumentId, Fields};
use crate::error::StoreError;

/// Schemaless document store with server-assigned ids
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Add a document to `collection`, returning the id the store assigned
    async fn create_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError>;

    /// Remove a document. Used to undo a habit whose entry failed to write.
    async fn delete_document(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError>;
}
