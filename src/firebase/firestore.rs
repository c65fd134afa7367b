//! Cloud Firestore
//!
//! Document store backed by `firebase.firestore()`. Ids are assigned by Firestore.

use async_trait::async_trait;
use habits_core::{DocumentId, DocumentStore, Fields, StoreError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{js_error_message, store_error};

#[wasm_bindgen]
extern "C" {
    type Firestore;

    type CollectionReference;

    type DocumentReference;

    #[wasm_bindgen(js_namespace = firebase, js_name = firestore, catch)]
    fn firebase_firestore() -> Result<Firestore, JsValue>;

    #[wasm_bindgen(method)]
    fn collection(this: &Firestore, path: &str) -> CollectionReference;

    #[wasm_bindgen(method)]
    fn doc(this: &CollectionReference, path: &str) -> DocumentReference;

    #[wasm_bindgen(method, catch)]
    async fn add(this: &CollectionReference, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = delete)]
    async fn remove(this: &DocumentReference) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn id(this: &DocumentReference) -> String;
}

/// Default Firestore database of the page's Firebase app
#[derive(Debug, Clone, Copy, Default)]
pub struct FirestoreStore;

impl FirestoreStore {
    fn collection(&self, name: &str) -> Result<CollectionReference, StoreError> {
        firebase_firestore()
            .map(|db| db.collection(name))
            .map_err(|e| StoreError::Unavailable(js_error_message(&e)))
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreStore {
    async fn create_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError> {
        // Plain JS object, not a Map
        let data = fields
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let doc = self
            .collection(collection)?
            .add(data)
            .await
            .map_err(|e| store_error(&e, collection, None))?;
        let doc: DocumentReference = doc.unchecked_into();

        tracing::debug!(collection, id = %doc.id(), "Firestore document added");
        Ok(DocumentId::new(doc.id()))
    }

    async fn delete_document(&self, collection: &str, id: &DocumentId) -> Result<(), StoreError> {
        self.collection(collection)?
            .doc(id.as_str())
            .remove()
            .await
            .map_err(|e| store_error(&e, collection, Some(id)))?;

        tracing::debug!(collection, id = %id, "Firestore document deleted");
        Ok(())
    }
}
