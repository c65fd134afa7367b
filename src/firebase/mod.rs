//! Firebase Bindings
//!
//! Frontend bindings to the Firebase compat SDK that `index.html` loads into
//! `window.firebase`, organized by service.

mod auth;
mod firestore;

use habits_core::{DocumentId, StoreError};
use wasm_bindgen::prelude::*;

pub use auth::FirebaseIdentity;
pub use firestore::FirestoreStore;

/// Human-readable message of a thrown JS value
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Map a rejected Firestore promise to a store error using the SDK's error `code`
pub(crate) fn store_error(err: &JsValue, collection: &str, id: Option<&DocumentId>) -> StoreError {
    let code = js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_string())
        .unwrap_or_default();
    let message = js_error_message(err);

    match code.as_str() {
        "permission-denied" | "unauthenticated" | "resource-exhausted" | "invalid-argument"
        | "failed-precondition" => StoreError::Rejected(format!("{}: {}", code, message)),
        "not-found" => match id {
            Some(id) => StoreError::NotFound {
                collection: collection.to_string(),
                id: id.clone(),
            },
            None => StoreError::Rejected(format!("{}: {}", code, message)),
        },
        "" => StoreError::Unavailable(message),
        _ => StoreError::Unavailable(format!("{}: {}", code, message)),
    }
}
