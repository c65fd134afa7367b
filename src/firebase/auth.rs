//! Firebase Auth
//!
//! Identity provider backed by `firebase.auth().currentUser`.

use habits_core::{IdentityProvider, UserId};
use wasm_bindgen::prelude::*;

use super::js_error_message;

#[wasm_bindgen]
extern "C" {
    type Auth;

    type User;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth, catch)]
    fn firebase_auth() -> Result<Auth, JsValue>;

    #[wasm_bindgen(method, getter, js_name = currentUser)]
    fn current_user(this: &Auth) -> Option<User>;

    #[wasm_bindgen(method, getter)]
    fn uid(this: &User) -> String;
}

/// Signed-in user of the default Firebase app
#[derive(Debug, Clone, Copy, Default)]
pub struct FirebaseIdentity;

impl IdentityProvider for FirebaseIdentity {
    fn current_user(&self) -> Option<UserId> {
        match firebase_auth() {
            Ok(auth) => auth.current_user().map(|user| UserId::new(user.uid())),
            Err(e) => {
                tracing::warn!(error = %js_error_message(&e), "Firebase auth is not available");
                None
            }
        }
    }
}
