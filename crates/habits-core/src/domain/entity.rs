//! Domain Layer - Identifiers and Stored Documents
//!
//! Every record lives in a document store collection under a server-assigned id.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Raw document body as the store sees it
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Identifier of the signed-in user, as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier assigned by the document store on create
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record that can be written to and read back from the document store
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Convert into the store's field map
    fn to_fields(&self) -> Result<Fields, StoreError> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::Serialization(format!(
                "expected an object, got {}",
                other
            ))),
            Err(e) => Err(StoreError::Serialization(e.to_string())),
        }
    }

    /// Parse a field map read from the store
    fn from_fields(fields: Fields) -> Result<Self, StoreError> {
        serde_json::from_value(serde_json::Value::Object(fields))
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

/// A record together with the id the store assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub id: DocumentId,
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(id: DocumentId, data: T) -> Self {
        Self { id, data }
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
