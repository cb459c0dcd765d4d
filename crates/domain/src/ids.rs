//! Opaque entity identifiers.
//!
//! Entity ids are assigned by the document store on insert and are opaque
//! 24-character lowercase hex tokens (the store's ObjectId wire format).
//! Parsing is the only way to construct an id from request input, so a
//! syntactically invalid id is rejected before any storage call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the hex representation of a document-store ObjectId.
const ID_HEX_LEN: usize = 24;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    #[error("invalid id: expected {ID_HEX_LEN} hex characters")]
    Malformed,
}

/// Validated, immutable entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Parse an identifier from request input.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdError::Malformed);
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Wrap a store-generated hex token without re-validation.
    ///
    /// Only storage adapters should call this, with tokens the store itself
    /// produced.
    pub fn from_store(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
