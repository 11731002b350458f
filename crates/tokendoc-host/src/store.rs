//! The shared token store.
//!
//! The host keeps the serialized token list as a document-level annotation
//! under a fixed namespace/key pair. The payload is JSON with the token
//! array nested under a `beta` property.

use serde::Deserialize;
use tokendoc_core::{names, StoreError, Token};
use tokendoc_tree::DocumentTree;

#[derive(Debug, Deserialize)]
struct StoredPayload {
    beta: Vec<Token>,
}

/// Read the token list from the document's shared store.
pub fn read_stored_tokens(tree: &DocumentTree) -> Result<Vec<Token>, StoreError> {
    let raw = tree
        .document_annotation(names::ANNOTATION_NAMESPACE, names::STORE_KEY_VALUES)
        .ok_or_else(|| StoreError::MissingEntry {
            namespace: names::ANNOTATION_NAMESPACE.to_string(),
            key: names::STORE_KEY_VALUES.to_string(),
        })?;

    let payload: StoredPayload = serde_json::from_str(raw)?;
    Ok(payload.beta)
}
