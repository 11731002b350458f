//! Error types for the tokendoc engine.
//!
//! Two tiers exist: fatal errors below, which abort a whole documentation
//! build, and per-slot warnings, which are collected alongside the build
//! result (see `tokendoc-build`).

use thiserror::Error;

/// Top-level error type for a documentation build.
#[derive(Debug, Error)]
pub enum DocError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors while resolving required document structure.
///
/// These are run-aborting preconditions, never per-token failures.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("can not find {name} page")]
    MissingPage { name: String },

    #[error("can not find {name} template")]
    MissingTemplate { name: String },
}

/// Errors while reading the shared token store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no stored token data under {namespace}/{key}")]
    MissingEntry { namespace: String, key: String },

    #[error("malformed token payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
