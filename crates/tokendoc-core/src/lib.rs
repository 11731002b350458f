//! Core types and utilities for the tokendoc engine.
//!
//! This crate provides the foundational pieces used across all other
//! tokendoc crates:
//! - The token data model (`Token`, `RawValue`, `SectionDescriptor`)
//! - Alias-reference detection over raw token values
//! - Error types
//! - Well-known layer and annotation names

pub mod alias;
pub mod errors;
pub mod names;
pub mod token;

pub use alias::contains_alias;
pub use errors::{DocError, ResolveError, StoreError};
pub use token::{RawValue, SectionDescriptor, Token};
