//! Inbound UI messages.

use serde::{Deserialize, Serialize};
use tokendoc_core::SectionDescriptor;

/// A message from the host UI channel.
///
/// One event is in scope: `create-docs`, carrying the ordered section
/// descriptors for a documentation build. The token list itself is not in
/// the message; it is read from the shared store (see
/// [`read_stored_tokens`](crate::read_stored_tokens)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    CreateDocs { sections: Vec<SectionDescriptor> },
}
