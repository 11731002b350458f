//! Host boundary for the tokendoc engine.
//!
//! Wires one inbound UI event to one documentation build: parse the
//! message, read the token list from the shared store, run the assembler,
//! and place the finished root on the current page. Everything upstream of
//! the message (panel UI, font preloading) and downstream of the tree
//! (actual rendering) belongs to the host.

mod message;
mod store;

pub use message::UiMessage;
pub use store::read_stored_tokens;

use tokendoc_build::{BuildReport, DocumentAssembler};
use tokendoc_core::{DocError, SectionDescriptor};
use tokendoc_tree::DocumentTree;

/// Handle one inbound UI message against the document.
pub fn handle_message(tree: &mut DocumentTree, message: UiMessage) -> Result<BuildReport, DocError> {
    match message {
        UiMessage::CreateDocs { sections } => create_docs(tree, &sections),
    }
}

/// Run one documentation build: stored tokens, caller-ordered sections.
///
/// The assembled root is appended to the current page, matching the host
/// convention that new top-level content lands on the page being viewed.
pub fn create_docs(
    tree: &mut DocumentTree,
    sections: &[SectionDescriptor],
) -> Result<BuildReport, DocError> {
    let tokens = read_stored_tokens(tree)?;
    let report = DocumentAssembler::new(tree).assemble(&tokens, sections)?;
    if let Some(page) = tree.current_page() {
        tree.append_child(page, report.root);
    }
    Ok(report)
}
