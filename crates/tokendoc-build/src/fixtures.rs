//! Shared test fixtures: a document tree with the required templates.

use tokendoc_core::names;
use tokendoc_tree::{DocumentTree, NodeId};

/// A tree with the `Design Tokens` page, the `Local Components` holder,
/// and both templates fully slotted. Returns the tree and the page ID.
pub(crate) fn documented_tree() -> (DocumentTree, NodeId) {
    let mut tree = DocumentTree::new();
    let page = tree.add_page(names::PAGE_DESIGN_TOKENS);
    let holder = tree.create_frame(names::LAYER_LOCAL_COMPONENTS);
    tree.append_child(page, holder);

    let header = tree.create_component(names::TEMPLATE_SECTION_HEADER);
    let title = tree.create_text(names::SLOT_HEADER_TITLE);
    tree.append_child(header, title);
    tree.append_child(holder, header);

    let card = tree.create_component(names::TEMPLATE_TOKEN_CARD);
    for slot in [
        names::SLOT_TOKEN_NAME,
        names::SLOT_TOKEN_VALUE,
        names::SLOT_TOKEN_PREVIEW,
        names::SLOT_TOKEN_ALIAS,
        names::SLOT_TOKEN_DESCRIPTION,
    ] {
        let node = tree.create_text(slot);
        tree.append_child(card, node);
    }
    tree.append_child(holder, card);

    (tree, page)
}
