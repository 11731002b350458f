//! End-to-end assembly over a fully-slotted fixture tree.

use tokendoc_build::DocumentAssembler;
use tokendoc_core::{names, SectionDescriptor, Token};
use tokendoc_tree::{DocumentTree, NodeId};

fn documented_tree() -> DocumentTree {
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

    tree
}

fn slot_of(tree: &DocumentTree, card: NodeId, name: &str) -> NodeId {
    tree.find_descendant(card, |n| n.name == name).unwrap()
}

#[test]
fn builds_two_sections_with_alias_and_description_visibility() {
    let mut tree = documented_tree();

    let tokens = vec![
        Token::new("color.background.page", "#FFFFFF", "color", ""),
        Token::new("color.text.body", "$color.background.page", "color", "body text"),
    ];
    let sections = vec![
        SectionDescriptor::new("Background Colors", "color.background"),
        SectionDescriptor::new("Text Colors", "color.text"),
    ];

    let report = DocumentAssembler::new(&mut tree)
        .assemble(&tokens, &sections)
        .unwrap();
    assert!(report.warnings.is_empty());

    // Two sections, in descriptor order.
    let section_ids = tree.get(report.root).unwrap().children.clone();
    let section_names: Vec<_> = section_ids
        .iter()
        .map(|id| tree.get(*id).unwrap().name.clone())
        .collect();
    assert_eq!(section_names, ["Background Colors", "Text Colors"]);

    // Each section: a labeled header plus exactly one card.
    for (section, card_name) in section_ids
        .iter()
        .zip(["color.background.page", "color.text.body"])
    {
        let children: Vec<_> = tree.children(*section).map(|n| n.name.clone()).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1], card_name);

        let header = tree.get(*section).unwrap().children[0];
        let title = slot_of(&tree, header, names::SLOT_HEADER_TITLE);
        assert_eq!(
            tree.get(title).unwrap().characters(),
            Some(tree.get(*section).unwrap().name.as_str()),
        );
    }

    // First card: literal value, no description; both slots hidden.
    let first_card = tree.get(section_ids[0]).unwrap().children[1];
    assert!(!tree.get(slot_of(&tree, first_card, names::SLOT_TOKEN_ALIAS)).unwrap().visible);
    assert!(
        !tree
            .get(slot_of(&tree, first_card, names::SLOT_TOKEN_DESCRIPTION))
            .unwrap()
            .visible
    );

    // Second card: alias value and a description; both slots visible and
    // written.
    let second_card = tree.get(section_ids[1]).unwrap().children[1];
    let alias = tree.get(slot_of(&tree, second_card, names::SLOT_TOKEN_ALIAS)).unwrap();
    assert!(alias.visible);
    assert_eq!(
        alias.annotation(names::ANNOTATION_NAMESPACE, names::KEY_TOKEN_VALUE),
        Some("\"color.text.body\""),
    );
    let description = tree
        .get(slot_of(&tree, second_card, names::SLOT_TOKEN_DESCRIPTION))
        .unwrap();
    assert!(description.visible);
    assert_eq!(
        description.annotation(names::ANNOTATION_NAMESPACE, names::KEY_DESCRIPTION),
        Some("\"color.text.body\""),
    );
}

#[test]
fn empty_inputs_yield_an_empty_root() {
    let mut tree = documented_tree();
    let report = DocumentAssembler::new(&mut tree).assemble(&[], &[]).unwrap();
    assert!(tree.get(report.root).unwrap().children.is_empty());
    assert!(report.warnings.is_empty());
}
