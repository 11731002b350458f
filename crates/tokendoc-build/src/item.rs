//! Building one token card.

use tokendoc_core::{contains_alias, names, ResolveError, Token};
use tokendoc_tree::{DocumentTree, NodeId};

use crate::resolver::{ResolverConfig, TemplateResolver};
use crate::warnings::{BuildWarning, CardSlot};

/// Stamps the token-card template once per token and fills its five slots.
///
/// Slot fills are independent: a missing slot is recorded as a warning and
/// the remaining slots are still written. Only a missing template aborts.
pub struct TokenItemBuilder<'a> {
    tree: &'a mut DocumentTree,
    config: &'a ResolverConfig,
    warnings: &'a mut Vec<BuildWarning>,
}

impl<'a> TokenItemBuilder<'a> {
    pub fn new(
        tree: &'a mut DocumentTree,
        config: &'a ResolverConfig,
        warnings: &'a mut Vec<BuildWarning>,
    ) -> Self {
        Self {
            tree,
            config,
            warnings,
        }
    }

    /// Instantiate the token-card template for `token` and populate it.
    /// The returned instance is detached; the caller appends it.
    pub fn build(&mut self, token: &Token) -> Result<NodeId, ResolveError> {
        let template = TemplateResolver::new(self.tree, self.config).token_card()?;
        let instance =
            self.tree
                .instantiate(template)
                .ok_or_else(|| ResolveError::MissingTemplate {
                    name: self.config.token_card.clone(),
                })?;
        self.tree.set_name(instance, &token.name);

        self.fill_name(instance, token);
        self.fill_value(instance, token);
        self.fill_preview(instance, token);
        self.fill_alias(instance, token);
        self.fill_description(instance, token);

        Ok(instance)
    }

    fn slot(&self, instance: NodeId, name: &str) -> Option<NodeId> {
        self.tree.find_descendant(instance, |node| node.name == name)
    }

    fn warn_missing(&mut self, token: &Token, slot: CardSlot) {
        BuildWarning::SlotNotFound {
            token: token.name.clone(),
            slot,
        }
        .push(self.warnings);
    }

    // The name, value, and preview slots all carry the token's name as a
    // quoted literal; downstream rendering reads the annotation, not the
    // node text.

    fn fill_name(&mut self, instance: NodeId, token: &Token) {
        match self.slot(instance, names::SLOT_TOKEN_NAME) {
            Some(node) => self.tree.set_annotation(
                node,
                names::ANNOTATION_NAMESPACE,
                names::KEY_TOKEN_NAME,
                quoted(&token.name),
            ),
            None => self.warn_missing(token, CardSlot::Name),
        }
    }

    fn fill_value(&mut self, instance: NodeId, token: &Token) {
        match self.slot(instance, names::SLOT_TOKEN_VALUE) {
            Some(node) => self.tree.set_annotation(
                node,
                names::ANNOTATION_NAMESPACE,
                names::KEY_VALUE,
                quoted(&token.name),
            ),
            None => self.warn_missing(token, CardSlot::Value),
        }
    }

    fn fill_preview(&mut self, instance: NodeId, token: &Token) {
        match self.slot(instance, names::SLOT_TOKEN_PREVIEW) {
            Some(node) => self.tree.set_annotation(
                node,
                names::ANNOTATION_NAMESPACE,
                names::KEY_FILL,
                quoted(&token.name),
            ),
            None => self.warn_missing(token, CardSlot::Preview),
        }
    }

    /// The alias slot is only shown when the token's raw value references
    /// another token; otherwise it is hidden rather than written.
    fn fill_alias(&mut self, instance: NodeId, token: &Token) {
        match self.slot(instance, names::SLOT_TOKEN_ALIAS) {
            Some(node) => {
                if contains_alias(&token.value) {
                    self.tree.set_annotation(
                        node,
                        names::ANNOTATION_NAMESPACE,
                        names::KEY_TOKEN_VALUE,
                        quoted(&token.name),
                    );
                } else {
                    self.tree.set_visible(node, false);
                }
            }
            None => self.warn_missing(token, CardSlot::Alias),
        }
    }

    fn fill_description(&mut self, instance: NodeId, token: &Token) {
        match self.slot(instance, names::SLOT_TOKEN_DESCRIPTION) {
            Some(node) => {
                if !token.description.is_empty() {
                    self.tree.set_annotation(
                        node,
                        names::ANNOTATION_NAMESPACE,
                        names::KEY_DESCRIPTION,
                        quoted(&token.name),
                    );
                } else {
                    self.tree.set_visible(node, false);
                }
            }
            None => self.warn_missing(token, CardSlot::Description),
        }
    }
}

fn quoted(name: &str) -> String {
    format!("\"{name}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::documented_tree;

    fn build_card(tree: &mut DocumentTree, token: &Token) -> (NodeId, Vec<BuildWarning>) {
        let config = ResolverConfig::default();
        let mut warnings = Vec::new();
        let card = TokenItemBuilder::new(tree, &config, &mut warnings)
            .build(token)
            .unwrap();
        (card, warnings)
    }

    fn slot_of(tree: &DocumentTree, card: NodeId, name: &str) -> NodeId {
        tree.find_descendant(card, |n| n.name == name).unwrap()
    }

    #[test]
    fn test_card_is_renamed_to_the_token() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.background.page", "#FFFFFF", "color", "");
        let (card, warnings) = build_card(&mut tree, &token);

        assert_eq!(tree.get(card).unwrap().name, "color.background.page");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_name_value_preview_carry_the_quoted_token_name() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.background.page", "#FFFFFF", "color", "");
        let (card, _) = build_card(&mut tree, &token);

        let expected = "\"color.background.page\"";
        for (slot, key) in [
            (names::SLOT_TOKEN_NAME, names::KEY_TOKEN_NAME),
            (names::SLOT_TOKEN_VALUE, names::KEY_VALUE),
            (names::SLOT_TOKEN_PREVIEW, names::KEY_FILL),
        ] {
            let node = slot_of(&tree, card, slot);
            assert_eq!(
                tree.get(node).unwrap().annotation(names::ANNOTATION_NAMESPACE, key),
                Some(expected),
            );
        }
    }

    #[test]
    fn test_alias_slot_written_for_alias_values() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.text.body", "$accent.500", "color", "");
        let (card, _) = build_card(&mut tree, &token);

        let alias = slot_of(&tree, card, names::SLOT_TOKEN_ALIAS);
        let node = tree.get(alias).unwrap();
        assert!(node.visible);
        assert_eq!(
            node.annotation(names::ANNOTATION_NAMESPACE, names::KEY_TOKEN_VALUE),
            Some("\"color.text.body\""),
        );
    }

    #[test]
    fn test_alias_slot_hidden_for_literal_values() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.accent", "#FFAA00", "color", "");
        let (card, _) = build_card(&mut tree, &token);

        let alias = slot_of(&tree, card, names::SLOT_TOKEN_ALIAS);
        let node = tree.get(alias).unwrap();
        assert!(!node.visible);
        assert_eq!(
            node.annotation(names::ANNOTATION_NAMESPACE, names::KEY_TOKEN_VALUE),
            None,
        );
    }

    #[test]
    fn test_description_slot_hidden_when_empty() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.accent", "#FFAA00", "color", "");
        let (card, _) = build_card(&mut tree, &token);

        let description = slot_of(&tree, card, names::SLOT_TOKEN_DESCRIPTION);
        let node = tree.get(description).unwrap();
        assert!(!node.visible);
        assert_eq!(
            node.annotation(names::ANNOTATION_NAMESPACE, names::KEY_DESCRIPTION),
            None,
        );
    }

    #[test]
    fn test_description_slot_written_when_present() {
        let (mut tree, _) = documented_tree();
        let token = Token::new("color.text.body", "#333333", "color", "body text");
        let (card, _) = build_card(&mut tree, &token);

        let description = slot_of(&tree, card, names::SLOT_TOKEN_DESCRIPTION);
        let node = tree.get(description).unwrap();
        assert!(node.visible);
        assert_eq!(
            node.annotation(names::ANNOTATION_NAMESPACE, names::KEY_DESCRIPTION),
            Some("\"color.text.body\""),
        );
    }

    #[test]
    fn test_missing_slot_warns_and_fills_the_rest() {
        // Template with only the name slot: four warnings, name still set.
        let mut tree = DocumentTree::new();
        let page = tree.add_page(names::PAGE_DESIGN_TOKENS);
        let holder = tree.create_frame(names::LAYER_LOCAL_COMPONENTS);
        tree.append_child(page, holder);
        let card_template = tree.create_component(names::TEMPLATE_TOKEN_CARD);
        let name_slot = tree.create_text(names::SLOT_TOKEN_NAME);
        tree.append_child(card_template, name_slot);
        tree.append_child(holder, card_template);

        let token = Token::new("spacing.md", 16.0, "spacing", "");
        let (card, warnings) = build_card(&mut tree, &token);

        let node = slot_of(&tree, card, names::SLOT_TOKEN_NAME);
        assert_eq!(
            tree.get(node).unwrap().annotation(names::ANNOTATION_NAMESPACE, names::KEY_TOKEN_NAME),
            Some("\"spacing.md\""),
        );
        assert_eq!(
            warnings,
            vec![
                BuildWarning::SlotNotFound { token: "spacing.md".to_string(), slot: CardSlot::Value },
                BuildWarning::SlotNotFound { token: "spacing.md".to_string(), slot: CardSlot::Preview },
                BuildWarning::SlotNotFound { token: "spacing.md".to_string(), slot: CardSlot::Alias },
                BuildWarning::SlotNotFound { token: "spacing.md".to_string(), slot: CardSlot::Description },
            ],
        );
    }
}
