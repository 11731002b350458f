//! Building one titled section.

use tokendoc_core::{names, ResolveError, Token};
use tokendoc_tree::{AxisSizing, DocumentTree, LayoutMode, NodeId};

use crate::item::TokenItemBuilder;
use crate::resolver::{ResolverConfig, TemplateResolver};
use crate::warnings::BuildWarning;

/// Builds one section: a header stamped from the section-header template,
/// followed by one card per token, stacked vertically in a hug-contents
/// container.
///
/// Emptiness is the caller's concern: [`DocumentAssembler`] skips empty
/// partitions, so this builder never special-cases an empty token slice.
///
/// [`DocumentAssembler`]: crate::DocumentAssembler
pub struct SectionBuilder<'a> {
    tree: &'a mut DocumentTree,
    config: &'a ResolverConfig,
    warnings: &'a mut Vec<BuildWarning>,
}

impl<'a> SectionBuilder<'a> {
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

    /// Build the section container for `name` over `tokens`, preserving
    /// token order. The returned frame is detached; the caller appends it.
    pub fn build(&mut self, name: &str, tokens: &[Token]) -> Result<NodeId, ResolveError> {
        let header = self.create_header(name)?;

        let frame = self.tree.create_frame(name);
        self.tree.set_layout_mode(frame, LayoutMode::Vertical);
        self.tree.set_counter_axis_sizing(frame, AxisSizing::Auto);

        if let Some(header) = header {
            self.tree.append_child(frame, header);
        }
        for token in tokens {
            let card = TokenItemBuilder::new(self.tree, self.config, self.warnings).build(token)?;
            self.tree.append_child(frame, card);
        }

        Ok(frame)
    }

    /// Stamp the header and label it with the section name.
    ///
    /// A header without a title slot is unusable: the stamp is abandoned
    /// (warned, left detached) and the section is built without a header.
    fn create_header(&mut self, name: &str) -> Result<Option<NodeId>, ResolveError> {
        let template = TemplateResolver::new(self.tree, self.config).section_header()?;
        let header =
            self.tree
                .instantiate(template)
                .ok_or_else(|| ResolveError::MissingTemplate {
                    name: self.config.section_header.clone(),
                })?;

        let title = self
            .tree
            .find_descendant(header, |node| node.name == names::SLOT_HEADER_TITLE);
        match title {
            Some(title) => {
                self.tree.set_name(header, name);
                self.tree.set_text(title, name);
                Ok(Some(header))
            }
            None => {
                BuildWarning::HeaderTitleNotFound {
                    section: name.to_string(),
                }
                .push(self.warnings);
                Ok(None)
            }
        }
    }
}
