//! Template lookup inside the document tree.

use tokendoc_core::{names, ResolveError};
use tokendoc_tree::{DocumentTree, NodeId};

/// The lookup path to the documentation templates.
///
/// The path is fixed and hierarchical (root, then a page, then an optional
/// components holder, then a uniquely-named template) but the names vary by
/// deployment. [`ResolverConfig::default`] matches the standard deployment;
/// a deployment that keeps its templates as direct page children sets
/// `components_layer` to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Name of the page holding the templates.
    pub page: String,
    /// Holder layer inside the page, or `None` for direct page children.
    pub components_layer: Option<String>,
    /// Name of the section-header template.
    pub section_header: String,
    /// Name of the token-card template.
    pub token_card: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            page: names::PAGE_DESIGN_TOKENS.to_string(),
            components_layer: Some(names::LAYER_LOCAL_COMPONENTS.to_string()),
            section_header: names::TEMPLATE_SECTION_HEADER.to_string(),
            token_card: names::TEMPLATE_TOKEN_CARD.to_string(),
        }
    }
}

/// Locates the two required templates.
///
/// Lookup is idempotent and side-effect-free; builders resolve their own
/// template reference per card or header rather than caching a handle.
pub struct TemplateResolver<'a> {
    tree: &'a DocumentTree,
    config: &'a ResolverConfig,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(tree: &'a DocumentTree, config: &'a ResolverConfig) -> Self {
        Self { tree, config }
    }

    /// Resolve the section-header template.
    pub fn section_header(&self) -> Result<NodeId, ResolveError> {
        self.template(&self.config.section_header)
    }

    /// Resolve the token-card template.
    pub fn token_card(&self) -> Result<NodeId, ResolveError> {
        self.template(&self.config.token_card)
    }

    fn template(&self, name: &str) -> Result<NodeId, ResolveError> {
        let page = self
            .tree
            .find_page(&self.config.page)
            .ok_or_else(|| ResolveError::MissingPage {
                name: self.config.page.clone(),
            })?;

        // A missing holder layer surfaces as a missing template, the same
        // way the lookup fails when the holder exists but the template
        // does not.
        let holder = match &self.config.components_layer {
            Some(layer) => self.tree.find_child(page, |node| node.name == *layer),
            None => Some(page),
        };

        holder
            .and_then(|holder| self.tree.find_child(holder, |node| node.name == name))
            .ok_or_else(|| ResolveError::MissingTemplate {
                name: name.to_string(),
            })
    }
}
