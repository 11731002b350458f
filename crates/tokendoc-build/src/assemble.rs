//! Top-level document assembly.

use tokendoc_core::{names, ResolveError, SectionDescriptor, Token};
use tokendoc_tree::{AxisSizing, DocumentTree, LayoutMode, NodeId};

use crate::resolver::{ResolverConfig, TemplateResolver};
use crate::section::SectionBuilder;
use crate::warnings::BuildWarning;

/// The result of one assembly pass: the root container plus every
/// recoverable issue encountered along the way.
#[derive(Debug)]
pub struct BuildReport {
    /// The assembled root container (detached; callers place it).
    pub root: NodeId,
    /// Non-fatal issues, in the order they occurred.
    pub warnings: Vec<BuildWarning>,
}

/// Orchestrates a full build: partitions the token list per descriptor,
/// builds one section per non-empty partition, and stacks the sections
/// horizontally in a fresh root container.
///
/// Descriptor order fixes section order. Prefixes may overlap; a token is
/// rendered once per matching descriptor. Nothing carries over between
/// `assemble` calls.
pub struct DocumentAssembler<'a> {
    tree: &'a mut DocumentTree,
    config: ResolverConfig,
}

impl<'a> DocumentAssembler<'a> {
    /// Assembler over the default template lookup path.
    pub fn new(tree: &'a mut DocumentTree) -> Self {
        Self::with_config(tree, ResolverConfig::default())
    }

    /// Assembler with a deployment-specific lookup path.
    pub fn with_config(tree: &'a mut DocumentTree, config: ResolverConfig) -> Self {
        Self { tree, config }
    }

    /// Build the documentation for `tokens` under `sections`.
    ///
    /// An empty token list or zero matching descriptors yields a root with
    /// no children, not an error. A missing page or template fails before
    /// any node is created; nodes produced before a later abort stay in
    /// the tree (there is no rollback).
    pub fn assemble(
        &mut self,
        tokens: &[Token],
        sections: &[SectionDescriptor],
    ) -> Result<BuildReport, ResolveError> {
        // Both templates are required up front; builders still re-resolve
        // per stamp.
        let resolver = TemplateResolver::new(self.tree, &self.config);
        resolver.section_header()?;
        resolver.token_card()?;

        let mut warnings = Vec::new();

        let root = self.tree.create_frame(names::ROOT_FRAME_NAME);
        self.tree.set_layout_mode(root, LayoutMode::Horizontal);
        self.tree.set_counter_axis_sizing(root, AxisSizing::Auto);
        self.tree.set_item_spacing(root, names::ROOT_ITEM_SPACING);

        for section in sections {
            let matched: Vec<Token> = tokens
                .iter()
                .filter(|token| section.matches(token))
                .cloned()
                .collect();
            if matched.is_empty() {
                continue;
            }
            let built = SectionBuilder::new(self.tree, &self.config, &mut warnings)
                .build(&section.name, &matched)?;
            self.tree.append_child(root, built);
        }

        Ok(BuildReport { root, warnings })
    }
}
