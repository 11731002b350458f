//! The document tree: an arena of nodes with page roots.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::node::{AxisSizing, FrameAttrs, LayoutMode, Node, NodeId, NodeKind};

/// A document: pages at the root, arbitrary node subtrees below them.
///
/// Creation methods return detached nodes; callers place them with
/// [`append_child`](DocumentTree::append_child). Lookups return `None` and
/// mutations on unknown IDs are ignored, mirroring a host graph where stale
/// handles simply stop resolving.
#[derive(Debug, Clone, Default)]
pub struct DocumentTree {
    nodes: HashMap<NodeId, Node>,
    /// Page IDs in document order.
    pages: Vec<NodeId>,
    next_id: u64,
    current_page: Option<NodeId>,
    /// Document-level shared annotations (the host key/value store).
    annotations: IndexMap<(String, String), String>,
}

impl DocumentTree {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = self.next_id();
        self.nodes.insert(id, Node::new(id, name, kind));
        id
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a page under the document root. The first page added becomes the
    /// current page.
    pub fn add_page(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.insert(name, NodeKind::Page);
        self.pages.push(id);
        if self.current_page.is_none() {
            self.current_page = Some(id);
        }
        id
    }

    /// Create a detached frame with default layout attributes.
    pub fn create_frame(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name, NodeKind::Frame(FrameAttrs::default()))
    }

    /// Create a detached template component.
    pub fn create_component(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(name, NodeKind::Component)
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(
            name,
            NodeKind::Text {
                characters: String::new(),
            },
        )
    }

    /// Append a child to a parent, preserving insertion order.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        if !self.nodes.contains_key(&parent_id) {
            return;
        }
        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.parent = Some(parent_id);
        } else {
            return;
        }
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(child_id);
        }
    }

    /// Stamp a new instance from a template node.
    ///
    /// The template's subtree is deep-copied; the copied root becomes an
    /// instance node pointing back at the template. The instance is
    /// detached. Returns `None` for a stale template handle.
    pub fn instantiate(&mut self, template_id: NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(&template_id) {
            return None;
        }
        let instance = self.clone_subtree(template_id);
        if let Some(node) = self.nodes.get_mut(&instance) {
            node.kind = NodeKind::Instance {
                template: template_id,
            };
        }
        Some(instance)
    }

    fn clone_subtree(&mut self, source_id: NodeId) -> NodeId {
        let source = self.nodes[&source_id].clone();
        let id = self.next_id();
        let mut copy = Node::new(id, source.name, source.kind);
        copy.visible = source.visible;
        copy.annotations = source.annotations;
        self.nodes.insert(id, copy);

        for child_id in source.children {
            if !self.nodes.contains_key(&child_id) {
                continue;
            }
            let child_copy = self.clone_subtree(child_id);
            self.append_child(id, child_copy);
        }
        id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get the page IDs in document order.
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    /// The page new content lands on.
    pub fn current_page(&self) -> Option<NodeId> {
        self.current_page
    }

    pub fn set_current_page(&mut self, id: NodeId) {
        if self.pages.contains(&id) {
            self.current_page = Some(id);
        }
    }

    /// Find a page by name among the document roots.
    pub fn find_page(&self, name: &str) -> Option<NodeId> {
        self.pages
            .iter()
            .copied()
            .find(|id| self.nodes.get(id).is_some_and(|node| node.name == name))
    }

    /// Find the first direct child matching a predicate.
    pub fn find_child(&self, parent_id: NodeId, predicate: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.children(parent_id)
            .find(|node| predicate(node))
            .map(|node| node.id)
    }

    /// Find the first node in a subtree matching a predicate, depth-first.
    /// The subtree root itself is not considered.
    pub fn find_descendant(
        &self,
        root_id: NodeId,
        predicate: impl Fn(&Node) -> bool,
    ) -> Option<NodeId> {
        self.find_descendant_inner(root_id, &predicate)
    }

    fn find_descendant_inner(
        &self,
        root_id: NodeId,
        predicate: &impl Fn(&Node) -> bool,
    ) -> Option<NodeId> {
        let root = self.nodes.get(&root_id)?;
        for child_id in &root.children {
            if let Some(child) = self.nodes.get(child_id) {
                if predicate(child) {
                    return Some(*child_id);
                }
            }
            if let Some(found) = self.find_descendant_inner(*child_id, predicate) {
                return Some(found);
            }
        }
        None
    }

    /// Iterate over the direct children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Rename a node.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.name = name.into();
        }
    }

    /// Set the text content of a text node. Ignored for other kinds.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            if let NodeKind::Text { characters } = &mut node.kind {
                *characters = text.into();
            }
        }
    }

    /// Show or hide a node.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.visible = visible;
        }
    }

    /// Set the stacking direction of a frame. Ignored for other kinds.
    pub fn set_layout_mode(&mut self, id: NodeId, layout_mode: LayoutMode) {
        if let Some(attrs) = self.frame_attrs_mut(id) {
            attrs.layout_mode = layout_mode;
        }
    }

    /// Set the counter-axis sizing of a frame. Ignored for other kinds.
    pub fn set_counter_axis_sizing(&mut self, id: NodeId, sizing: AxisSizing) {
        if let Some(attrs) = self.frame_attrs_mut(id) {
            attrs.counter_axis_sizing = sizing;
        }
    }

    /// Set the child gap of a frame. Ignored for other kinds.
    pub fn set_item_spacing(&mut self, id: NodeId, spacing: f64) {
        if let Some(attrs) = self.frame_attrs_mut(id) {
            attrs.item_spacing = spacing;
        }
    }

    fn frame_attrs_mut(&mut self, id: NodeId) -> Option<&mut FrameAttrs> {
        match self.nodes.get_mut(&id).map(|node| &mut node.kind) {
            Some(NodeKind::Frame(attrs)) => Some(attrs),
            _ => None,
        }
    }

    /// Attach an annotation to a node.
    pub fn set_annotation(
        &mut self,
        id: NodeId,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.annotations
                .insert((namespace.into(), key.into()), value.into());
        }
    }

    /// Look up a document-level annotation (the host shared store).
    pub fn document_annotation(&self, namespace: &str, key: &str) -> Option<&str> {
        self.annotations
            .get(&(namespace.to_string(), key.to_string()))
            .map(String::as_str)
    }

    /// Write a document-level annotation (the host shared store).
    pub fn set_document_annotation(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.annotations
            .insert((namespace.into(), key.into()), value.into());
    }
}
