//! Document node types.

use indexmap::IndexMap;

/// Unique identifier for a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Stacking direction of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// No auto-layout; children keep their own placement.
    #[default]
    None,
    /// Horizontal stacking (left to right)
    Horizontal,
    /// Vertical stacking (top to bottom)
    Vertical,
}

/// Sizing behavior on the counter axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisSizing {
    /// Fixed size set by the author.
    #[default]
    Fixed,
    /// Hug contents.
    Auto,
}

/// Layout attributes of a frame node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameAttrs {
    pub layout_mode: LayoutMode,
    pub counter_axis_sizing: AxisSizing,
    /// Gap between children on the main axis.
    pub item_spacing: f64,
}

/// The kind of a document node, with kind-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Top-level page under the document root.
    Page,
    /// Container frame with layout attributes.
    Frame(FrameAttrs),
    /// Reusable template that can be instantiated.
    Component,
    /// Instance stamped from a template.
    Instance {
        /// The template this instance was stamped from.
        template: NodeId,
    },
    /// Text leaf.
    Text {
        characters: String,
    },
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique ID for this node
    pub id: NodeId,
    /// Layer name (the handle lookups go through)
    pub name: String,
    /// Node kind and kind-specific attributes
    pub kind: NodeKind,
    /// Parent node ID (None for pages and detached nodes)
    pub parent: Option<NodeId>,
    /// Child node IDs, in stacking order
    pub children: Vec<NodeId>,
    /// Whether this node is rendered
    pub visible: bool,
    /// Opaque `(namespace, key) -> value` annotations carried for
    /// downstream rendering
    pub(crate) annotations: IndexMap<(String, String), String>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            visible: true,
            annotations: IndexMap::new(),
        }
    }

    /// Text content, for text nodes.
    pub fn characters(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { characters } => Some(characters),
            _ => None,
        }
    }

    /// Layout attributes, for frame nodes.
    pub fn frame_attrs(&self) -> Option<&FrameAttrs> {
        match &self.kind {
            NodeKind::Frame(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Look up an annotation by namespace and key.
    pub fn annotation(&self, namespace: &str, key: &str) -> Option<&str> {
        self.annotations
            .get(&(namespace.to_string(), key.to_string()))
            .map(String::as_str)
    }

    /// Iterate over all annotations in insertion order.
    pub fn annotations(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.annotations
            .iter()
            .map(|((ns, key), value)| (ns.as_str(), key.as_str(), value.as_str()))
    }
}
