//! In-memory document tree for the tokendoc engine.
//!
//! The tree plays the role of the host scene graph: a hierarchy of pages,
//! frames, template components, template instances, and text nodes. The
//! build engine is handed a tree explicitly (`&DocumentTree` /
//! `&mut DocumentTree`) and only uses the small capability surface exposed
//! here: lookup by predicate, template instantiation, container creation
//! with layout attributes, and node mutation (name, text, visibility,
//! annotations).
//!
//! Production embedders mirror the host document into this tree and apply
//! the mutations back; tests build fixture trees directly.

mod node;
mod tree;

pub use node::{AxisSizing, FrameAttrs, LayoutMode, Node, NodeId, NodeKind};
pub use tree::DocumentTree;
