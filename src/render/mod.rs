//! Two-phase rendering of a component tree.
//!
//! The runtime calls [`Renderer::encode_begin`] on a node, renders its
//! children, then calls [`Renderer::encode_end`]. Renderers are unit structs
//! and hold no state between the two calls; anything the end phase needs is
//! derived again from the tree.

pub mod basic;
pub mod drop_menu;
pub mod modal;
pub mod script;

use std::io::Write;

use tracing::trace;

use crate::error::MarkupResult;
use crate::services::{IconEncoder, ResponsiveClasses, TooltipHandler};
use crate::tree::{ComponentTree, Node, NodeId, NodeKind};
use crate::writer::ResponseWriter;

pub use basic::BasicRenderer;
pub use drop_menu::DropMenuRenderer;
pub use modal::{ModalRegion, ModalRenderer};

/// Everything a renderer may touch during one render pass.
pub struct RenderContext<'a> {
    pub tree: &'a ComponentTree,
    pub writer: ResponseWriter<'a>,
    pub icons: &'a dyn IconEncoder,
    pub responsive: &'a dyn ResponsiveClasses,
    pub tooltips: &'a mut dyn TooltipHandler,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        tree: &'a ComponentTree,
        out: &'a mut dyn Write,
        icons: &'a dyn IconEncoder,
        responsive: &'a dyn ResponsiveClasses,
        tooltips: &'a mut dyn TooltipHandler,
    ) -> Self {
        Self {
            tree,
            writer: ResponseWriter::new(out),
            icons,
            responsive,
            tooltips,
        }
    }

    pub fn node(&self, id: NodeId) -> MarkupResult<&'a Node> {
        self.tree.node(id)
    }
}

pub trait Renderer {
    fn encode_begin(&self, cx: &mut RenderContext<'_>, node: NodeId) -> MarkupResult<()>;
    fn encode_end(&self, cx: &mut RenderContext<'_>, node: NodeId) -> MarkupResult<()>;
}

pub fn renderer_for(kind: &NodeKind) -> &'static dyn Renderer {
    match kind {
        NodeKind::DropMenu(_) => &DropMenuRenderer,
        NodeKind::Modal(_) => &ModalRenderer,
        _ => &BasicRenderer,
    }
}

/// Render `node` and its subtree: begin, children in order, end.
///
/// A node that is not rendered produces nothing, and neither does anything
/// below it. The first write failure aborts the pass.
pub fn encode_all(cx: &mut RenderContext<'_>, node: NodeId) -> MarkupResult<()> {
    let tree = cx.tree;
    let n = tree.node(node)?;
    if !n.rendered {
        trace!(node = node.index(), kind = n.kind.name(), "skipping unrendered subtree");
        return Ok(());
    }

    let renderer = renderer_for(&n.kind);
    renderer.encode_begin(cx, node)?;
    for &child in tree.children(node) {
        encode_all(cx, child)?;
    }
    renderer.encode_end(cx, node)
}
