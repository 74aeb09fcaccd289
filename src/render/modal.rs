//! `Modal`: Bootstrap dialog markup.
//!
//! The begin phase leaves four regions open (wrapper, dialog, content, body)
//! so the children land inside the body. The end phase closes them
//! innermost first, rendering the footer slot between body and content.

use tracing::debug;

use crate::error::{MarkupError, MarkupResult};
use crate::style::join_classes;
use crate::tree::{ModalNode, Node, NodeId};
use crate::writer::ResponseWriter;

use super::{encode_all, script, RenderContext, Renderer};

/// Named nesting levels of the dialog markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRegion {
    Wrapper,
    Dialog,
    Content,
    Header,
    Body,
    Footer,
}

impl ModalRegion {
    /// Regions still open when the begin phase returns, outermost first.
    pub const OPEN_AFTER_BEGIN: [ModalRegion; 4] = [
        ModalRegion::Wrapper,
        ModalRegion::Dialog,
        ModalRegion::Content,
        ModalRegion::Body,
    ];

    pub fn tag(self) -> &'static str {
        "div"
    }

    pub fn base_class(self) -> &'static str {
        match self {
            ModalRegion::Wrapper => "modal",
            ModalRegion::Dialog => "modal-dialog",
            ModalRegion::Content => "modal-content",
            ModalRegion::Header => "modal-header",
            ModalRegion::Body => "modal-body",
            ModalRegion::Footer => "modal-footer",
        }
    }

    /// Suffix appended to the modal's client id, for regions that carry one.
    pub fn id_suffix(self) -> Option<&'static str> {
        match self {
            ModalRegion::Header => Some("_header"),
            ModalRegion::Body => Some("_body"),
            ModalRegion::Footer => Some("_footer"),
            _ => None,
        }
    }

    fn open(self, rw: &mut ResponseWriter<'_>, client_id: &str) -> MarkupResult<()> {
        rw.start_element(self.tag())?;
        if let Some(suffix) = self.id_suffix() {
            rw.write_attribute("id", &format!("{}{}", client_id, suffix))?;
        }
        Ok(())
    }

    fn close(self, rw: &mut ResponseWriter<'_>) -> MarkupResult<()> {
        rw.end_element(self.tag())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ModalRenderer;

impl Renderer for ModalRenderer {
    fn encode_begin(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        let modal = modal_of(node)?;
        let client_id = cx.tree.client_id(id);
        debug!(client_id = %client_id, "modal begin");
        let rw = &mut cx.writer;

        ModalRegion::Wrapper.open(rw, &client_id)?;
        rw.write_attribute("id", &client_id)?;
        if !modal.backdrop {
            rw.write_attribute("data-backdrop", "static")?;
        }
        if !modal.close_on_escape {
            rw.write_attribute("data-keyboard", "false")?;
        }
        let class = match node.style_class.as_deref().map(str::trim) {
            Some(user) if !user.is_empty() => format!("{} modal", user),
            _ => "modal".to_string(),
        };
        rw.write_attribute("class", &class)?;
        if let Some(style) = &node.style {
            rw.write_attribute("style", style)?;
        }
        rw.write_attribute("role", "dialog")?;
        rw.write_attribute("tabindex", "-1")?;
        rw.write_attribute("aria-labelledby", &format!("{}_Label", client_id))?;
        rw.write_attribute("aria-hidden", "true")?;

        ModalRegion::Dialog.open(rw, &client_id)?;
        rw.write_attribute(
            "class",
            &join_classes(ModalRegion::Dialog.base_class(), modal.size.as_deref()),
        )?;

        ModalRegion::Content.open(rw, &client_id)?;
        rw.write_attribute("class", ModalRegion::Content.base_class())?;

        ModalRegion::Header.open(rw, &client_id)?;
        rw.write_attribute(
            "class",
            &join_classes(ModalRegion::Header.base_class(), modal.header_class.as_deref()),
        )?;
        if let Some(style) = &modal.header_style {
            rw.write_attribute("style", style)?;
        }
        if modal.closable {
            rw.start_element("button")?;
            rw.write_attribute("type", "button")?;
            rw.write_attribute("class", "close")?;
            rw.write_attribute("data-dismiss", "modal")?;
            rw.write_raw("&times;")?;
            rw.end_element("button")?;
        }
        if let Some(title) = &modal.title {
            rw.start_element("h4")?;
            rw.write_attribute("id", &format!("{}_Label", client_id))?;
            rw.write_text(title)?;
            rw.end_element("h4")?;
        }
        ModalRegion::Header.close(rw)?;

        ModalRegion::Body.open(rw, &client_id)?;
        rw.write_attribute(
            "class",
            &join_classes(ModalRegion::Body.base_class(), modal.content_class.as_deref()),
        )?;
        if let Some(style) = &modal.content_style {
            rw.write_attribute("style", style)?;
        }
        Ok(())
    }

    fn encode_end(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        modal_of(node)?;
        let tree = cx.tree;
        let client_id = tree.client_id(id);

        ModalRegion::Body.close(&mut cx.writer)?;

        if let Some(footer) = tree.footer(id) {
            ModalRegion::Footer.open(&mut cx.writer, &client_id)?;
            cx.writer
                .write_attribute("class", ModalRegion::Footer.base_class())?;
            encode_all(cx, footer)?;
            ModalRegion::Footer.close(&mut cx.writer)?;
        }

        ModalRegion::Content.close(&mut cx.writer)?;
        ModalRegion::Dialog.close(&mut cx.writer)?;
        ModalRegion::Wrapper.close(&mut cx.writer)?;

        debug!(client_id = %client_id, "modal end");
        script::encode_modal_init(&mut cx.writer, &client_id)
    }
}

fn modal_of(node: &Node) -> MarkupResult<&ModalNode> {
    node.as_modal().ok_or_else(|| MarkupError::InvalidComponent {
        component: node.kind.name().to_string(),
        reason: "ModalRenderer only renders Modal nodes".to_string(),
    })
}
