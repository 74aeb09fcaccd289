//! Markup for the structural kinds that surround menus and modals: forms,
//! containers, nav bars, link lists, drop buttons, flyouts and links.
//!
//! These are kept deliberately small. Their main job in this crate is to be
//! the ancestors the menu renderer classifies.

use crate::context::{classify, ContainerKind};
use crate::error::{MarkupError, MarkupResult};
use crate::style::join_classes;
use crate::tree::{Node, NodeId, NodeKind};
use crate::writer::ResponseWriter;

use super::{RenderContext, Renderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicRenderer;

/// Single-element kinds: tag and base class.
fn list_shape(kind: &NodeKind) -> Option<(&'static str, &'static str)> {
    match kind {
        NodeKind::Container => Some(("div", "")),
        NodeKind::NavBarLinks => Some(("ul", "nav navbar-nav")),
        NodeKind::TabLinks => Some(("ul", "nav nav-tabs")),
        NodeKind::PillLinks => Some(("ul", "nav nav-pills")),
        NodeKind::ListLinks => Some(("ul", "nav nav-list")),
        NodeKind::FlyOutMenu => Some(("ul", "dropdown-menu")),
        _ => None,
    }
}

impl Renderer for BasicRenderer {
    fn encode_begin(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        let client_id = cx.tree.client_id(id);

        if let Some((tag, base)) = list_shape(&node.kind) {
            let responsive = cx.responsive.responsive_classes(node);
            let rw = &mut cx.writer;
            rw.start_element(tag)?;
            rw.write_attribute("id", &client_id)?;
            let class = [base, responsive.as_str(), node.style_class.as_deref().unwrap_or("")]
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !class.is_empty() {
                rw.write_attribute("class", &class)?;
            }
            match (&node.kind, &node.style) {
                (NodeKind::FlyOutMenu, style) => {
                    let mut css = "display:block;position:static;margin-bottom:5px;".to_string();
                    if let Some(style) = style {
                        css.push_str(style);
                    }
                    rw.write_attribute("style", &css)?;
                    rw.write_attribute("role", "menu")?;
                }
                (_, Some(style)) => rw.write_attribute("style", style)?,
                (_, None) => {}
            }
            return cx.tooltips.generate_tooltip(&mut cx.writer, node);
        }

        match &node.kind {
            NodeKind::ViewRoot | NodeKind::Group | NodeKind::Repeat => Ok(()),
            NodeKind::Form => {
                let rw = &mut cx.writer;
                rw.start_element("form")?;
                rw.write_attribute("id", &client_id)?;
                rw.write_attribute("method", "post")?;
                write_common(rw, node)
            }
            NodeKind::Text { text } => cx.writer.write_text(text),
            NodeKind::NavLink { value, href } => {
                let rw = &mut cx.writer;
                if let Some(tag) = link_item_tag(cx.tree, id) {
                    rw.start_element(tag)?;
                }
                rw.start_element("a")?;
                rw.write_attribute("id", &client_id)?;
                write_common(rw, node)?;
                rw.write_attribute("href", href.as_deref().unwrap_or("#"))?;
                rw.write_text(value)?;
                rw.end_element("a")
            }
            NodeKind::DropButton { value } => {
                let rw = &mut cx.writer;
                rw.start_element("div")?;
                rw.write_attribute("id", &client_id)?;
                rw.write_attribute(
                    "class",
                    &join_classes("btn-group", node.style_class.as_deref()),
                )?;
                if let Some(style) = &node.style {
                    rw.write_attribute("style", style)?;
                }
                rw.start_element("button")?;
                rw.write_attribute("type", "button")?;
                rw.write_attribute("class", "btn btn-default dropdown-toggle")?;
                rw.write_attribute("data-toggle", "dropdown")?;
                rw.write_text(&format!("{} ", value))?;
                rw.start_element("span")?;
                rw.write_attribute("class", "caret")?;
                rw.end_element("span")?;
                rw.end_element("button")?;
                rw.start_element("ul")?;
                rw.write_attribute("class", "dropdown-menu")?;
                rw.write_attribute("role", "menu")
            }
            NodeKind::NavBar { brand } => {
                let rw = &mut cx.writer;
                rw.start_element("nav")?;
                rw.write_attribute("id", &client_id)?;
                rw.write_attribute(
                    "class",
                    &join_classes("navbar navbar-default", node.style_class.as_deref()),
                )?;
                if let Some(style) = &node.style {
                    rw.write_attribute("style", style)?;
                }
                rw.write_attribute("role", "navigation")?;
                rw.start_element("div")?;
                rw.write_attribute("class", "container-fluid")?;
                if let Some(brand) = brand {
                    rw.start_element("div")?;
                    rw.write_attribute("class", "navbar-header")?;
                    rw.start_element("a")?;
                    rw.write_attribute("class", "navbar-brand")?;
                    rw.write_attribute("href", "#")?;
                    rw.write_text(brand)?;
                    rw.end_element("a")?;
                    rw.end_element("div")?;
                }
                Ok(())
            }
            other => Err(unsupported(other)),
        }
    }

    fn encode_end(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        if let Some((tag, _)) = list_shape(&node.kind) {
            cx.writer.end_element(tag)?;
            let client_id = cx.tree.client_id(id);
            cx.tooltips.activate_tooltips(&client_id, node);
            return Ok(());
        }

        let rw = &mut cx.writer;
        match &node.kind {
            NodeKind::ViewRoot | NodeKind::Group | NodeKind::Repeat | NodeKind::Text { .. } => {
                Ok(())
            }
            NodeKind::Form => rw.end_element("form"),
            NodeKind::NavLink { .. } => match link_item_tag(cx.tree, id) {
                Some(tag) => rw.end_element(tag),
                None => Ok(()),
            },
            NodeKind::DropButton { .. } => {
                rw.end_element("ul")?;
                rw.end_element("div")
            }
            NodeKind::NavBar { .. } => {
                rw.end_element("div")?;
                rw.end_element("nav")
            }
            other => Err(unsupported(other)),
        }
    }
}

/// Links inside menus and nav lists are wrapped in `li`.
fn link_item_tag(tree: &crate::tree::ComponentTree, id: NodeId) -> Option<&'static str> {
    let context = classify(tree, id);
    if context.is_flyout || context.container_kind != ContainerKind::Plain {
        Some("li")
    } else {
        None
    }
}

fn write_common(rw: &mut ResponseWriter<'_>, node: &Node) -> MarkupResult<()> {
    if let Some(class) = node.style_class.as_deref().filter(|c| !c.trim().is_empty()) {
        rw.write_attribute("class", class.trim())?;
    }
    if let Some(style) = &node.style {
        rw.write_attribute("style", style)?;
    }
    Ok(())
}

fn unsupported(kind: &NodeKind) -> MarkupError {
    MarkupError::InvalidComponent {
        component: kind.name().to_string(),
        reason: "not handled by BasicRenderer".to_string(),
    }
}
