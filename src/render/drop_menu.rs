//! `DropMenu`: a toggle anchor plus a `ul.dropdown-menu` holding the items.
//!
//! ```text
//! <span|li id class [style] [tooltip]>
//!   <a id="dtL{id}" class="dropdown-toggle|dropdown-submenu" ...>label [<b class="caret">]</a>
//!   <ul class="dropdown-menu" role="menu" aria-labelledby="dtL{id}">
//!     ...children...
//!   </ul>
//! </span|li>
//! ```

use tracing::debug;

use crate::context::{classify, parent_is_menu};
use crate::error::{MarkupError, MarkupResult};
use crate::services::IconSpec;
use crate::style::{compose_menu_class, join_classes, IconAlign};
use crate::tree::{MenuNode, Node, NodeId};

use super::{RenderContext, Renderer};

#[derive(Debug, Default, Clone, Copy)]
pub struct DropMenuRenderer;

impl Renderer for DropMenuRenderer {
    fn encode_begin(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        let menu = menu_of(node)?;
        let tree = cx.tree;
        let client_id = tree.client_id(id);

        let context = classify(tree, id);
        let tag = context.wrapper_tag();
        let responsive = cx.responsive.responsive_classes(node);
        let class = compose_menu_class(tree, id, &responsive, context.is_flyout);
        debug!(client_id = %client_id, tag, flyout = context.is_flyout, "drop menu begin");

        let rw = &mut cx.writer;
        rw.start_element(tag)?;
        rw.write_attribute("id", &client_id)?;
        rw.write_attribute("class", &class)?;
        if let Some(style) = &node.style {
            rw.write_attribute("style", style)?;
        }
        cx.tooltips.generate_tooltip(&mut cx.writer, node)?;

        let toggle_id = format!("dtL{}", client_id);
        let rw = &mut cx.writer;
        rw.start_element("a")?;
        rw.write_attribute("id", &toggle_id)?;
        rw.write_attribute(
            "class",
            if context.is_flyout {
                "dropdown-submenu"
            } else {
                "dropdown-toggle"
            },
        )?;
        if let Some(style) = &node.style {
            rw.write_attribute("style", style)?;
        }
        rw.write_attribute("href", "#")?;
        rw.write_attribute("role", "button")?;
        if !context.is_flyout {
            rw.write_attribute("data-toggle", "dropdown")?;
        }

        encode_label(cx, menu)?;

        // Nested and flyout menus show their submenu affordance through CSS.
        let rw = &mut cx.writer;
        if !context.is_flyout && !parent_is_menu(tree, id) {
            rw.start_element("b")?;
            rw.write_attribute("class", "caret")?;
            rw.end_element("b")?;
        }
        rw.end_element("a")?;

        rw.start_element("ul")?;
        rw.write_attribute(
            "class",
            &join_classes("dropdown-menu", menu.content_class.as_deref()),
        )?;
        if let Some(style) = &menu.content_style {
            rw.write_attribute("style", style)?;
        }
        rw.write_attribute("role", "menu")?;
        rw.write_attribute("aria-labelledby", &toggle_id)
    }

    fn encode_end(&self, cx: &mut RenderContext<'_>, id: NodeId) -> MarkupResult<()> {
        let node = cx.node(id)?;
        if !node.rendered {
            return Ok(());
        }
        let tree = cx.tree;

        cx.writer.end_element("ul")?;
        let tag = classify(tree, id).wrapper_tag();
        cx.writer.end_element(tag)?;

        let client_id = tree.client_id(id);
        debug!(client_id = %client_id, tag, "drop menu end");
        cx.tooltips.activate_tooltips(&client_id, node);
        Ok(())
    }
}

fn menu_of(node: &Node) -> MarkupResult<&MenuNode> {
    node.as_menu().ok_or_else(|| MarkupError::InvalidComponent {
        component: node.kind.name().to_string(),
        reason: "DropMenuRenderer only renders DropMenu nodes".to_string(),
    })
}

/// Awesome icon wins over the plain one.
fn menu_icon(menu: &MenuNode) -> Option<IconSpec<'_>> {
    let (name, awesome) = match (&menu.icon_awesome, &menu.icon) {
        (Some(fa), _) => (fa.as_str(), true),
        (None, Some(icon)) => (icon.as_str(), false),
        (None, None) => return None,
    };
    Some(IconSpec {
        name,
        awesome,
        size: menu.icon_size.as_deref(),
        rotate: menu.icon_rotate.as_deref(),
        flip: menu.icon_flip.as_deref(),
        spin: menu.icon_spin,
    })
}

fn encode_label(cx: &mut RenderContext<'_>, menu: &MenuNode) -> MarkupResult<()> {
    let value = menu.value.as_deref().unwrap_or("");
    let Some(icon) = menu_icon(menu) else {
        return cx.writer.write_text(value);
    };
    match IconAlign::parse(menu.icon_align.as_deref()) {
        IconAlign::Right => {
            cx.writer.write_text(&format!("{} ", value))?;
            cx.icons.encode_icon(&mut cx.writer, &icon)
        }
        IconAlign::Left => {
            cx.icons.encode_icon(&mut cx.writer, &icon)?;
            cx.writer.write_text(&format!(" {}", value))
        }
    }
}
