//! Whole-tree and whole-page rendering with the default collaborators.

use std::io::Write;

use tracing::debug;

use crate::config::RenderOptions;
use crate::document::parse_document;
use crate::error::MarkupResult;
use crate::render::{encode_all, script, RenderContext};
use crate::services::{BootstrapTooltips, GlyphIcons, GridResponsive};
use crate::tree::ComponentTree;
use crate::validator::validate_tree;
use crate::writer::{escape_attribute, escape_text};

/// Render every node below the root, followed by the tooltip activation
/// block when tooltips were scheduled and `options` allows it.
pub fn render_tree(
    tree: &ComponentTree,
    options: &RenderOptions,
    out: &mut dyn Write,
) -> MarkupResult<()> {
    let icons = GlyphIcons;
    let responsive = GridResponsive;
    let mut tooltips = BootstrapTooltips::new();
    let mut cx = RenderContext::new(tree, out, &icons, &responsive, &mut tooltips);

    encode_all(&mut cx, tree.root())?;

    let pending = cx.tooltips.take_pending();
    if options.activate_tooltips && !pending.is_empty() {
        debug!(count = pending.len(), "activating tooltips");
        script::encode_tooltip_activation(&mut cx.writer, &pending)?;
    }
    cx.writer.flush()
}

/// Parse, validate and render a YAML document.
pub fn render_document(yaml: &str, options: &RenderOptions) -> MarkupResult<String> {
    let doc = parse_document(yaml)?;
    let tree = doc.to_tree()?;
    validate_tree(&tree)?;
    debug!(nodes = tree.len(), "rendering document");

    let mut body = Vec::new();
    render_tree(&tree, options, &mut body)?;
    let body = String::from_utf8_lossy(&body).into_owned();

    if !options.full_page {
        return Ok(body);
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape_attribute(&options.lang),
        escape_text(doc.title().unwrap_or("Page")),
        body
    ))
}
