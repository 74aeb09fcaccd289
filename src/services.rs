//! Collaborators the renderers delegate to: icons, tooltips and responsive
//! classes. Each is a trait so a host can swap in its own markup; the
//! provided implementations produce Bootstrap 3 markup.

use crate::error::MarkupResult;
use crate::tree::{Node, Responsive};
use crate::writer::ResponseWriter;

/// Icon to render inside a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec<'a> {
    pub name: &'a str,
    /// Font Awesome instead of glyphicons.
    pub awesome: bool,
    pub size: Option<&'a str>,
    pub rotate: Option<&'a str>,
    pub flip: Option<&'a str>,
    pub spin: bool,
}

pub trait IconEncoder {
    fn encode_icon(&self, rw: &mut ResponseWriter<'_>, icon: &IconSpec<'_>) -> MarkupResult<()>;
}

pub trait TooltipHandler {
    /// Write tooltip attributes onto the currently open start tag.
    fn generate_tooltip(&self, rw: &mut ResponseWriter<'_>, node: &Node) -> MarkupResult<()>;

    /// Schedule client-side activation for a node that finished rendering.
    fn activate_tooltips(&mut self, client_id: &str, node: &Node);

    /// Client ids scheduled so far, draining the queue.
    fn take_pending(&mut self) -> Vec<String>;
}

pub trait ResponsiveClasses {
    fn responsive_classes(&self, node: &Node) -> String;
}

/// Glyphicons and Font Awesome markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlyphIcons;

impl IconEncoder for GlyphIcons {
    fn encode_icon(&self, rw: &mut ResponseWriter<'_>, icon: &IconSpec<'_>) -> MarkupResult<()> {
        if !icon.awesome {
            rw.start_element("span")?;
            rw.write_attribute("class", &format!("glyphicon glyphicon-{}", icon.name))?;
            return rw.end_element("span");
        }

        let mut class = format!("fa fa-{}", icon.name);
        if let Some(size) = icon.size.filter(|s| !s.is_empty()) {
            class.push_str(&format!(" fa-{}", size));
        }
        if let Some(rotate) = icon.rotate.filter(|s| !s.is_empty()) {
            class.push_str(&format!(" fa-rotate-{}", rotate));
        }
        if let Some(flip) = icon.flip.filter(|s| !s.is_empty()) {
            class.push_str(&format!(" fa-flip-{}", flip));
        }
        if icon.spin {
            class.push_str(" fa-spin");
        }
        rw.start_element("i")?;
        rw.write_attribute("class", &class)?;
        rw.end_element("i")
    }
}

/// Bootstrap `data-toggle="tooltip"` attributes plus a queue of ids that
/// need `.tooltip()` called on them once the page loads.
#[derive(Debug, Default, Clone)]
pub struct BootstrapTooltips {
    pending: Vec<String>,
}

impl BootstrapTooltips {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}

impl TooltipHandler for BootstrapTooltips {
    fn generate_tooltip(&self, rw: &mut ResponseWriter<'_>, node: &Node) -> MarkupResult<()> {
        let Some(tooltip) = node.tooltip.as_ref().filter(|t| !t.text.is_empty()) else {
            return Ok(());
        };
        rw.write_attribute("title", &tooltip.text)?;
        rw.write_attribute("data-toggle", "tooltip")?;
        rw.write_attribute(
            "data-placement",
            tooltip.position.as_deref().unwrap_or("bottom"),
        )?;
        rw.write_attribute("data-container", "body")
    }

    fn activate_tooltips(&mut self, client_id: &str, node: &Node) {
        if node.tooltip.as_ref().is_some_and(|t| !t.text.is_empty()) {
            self.pending.push(client_id.to_string());
        }
    }

    fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

/// Bootstrap 3 grid classes.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridResponsive;

const BREAKPOINTS: [&str; 4] = ["xs", "sm", "md", "lg"];

impl ResponsiveClasses for GridResponsive {
    fn responsive_classes(&self, node: &Node) -> String {
        grid_classes(&node.responsive)
    }
}

fn grid_classes(r: &Responsive) -> String {
    let mut classes: Vec<String> = Vec::new();
    let spans = [r.col_xs, r.col_sm, r.col_md, r.col_lg];
    for (size, span) in BREAKPOINTS.iter().zip(spans) {
        if let Some(span) = span.filter(|s| (1..=12).contains(s)) {
            classes.push(format!("col-{}-{}", size, span));
        }
    }
    if let Some(hidden) = &r.hidden {
        for size in hidden.split_whitespace() {
            if BREAKPOINTS.contains(&size) {
                classes.push(format!("hidden-{}", size));
            }
        }
    }
    classes.join(" ")
}
