//! Retained component tree.
//!
//! Nodes live in a flat arena owned by [`ComponentTree`] and refer to each
//! other through [`NodeId`]s. Parent links are set once at insertion and are
//! never rewritten, so renderers can walk the ancestor chain freely while a
//! render pass is in progress.

use serde::{Deserialize, Serialize};

use crate::error::{MarkupError, MarkupResult};

/// Handle to a node inside a [`ComponentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Tooltip attached to a node; rendered by the tooltip collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Grid spans and visibility used to derive responsive classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Responsive {
    pub col_xs: Option<u8>,
    pub col_sm: Option<u8>,
    pub col_md: Option<u8>,
    pub col_lg: Option<u8>,
    /// Space separated breakpoint names (`xs sm md lg`) the node is hidden on.
    pub hidden: Option<String>,
}

/// Dropdown menu attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuNode {
    /// Label text of the toggle.
    pub value: Option<String>,
    pub icon: Option<String>,
    /// Font Awesome icon; wins over `icon` when both are set.
    pub icon_awesome: Option<String>,
    /// `left` or `right`; anything else means `left`.
    pub icon_align: Option<String>,
    pub icon_size: Option<String>,
    pub icon_rotate: Option<String>,
    pub icon_flip: Option<String>,
    pub icon_spin: bool,
    /// `up` or `down`; anything else means `down`.
    pub drop: Option<String>,
    pub content_class: Option<String>,
    pub content_style: Option<String>,
}

/// Modal dialog attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalNode {
    pub title: Option<String>,
    /// Clicking the backdrop closes the dialog.
    pub backdrop: bool,
    pub close_on_escape: bool,
    /// Render the `×` close button in the header.
    pub closable: bool,
    /// Size modifier appended to `modal-dialog`, e.g. `modal-lg`.
    pub size: Option<String>,
    pub header_class: Option<String>,
    pub header_style: Option<String>,
    pub content_class: Option<String>,
    pub content_style: Option<String>,
    /// Separately owned footer subtree. Only [`ComponentTree::insert_footer`]
    /// sets it; a value present on insertion is dropped.
    #[serde(skip)]
    pub footer: Option<NodeId>,
}

impl Default for ModalNode {
    fn default() -> Self {
        Self {
            title: None,
            backdrop: true,
            close_on_escape: true,
            closable: true,
            size: None,
            header_class: None,
            header_style: None,
            content_class: None,
            content_style: None,
            footer: None,
        }
    }
}

/// Closed set of component kinds known to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    ViewRoot,
    /// Naming container: prefixes descendant client ids with its own.
    Form,
    /// Renders its children only.
    Group,
    /// Repeating container marker; transparent for menu classification.
    Repeat,
    Container,
    Text { text: String },
    NavLink { value: String, href: Option<String> },
    DropButton { value: String },
    NavBar { brand: Option<String> },
    NavBarLinks,
    TabLinks,
    PillLinks,
    ListLinks,
    FlyOutMenu,
    DropMenu(MenuNode),
    Modal(ModalNode),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::ViewRoot => "ViewRoot",
            NodeKind::Form => "Form",
            NodeKind::Group => "Group",
            NodeKind::Repeat => "Repeat",
            NodeKind::Container => "Container",
            NodeKind::Text { .. } => "Text",
            NodeKind::NavLink { .. } => "NavLink",
            NodeKind::DropButton { .. } => "DropButton",
            NodeKind::NavBar { .. } => "NavBar",
            NodeKind::NavBarLinks => "NavBarLinks",
            NodeKind::TabLinks => "TabLinks",
            NodeKind::PillLinks => "PillLinks",
            NodeKind::ListLinks => "ListLinks",
            NodeKind::FlyOutMenu => "FlyOutMenu",
            NodeKind::DropMenu(_) => "DropMenu",
            NodeKind::Modal(_) => "Modal",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Explicit id; a `j_idt<index>` id is generated when absent.
    pub id: Option<String>,
    /// When false the node and its whole subtree produce no markup.
    pub rendered: bool,
    pub style: Option<String>,
    pub style_class: Option<String>,
    pub tooltip: Option<Tooltip>,
    pub responsive: Responsive,
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: None,
            rendered: true,
            style: None,
            style_class: None,
            tooltip: None,
            responsive: Responsive::default(),
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_style_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(Tooltip {
            text: text.into(),
            position: None,
        });
        self
    }

    pub fn with_rendered(mut self, rendered: bool) -> Self {
        self.rendered = rendered;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn as_menu(&self) -> Option<&MenuNode> {
        match &self.kind {
            NodeKind::DropMenu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn as_modal(&self) -> Option<&ModalNode> {
        match &self.kind {
            NodeKind::Modal(modal) => Some(modal),
            _ => None,
        }
    }

    fn clear_footer(&mut self) {
        if let NodeKind::Modal(modal) = &mut self.kind {
            modal.footer = None;
        }
    }
}

/// Arena holding every node of one view.
///
/// Index 0 is always the [`NodeKind::ViewRoot`]. Lookups by a [`NodeId`]
/// that was produced by a different tree panic, like slice indexing.
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: Vec<Node>,
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::ViewRoot)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Append `node` as the last child of `parent`.
    pub fn insert(&mut self, parent: NodeId, mut node: Node) -> MarkupResult<NodeId> {
        self.check(parent)?;
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        node.clear_footer();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Attach `node` as the footer slot of a modal.
    ///
    /// The footer's parent link points at the modal so ancestor lookups and
    /// client ids work as usual, but it is not one of the modal's children:
    /// the modal renders it itself in its end phase.
    pub fn insert_footer(&mut self, modal: NodeId, mut node: Node) -> MarkupResult<NodeId> {
        self.check(modal)?;
        match &self.nodes[modal.0].kind {
            NodeKind::Modal(m) if m.footer.is_none() => {}
            NodeKind::Modal(_) => {
                return Err(MarkupError::InvalidComponent {
                    component: "Modal".to_string(),
                    reason: "footer slot is already set".to_string(),
                });
            }
            other => {
                return Err(MarkupError::InvalidComponent {
                    component: other.name().to_string(),
                    reason: "only a Modal has a footer slot".to_string(),
                });
            }
        }

        let id = NodeId(self.nodes.len());
        node.parent = Some(modal);
        node.children.clear();
        node.clear_footer();
        self.nodes.push(node);
        if let NodeKind::Modal(m) = &mut self.nodes[modal.0].kind {
            m.footer = Some(id);
        }
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> MarkupResult<&Node> {
        self.nodes
            .get(id.0)
            .ok_or(MarkupError::UnknownNode { index: id.0 })
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn footer(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].as_modal().and_then(|m| m.footer)
    }

    /// Iterate strictly upward from `id`, parent first, root last.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.nodes[id.0].parent,
        }
    }

    /// Number of ancestors between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Id written to the markup for `id`.
    ///
    /// Nodes inside a [`NodeKind::Form`] are prefixed with the form's client
    /// id and `:`. The result depends only on the tree, so both render
    /// phases see the same value.
    pub fn client_id(&self, id: NodeId) -> String {
        let node = &self.nodes[id.0];
        let own = node
            .id
            .clone()
            .unwrap_or_else(|| format!("j_idt{}", id.0));
        let naming_container = self
            .ancestors(id)
            .find(|a| matches!(self.nodes[a.0].kind, NodeKind::Form));
        match naming_container {
            Some(form) => format!("{}:{}", self.client_id(form), own),
            None => own,
        }
    }

    fn check(&self, id: NodeId) -> MarkupResult<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(MarkupError::UnknownNode { index: id.0 })
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a ComponentTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.nodes[current.0].parent;
        Some(current)
    }
}
