//! Ancestor classification for menu rendering.
//!
//! Everything here is a pure function of the tree. The menu renderer calls
//! it from both its begin and its end phase and relies on getting the same
//! answer each time.

use crate::tree::{ComponentTree, NodeId, NodeKind};

/// How a node's effective parent treats menu children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Plain,
    /// Lays its children out as `li` items (nav bars, link lists, menus).
    MenuItemContainer,
    /// Flyout menu; also a menu-item container.
    FlyoutContainer,
}

impl ContainerKind {
    pub fn of(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::FlyOutMenu => ContainerKind::FlyoutContainer,
            NodeKind::DropButton { .. }
            | NodeKind::NavBar { .. }
            | NodeKind::TabLinks
            | NodeKind::PillLinks
            | NodeKind::ListLinks
            | NodeKind::NavBarLinks
            | NodeKind::DropMenu(_) => ContainerKind::MenuItemContainer,
            _ => ContainerKind::Plain,
        }
    }

    pub fn hosts_menu_items(self) -> bool {
        !matches!(self, ContainerKind::Plain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorContext {
    pub is_flyout: bool,
    pub container_kind: ContainerKind,
}

impl AncestorContext {
    /// Tag wrapping a drop menu in this context.
    pub fn wrapper_tag(&self) -> &'static str {
        if self.is_flyout || self.container_kind.hosts_menu_items() {
            "li"
        } else {
            "span"
        }
    }
}

pub fn classify(tree: &ComponentTree, node: NodeId) -> AncestorContext {
    AncestorContext {
        is_flyout: is_flyout(tree, node),
        container_kind: container_kind(tree, node),
    }
}

/// True if any ancestor below the view root is a flyout menu.
pub fn is_flyout(tree: &ComponentTree, node: NodeId) -> bool {
    tree.ancestors(node)
        .filter_map(|a| tree.get(a))
        .take_while(|n| !matches!(n.kind, NodeKind::ViewRoot))
        .any(|n| ContainerKind::of(&n.kind) == ContainerKind::FlyoutContainer)
}

/// Classify the effective parent, looking through a repeat marker.
pub fn container_kind(tree: &ComponentTree, node: NodeId) -> ContainerKind {
    let Some(mut parent) = tree.parent(node) else {
        return ContainerKind::Plain;
    };
    if matches!(tree.get(parent).map(|n| &n.kind), Some(NodeKind::Repeat)) {
        match tree.parent(parent) {
            Some(grandparent) => parent = grandparent,
            None => return ContainerKind::Plain,
        }
    }
    tree.get(parent)
        .map(|n| ContainerKind::of(&n.kind))
        .unwrap_or(ContainerKind::Plain)
}

/// True if the direct parent (no repeat skipping) is a drop menu.
pub fn parent_is_menu(tree: &ComponentTree, node: NodeId) -> bool {
    tree.parent(node)
        .and_then(|p| tree.get(p))
        .is_some_and(|p| matches!(p.kind, NodeKind::DropMenu(_)))
}
