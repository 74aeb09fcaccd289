//! Class composition for the menu widget.

use crate::tree::{ComponentTree, NodeId};

/// Opening direction of a drop menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl Direction {
    /// Unset or unrecognized values fall back to [`Direction::Down`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("up") => Direction::Up,
            _ => Direction::Down,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Icon placement relative to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconAlign {
    #[default]
    Left,
    Right,
}

impl IconAlign {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("right") => IconAlign::Right,
            _ => IconAlign::Left,
        }
    }
}

/// Class attribute of a drop menu wrapper.
///
/// Order: user class, responsive classes, `dropdown-submenu` (flyout or
/// nested menu), `drop<direction>`. Flyout items stop after
/// `dropdown-submenu`.
pub fn compose_menu_class(
    tree: &ComponentTree,
    node: NodeId,
    responsive: &str,
    is_flyout: bool,
) -> String {
    let Some(n) = tree.get(node) else {
        return String::new();
    };
    let mut tokens: Vec<String> = Vec::new();
    push_trimmed(&mut tokens, n.style_class.as_deref().unwrap_or(""));
    push_trimmed(&mut tokens, responsive);

    if is_flyout {
        tokens.push("dropdown-submenu".to_string());
        return tokens.join(" ");
    }
    if crate::context::parent_is_menu(tree, node) {
        tokens.push("dropdown-submenu".to_string());
    }

    let direction = Direction::parse(n.as_menu().and_then(|m| m.drop.as_deref()));
    tokens.push(format!("drop{}", direction.as_str()));
    tokens.join(" ").trim().to_string()
}

/// `base` followed by `extra` when it is set and non-blank.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

fn push_trimmed(tokens: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        tokens.push(value.to_string());
    }
}
