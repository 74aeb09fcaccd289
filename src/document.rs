use serde::{Deserialize, Serialize};

use crate::error::{MarkupError, MarkupResult};
use crate::tree::{ComponentTree, MenuNode, ModalNode, Node, NodeId, NodeKind, Responsive, Tooltip};

/// A YAML page description.
///
/// ```yaml
/// head:
///   title: Demo
/// body:
///   - DropMenu:
///       id: file
///       value: File
///       children:
///         - NavLink: { value: Open, href: "#open" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
    /// Components are written as single-key maps (`- Form: {...}`).
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub body: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Head {
    pub title: String,
}

/// Attributes shared by every component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_position: Option<String>,
    #[serde(flatten)]
    pub responsive: Responsive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentSpec {
    Form(ContainerSpec),
    Group(ContainerSpec),
    Repeat(ContainerSpec),
    Container(ContainerSpec),
    NavBarLinks(ContainerSpec),
    TabLinks(ContainerSpec),
    PillLinks(ContainerSpec),
    ListLinks(ContainerSpec),
    FlyOutMenu(ContainerSpec),
    NavBar(NavBarSpec),
    DropButton(DropButtonSpec),
    NavLink(NavLinkSpec),
    Text(TextSpec),
    DropMenu(DropMenuSpec),
    Modal(ModalSpec),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavBarSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropButtonSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLinkSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropMenuSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(flatten)]
    pub menu: MenuNode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalSpec {
    #[serde(flatten)]
    pub common: CommonSpec,
    #[serde(flatten)]
    pub modal: ModalNode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentSpec>,
    /// Footer slot content; several entries are wrapped in a `Group`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footer: Vec<ComponentSpec>,
}

impl ComponentSpec {
    pub fn common(&self) -> &CommonSpec {
        match self {
            ComponentSpec::Form(c)
            | ComponentSpec::Group(c)
            | ComponentSpec::Repeat(c)
            | ComponentSpec::Container(c)
            | ComponentSpec::NavBarLinks(c)
            | ComponentSpec::TabLinks(c)
            | ComponentSpec::PillLinks(c)
            | ComponentSpec::ListLinks(c)
            | ComponentSpec::FlyOutMenu(c) => &c.common,
            ComponentSpec::NavBar(n) => &n.common,
            ComponentSpec::DropButton(b) => &b.common,
            ComponentSpec::NavLink(l) => &l.common,
            ComponentSpec::Text(t) => &t.common,
            ComponentSpec::DropMenu(m) => &m.common,
            ComponentSpec::Modal(m) => &m.common,
        }
    }

    pub fn children(&self) -> &[ComponentSpec] {
        match self {
            ComponentSpec::Form(c)
            | ComponentSpec::Group(c)
            | ComponentSpec::Repeat(c)
            | ComponentSpec::Container(c)
            | ComponentSpec::NavBarLinks(c)
            | ComponentSpec::TabLinks(c)
            | ComponentSpec::PillLinks(c)
            | ComponentSpec::ListLinks(c)
            | ComponentSpec::FlyOutMenu(c) => &c.children,
            ComponentSpec::NavBar(n) => &n.children,
            ComponentSpec::DropButton(b) => &b.children,
            ComponentSpec::DropMenu(m) => &m.children,
            ComponentSpec::Modal(m) => &m.children,
            ComponentSpec::NavLink(_) | ComponentSpec::Text(_) => &[],
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            ComponentSpec::Form(_) => NodeKind::Form,
            ComponentSpec::Group(_) => NodeKind::Group,
            ComponentSpec::Repeat(_) => NodeKind::Repeat,
            ComponentSpec::Container(_) => NodeKind::Container,
            ComponentSpec::NavBarLinks(_) => NodeKind::NavBarLinks,
            ComponentSpec::TabLinks(_) => NodeKind::TabLinks,
            ComponentSpec::PillLinks(_) => NodeKind::PillLinks,
            ComponentSpec::ListLinks(_) => NodeKind::ListLinks,
            ComponentSpec::FlyOutMenu(_) => NodeKind::FlyOutMenu,
            ComponentSpec::NavBar(n) => NodeKind::NavBar {
                brand: n.brand.clone(),
            },
            ComponentSpec::DropButton(b) => NodeKind::DropButton {
                value: b.value.clone(),
            },
            ComponentSpec::NavLink(l) => NodeKind::NavLink {
                value: l.value.clone(),
                href: l.href.clone(),
            },
            ComponentSpec::Text(t) => NodeKind::Text {
                text: t.text.clone(),
            },
            ComponentSpec::DropMenu(m) => NodeKind::DropMenu(m.menu.clone()),
            ComponentSpec::Modal(m) => NodeKind::Modal(ModalNode {
                footer: None,
                ..m.modal.clone()
            }),
        }
    }

    pub fn to_node(&self) -> Node {
        let common = self.common();
        let mut node = Node::new(self.kind()).with_rendered(common.rendered.unwrap_or(true));
        node.id = common.id.clone();
        node.style = common.style.clone();
        node.style_class = common.style_class.clone();
        node.tooltip = common.tooltip.as_ref().map(|text| Tooltip {
            text: text.clone(),
            position: common.tooltip_position.clone(),
        });
        node.responsive = common.responsive.clone();
        node
    }
}

impl Document {
    /// Build the component tree described by this document.
    pub fn to_tree(&self) -> MarkupResult<ComponentTree> {
        let mut tree = ComponentTree::new();
        let root = tree.root();
        for spec in &self.body {
            let id = tree.insert(root, spec.to_node())?;
            attach(&mut tree, id, spec)?;
        }
        Ok(tree)
    }

    pub fn title(&self) -> Option<&str> {
        self.head.as_ref().map(|h| h.title.as_str())
    }
}

/// Insert the children and footer slot of an already inserted `spec`.
fn attach(tree: &mut ComponentTree, id: NodeId, spec: &ComponentSpec) -> MarkupResult<()> {
    for child in spec.children() {
        let child_id = tree.insert(id, child.to_node())?;
        attach(tree, child_id, child)?;
    }

    if let ComponentSpec::Modal(modal) = spec {
        match modal.footer.as_slice() {
            [] => {}
            [single] => {
                let footer = tree.insert_footer(id, single.to_node())?;
                attach(tree, footer, single)?;
            }
            many => {
                let group = tree.insert_footer(id, Node::new(NodeKind::Group))?;
                for child in many {
                    let child_id = tree.insert(group, child.to_node())?;
                    attach(tree, child_id, child)?;
                }
            }
        }
    }
    Ok(())
}

/// Parse a YAML document. An empty body is an error.
pub fn parse_document(yaml: &str) -> MarkupResult<Document> {
    let doc: Document = serde_yaml::from_str(yaml)?;
    if doc.body.is_empty() {
        return Err(MarkupError::EmptyDocument);
    }
    Ok(doc)
}
