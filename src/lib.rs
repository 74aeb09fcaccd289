//! # Bootmark
//!
//! Two-phase Bootstrap markup rendering for a retained component tree.
//!
//! Every node is rendered in a *begin* phase, then its children, then an
//! *end* phase. The two interesting renderers are the drop menu, whose tag
//! and classes depend on its ancestors, and the modal dialog, whose nested
//! regions stay open across the children and close in reverse order with an
//! optional footer slot in between.
//!
//! ## Example
//! ```ignore
//! use bootmark::{render_document, RenderOptions};
//!
//! let yaml = r#"
//! body:
//!   - DropMenu:
//!       id: file
//!       value: File
//!       children:
//!         - NavLink: { value: Open, href: "#open" }
//! "#;
//!
//! let html = render_document(yaml, &RenderOptions::fragment()).expect("render");
//! assert!(html.starts_with(r#"<span id="file" class="dropdown">"#));
//! ```

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod page;
pub mod render;
pub mod services;
pub mod style;
pub mod tree;
pub mod validator;
pub mod writer;

// --- Core types ---
pub use config::RenderOptions;
pub use context::{AncestorContext, ContainerKind};
pub use document::{ComponentSpec, Document};
pub use error::{MarkupError, MarkupResult};
pub use render::{encode_all, RenderContext, Renderer};
pub use style::{Direction, IconAlign};
pub use tree::{ComponentTree, MenuNode, ModalNode, Node, NodeId, NodeKind};
pub use writer::ResponseWriter;

pub use page::{render_document, render_tree};

/// Parse a YAML document without building a tree.
pub fn parse_document(yaml: &str) -> MarkupResult<Document> {
    document::parse_document(yaml)
}

/// Parse a YAML document, build its tree and validate it.
pub fn load_tree(yaml: &str) -> MarkupResult<ComponentTree> {
    let tree = document::parse_document(yaml)?.to_tree()?;
    validator::validate_tree(&tree)?;
    Ok(tree)
}
