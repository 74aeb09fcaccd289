use bootmark::render::{DropMenuRenderer, ModalRenderer};
use bootmark::services::{BootstrapTooltips, GlyphIcons, GridResponsive};
use bootmark::{
    encode_all, load_tree, render_document, render_tree, ComponentTree, MarkupError, MenuNode,
    ModalNode, Node, NodeId, NodeKind, RenderContext, RenderOptions, Renderer,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(filename);
    path
}

fn menu_node(value: &str) -> Node {
    Node::new(NodeKind::DropMenu(MenuNode {
        value: Some(value.to_string()),
        ..MenuNode::default()
    }))
}

/// Output of the begin phase, the end phase, and the open elements left
/// between them.
struct Phases {
    begin: String,
    end: String,
    open_between: Vec<&'static str>,
}

fn render_phases(tree: &ComponentTree, renderer: &dyn Renderer, node: NodeId) -> Phases {
    let shared = SharedBuf::default();
    let mut out = shared.clone();
    let mut tooltips = BootstrapTooltips::new();
    let mut cx = RenderContext::new(tree, &mut out, &GlyphIcons, &GridResponsive, &mut tooltips);

    renderer.encode_begin(&mut cx, node).unwrap();
    let open_between = cx.writer.open_elements().to_vec();
    cx.writer.flush().unwrap();
    let split = shared.0.borrow().len();

    renderer.encode_end(&mut cx, node).unwrap();
    cx.writer.flush().unwrap();
    assert!(cx.writer.is_balanced(), "end phase must close everything begin opened");

    let bytes = shared.0.borrow();
    Phases {
        begin: String::from_utf8(bytes[..split].to_vec()).unwrap(),
        end: String::from_utf8(bytes[split..].to_vec()).unwrap(),
        open_between,
    }
}

/// Output sink the test can read while a render context still holds it.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn render_fragment(tree: &ComponentTree) -> String {
    let mut buf = Vec::new();
    render_tree(tree, &RenderOptions::fragment(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// --- Menu scenarios ---

#[test]
fn test_menu_golden_markup() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let x = tree.insert(root, menu_node("File").with_id("X")).unwrap();

    let phases = render_phases(&tree, &DropMenuRenderer, x);
    assert_eq!(
        phases.begin,
        "<span id=\"X\" class=\"dropdown\">\
         <a id=\"dtLX\" class=\"dropdown-toggle\" href=\"#\" role=\"button\" data-toggle=\"dropdown\">File<b class=\"caret\"></b></a>\
         <ul class=\"dropdown-menu\" role=\"menu\" aria-labelledby=\"dtLX\">"
    );
    assert_eq!(phases.open_between, vec!["span", "ul"]);
}

#[test]
fn test_menu_full_render_with_items() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let x = tree.insert(root, menu_node("File").with_id("X")).unwrap();
    tree.insert(
        x,
        Node::new(NodeKind::NavLink {
            value: "Open".into(),
            href: Some("#open".into()),
        })
        .with_id("o"),
    )
    .unwrap();

    assert_eq!(
        render_fragment(&tree),
        "<span id=\"X\" class=\"dropdown\">\
         <a id=\"dtLX\" class=\"dropdown-toggle\" href=\"#\" role=\"button\" data-toggle=\"dropdown\">File<b class=\"caret\"></b></a>\
         <ul class=\"dropdown-menu\" role=\"menu\" aria-labelledby=\"dtLX\">\
         <li><a id=\"o\" href=\"#open\">Open</a></li>\
         </ul></span>"
    );
}

#[test]
fn test_menu_tag_symmetry_in_every_context() {
    let parents = [
        NodeKind::Container,
        NodeKind::Form,
        NodeKind::Group,
        NodeKind::Repeat,
        NodeKind::NavBar { brand: None },
        NodeKind::NavBarLinks,
        NodeKind::TabLinks,
        NodeKind::PillLinks,
        NodeKind::ListLinks,
        NodeKind::DropButton { value: "b".into() },
        NodeKind::FlyOutMenu,
        NodeKind::DropMenu(MenuNode::default()),
    ];
    for parent_kind in parents {
        let mut tree = ComponentTree::new();
        let root = tree.root();
        let parent = tree.insert(root, Node::new(parent_kind.clone())).unwrap();
        let m = tree.insert(parent, menu_node("M").with_id("m")).unwrap();

        let phases = render_phases(&tree, &DropMenuRenderer, m);
        let tag = phases.open_between[0];
        assert!(
            phases.end.ends_with(&format!("</ul></{}>", tag)),
            "parent {}: end phase {:?} does not close <{}>",
            parent_kind.name(),
            phases.end,
            tag
        );
    }
}

#[test]
fn test_flyout_menu_markup() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let flyout = tree.insert(root, Node::new(NodeKind::FlyOutMenu)).unwrap();
    let div = tree.insert(flyout, Node::new(NodeKind::Container)).unwrap();
    let m = tree
        .insert(
            div,
            Node::new(NodeKind::DropMenu(MenuNode {
                value: Some("More".into()),
                drop: Some("up".into()),
                ..MenuNode::default()
            }))
            .with_id("m"),
        )
        .unwrap();

    let phases = render_phases(&tree, &DropMenuRenderer, m);
    assert!(phases.begin.starts_with("<li id=\"m\" class=\"dropdown-submenu\">"));
    assert!(phases.begin.contains("<a id=\"dtLm\" class=\"dropdown-submenu\" href=\"#\" role=\"button\">More</a>"));
    assert!(!phases.begin.contains("caret"));
    assert!(!phases.begin.contains("data-toggle"));
    assert_eq!(phases.end, "</ul></li>");
}

#[test]
fn test_nested_menu_keeps_toggle_but_drops_caret() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let outer = tree.insert(root, menu_node("Outer").with_id("o")).unwrap();
    let inner = tree.insert(outer, menu_node("Inner").with_id("i")).unwrap();

    let phases = render_phases(&tree, &DropMenuRenderer, inner);
    assert!(phases.begin.starts_with("<li id=\"i\" class=\"dropdown-submenu dropdown\">"));
    assert!(phases.begin.contains("data-toggle=\"dropdown\">Inner</a>"));
    assert!(!phases.begin.contains("caret"));
}

#[test]
fn test_invalid_direction_normalizes_to_down() {
    for drop in [None, Some("sideways"), Some(""), Some("Up")] {
        let mut tree = ComponentTree::new();
        let root = tree.root();
        let m = tree
            .insert(
                root,
                Node::new(NodeKind::DropMenu(MenuNode {
                    drop: drop.map(str::to_string),
                    ..MenuNode::default()
                }))
                .with_id("m")
                .with_style_class("custom"),
            )
            .unwrap();
        let phases = render_phases(&tree, &DropMenuRenderer, m);
        assert!(
            phases.begin.starts_with("<span id=\"m\" class=\"custom dropdown\">"),
            "drop {:?}: {}",
            drop,
            phases.begin
        );
    }
}

#[test]
fn test_menu_content_class_and_style() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let m = tree
        .insert(
            root,
            Node::new(NodeKind::DropMenu(MenuNode {
                value: Some("V".into()),
                content_class: Some("pull-right".into()),
                content_style: Some("min-width:10em".into()),
                ..MenuNode::default()
            }))
            .with_id("m")
            .with_style("color:red"),
        )
        .unwrap();
    let phases = render_phases(&tree, &DropMenuRenderer, m);
    assert!(phases.begin.starts_with("<span id=\"m\" class=\"dropdown\" style=\"color:red\">"));
    assert!(phases.begin.ends_with(
        "<ul class=\"dropdown-menu pull-right\" style=\"min-width:10em\" role=\"menu\" aria-labelledby=\"dtLm\">"
    ));
}

// --- Modal scenarios ---

#[test]
fn test_modal_golden_markup() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let x = tree
        .insert(
            root,
            Node::new(NodeKind::Modal(ModalNode {
                title: Some("Confirm".into()),
                ..ModalNode::default()
            }))
            .with_id("X"),
        )
        .unwrap();

    let phases = render_phases(&tree, &ModalRenderer, x);
    assert_eq!(
        phases.begin,
        "<div id=\"X\" class=\"modal\" role=\"dialog\" tabindex=\"-1\" aria-labelledby=\"X_Label\" aria-hidden=\"true\">\
         <div class=\"modal-dialog\"><div class=\"modal-content\">\
         <div id=\"X_header\" class=\"modal-header\">\
         <button type=\"button\" class=\"close\" data-dismiss=\"modal\">&times;</button>\
         <h4 id=\"X_Label\">Confirm</h4></div>\
         <div id=\"X_body\" class=\"modal-body\">"
    );
    assert_eq!(phases.open_between, vec!["div", "div", "div", "div"]);
    assert_eq!(
        phases.end,
        "</div></div></div></div>\
         <script id=\"X_js\" type=\"text/javascript\">$(function(){$('#X').modal({ show: false });});</script>"
    );
    assert_eq!(phases.end.matches("<script").count(), 1);
}

#[test]
fn test_modal_not_closable_has_no_close_control() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let x = tree
        .insert(
            root,
            Node::new(NodeKind::Modal(ModalNode {
                closable: false,
                header_class: Some("bg-info".into()),
                header_style: Some("padding:0".into()),
                content_class: Some("lead".into()),
                content_style: Some("margin:0".into()),
                ..ModalNode::default()
            }))
            .with_id("X"),
        )
        .unwrap();

    let phases = render_phases(&tree, &ModalRenderer, x);
    assert!(!phases.begin.contains("<button"));
    assert!(!phases.begin.contains("<h4"));
    assert!(phases.begin.contains(
        "<div id=\"X_header\" class=\"modal-header bg-info\" style=\"padding:0\"></div>"
    ));
    assert!(phases
        .begin
        .ends_with("<div id=\"X_body\" class=\"modal-body lead\" style=\"margin:0\">"));
}

#[test]
fn test_modal_footer_between_body_and_content_close() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let x = tree
        .insert(root, Node::new(NodeKind::Modal(ModalNode::default())).with_id("X"))
        .unwrap();
    tree.insert(x, Node::new(NodeKind::Text { text: "Body".into() }))
        .unwrap();
    let group = tree.insert_footer(x, Node::new(NodeKind::Group)).unwrap();
    tree.insert(group, Node::new(NodeKind::Text { text: "Yes".into() }))
        .unwrap();
    tree.insert(group, Node::new(NodeKind::Text { text: "No".into() }))
        .unwrap();

    let html = render_fragment(&tree);
    assert_eq!(html.matches("modal-footer").count(), 1);
    assert!(html.contains(
        "<div id=\"X_body\" class=\"modal-body\">Body</div>\
         <div id=\"X_footer\" class=\"modal-footer\">YesNo</div>\
         </div></div></div><script id=\"X_js\""
    ));
}

#[test]
fn test_modal_inside_form_escapes_client_id() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let form = tree.insert(root, Node::new(NodeKind::Form).with_id("f")).unwrap();
    tree.insert(form, Node::new(NodeKind::Modal(ModalNode::default())).with_id("dlg"))
        .unwrap();

    let html = render_fragment(&tree);
    assert!(html.contains("<div id=\"f:dlg\" class=\"modal\""));
    assert!(html.contains(
        "<script id=\"f:dlg_js\" type=\"text/javascript\">$(function(){$('#f\\\\:dlg').modal({ show: false });});</script>"
    ));
}

#[test]
fn test_modal_script_selector_stays_an_id_lookup() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    tree.insert(root, Node::new(NodeKind::Modal(ModalNode::default())).with_id("a b\"c"))
        .unwrap();

    let html = render_fragment(&tree);
    assert!(html.contains("$('#a\\\\ b\\\\\"c').modal({ show: false });"));
}

#[test]
fn test_modal_ignores_footer_it_does_not_own() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let form = tree.insert(root, Node::new(NodeKind::Form).with_id("f")).unwrap();
    let sibling = tree
        .insert(form, Node::new(NodeKind::Text { text: "elsewhere".into() }))
        .unwrap();
    tree.insert(
        form,
        Node::new(NodeKind::Modal(ModalNode {
            footer: Some(sibling),
            ..ModalNode::default()
        }))
        .with_id("d"),
    )
    .unwrap();

    let html = render_fragment(&tree);
    assert!(!html.contains("modal-footer"));
    assert_eq!(html.matches("elsewhere").count(), 1);
}

// --- Cross-cutting properties ---

#[test]
fn test_unrendered_nodes_produce_nothing() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let m = tree
        .insert(root, menu_node("Hidden").with_id("m").with_rendered(false))
        .unwrap();
    tree.insert(m, Node::new(NodeKind::Text { text: "child".into() }))
        .unwrap();
    let d = tree
        .insert(
            root,
            Node::new(NodeKind::Modal(ModalNode::default()))
                .with_id("d")
                .with_rendered(false),
        )
        .unwrap();

    let menu = render_phases(&tree, &DropMenuRenderer, m);
    assert_eq!(menu.begin, "");
    assert_eq!(menu.end, "");
    let modal = render_phases(&tree, &ModalRenderer, d);
    assert_eq!(modal.begin, "");
    assert_eq!(modal.end, "");

    assert_eq!(render_fragment(&tree), "");
}

#[test]
fn test_two_passes_are_byte_identical() {
    let path = get_fixture_path("navbar-page.yaml");
    let yaml = fs::read_to_string(&path).unwrap();
    let tree = load_tree(&yaml).unwrap();

    let first = render_fragment(&tree);
    let second = render_fragment(&tree);
    assert_eq!(first, second);
}

struct FailingWriter {
    remaining: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_propagates() {
    let mut tree = ComponentTree::new();
    let root = tree.root();
    let m = tree.insert(root, menu_node("File").with_id("X")).unwrap();

    let mut out = FailingWriter { remaining: 10 };
    let mut tooltips = BootstrapTooltips::new();
    let mut cx = RenderContext::new(&tree, &mut out, &GlyphIcons, &GridResponsive, &mut tooltips);
    let err = encode_all(&mut cx, m).unwrap_err();
    match err {
        MarkupError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

// --- Documents ---

#[test]
fn test_navbar_page_document() {
    let path = get_fixture_path("navbar-page.yaml");
    let yaml = fs::read_to_string(&path).unwrap();
    let html = render_document(&yaml, &RenderOptions::default()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Workspace</title>"));
    // Menu inside nav links is an item with a tooltip.
    assert!(html.contains(
        "<li id=\"main:file\" class=\"dropdown\" title=\"File operations\" data-toggle=\"tooltip\" data-placement=\"bottom\" data-container=\"body\">"
    ));
    assert!(html.contains("<span class=\"glyphicon glyphicon-file\"></span> File<b class=\"caret\"></b>"));
    // Nested menu.
    assert!(html.contains("<li id=\"main:recent\" class=\"dropdown-submenu dropup\">"));
    // Flyout item.
    assert!(html.contains("<li id=\"main:more\" class=\"dropdown-submenu\">"));
    // Modal without close button, with grouped footer.
    assert!(html.contains("<div class=\"modal-dialog modal-sm\">"));
    assert!(html.contains("<div id=\"main:confirm_footer\" class=\"modal-footer\">Cancel / Delete</div>"));
    // Tooltip activation after the tree.
    assert!(html.contains("$('#main\\\\:file').tooltip();"));
    assert!(html.trim_end().ends_with("</body>\n</html>"));
}

#[test]
fn test_tooltip_activation_can_be_disabled() {
    let path = get_fixture_path("navbar-page.yaml");
    let yaml = fs::read_to_string(&path).unwrap();
    let options = RenderOptions {
        full_page: false,
        activate_tooltips: false,
        ..RenderOptions::default()
    };
    let html = render_document(&yaml, &options).unwrap();
    assert!(!html.contains(".tooltip()"));
    assert!(html.starts_with("<form id=\"main\" method=\"post\">"));
}

#[test]
fn test_duplicate_id_document() {
    let yaml = fs::read_to_string(get_fixture_path("duplicate-id.yaml")).unwrap();
    let result = load_tree(&yaml);
    assert!(matches!(result, Err(MarkupError::DuplicateId { ref id }) if id == "same"));
}

#[test]
fn test_invalid_id_document() {
    let yaml = fs::read_to_string(get_fixture_path("invalid-id.yaml")).unwrap();
    let result = render_document(&yaml, &RenderOptions::default());
    assert!(matches!(result, Err(MarkupError::InvalidId { .. })));
}
