use crate::error::{MarkupError, MarkupResult};
use crate::tree::ComponentTree;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const MAX_NESTING_DEPTH: usize = 32;

fn id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s:\x00-\x1F\x7F]+$").expect("id regex is valid"))
}

/// Validate a built tree before rendering.
///
/// Checks that the body is non-empty, explicit ids are well formed, client
/// ids are unique and nesting stays within bounds.
pub fn validate_tree(tree: &ComponentTree) -> MarkupResult<()> {
    if tree.children(tree.root()).is_empty() {
        return Err(MarkupError::EmptyDocument);
    }

    let mut seen: HashSet<String> = HashSet::new();
    for id in tree.ids().filter(|id| *id != tree.root()) {
        let node = tree.node(id)?;
        if let Some(explicit) = &node.id {
            validate_id(explicit)?;
        }

        if tree.depth(id) > MAX_NESTING_DEPTH {
            return Err(MarkupError::MaxNestingDepthExceeded {
                max_depth: MAX_NESTING_DEPTH,
            });
        }

        let client_id = tree.client_id(id);
        if !seen.insert(client_id.clone()) {
            return Err(MarkupError::DuplicateId { id: client_id });
        }
    }
    Ok(())
}

pub fn validate_id(id: &str) -> MarkupResult<()> {
    if id_regex().is_match(id) {
        Ok(())
    } else {
        Err(MarkupError::InvalidId { id: id.to_string() })
    }
}
