//! AST-shaping mutators.
//!
//! Each function returns a closure for [`Parser::with_mutator`]. Returning
//! `None` from a mutator drops the node, and sequences skip dropped nodes.
//!
//! [`Parser::with_mutator`]: ancora_combinators::Parser::with_mutator

use ancora_foundation::{AstNode, NodeValue, collapse_escape_sequences};

/// Replaces a wrapper node with its first child.
///
/// A wrapper with no children (for example an unmatched `Maybe`) is dropped.
pub fn collapse() -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    |node: AstNode| node.children.into_iter().next()
}

/// Replaces a node with its child at `index`, dropping it if there is none.
pub fn pass_child(
    index: usize,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    move |node: AstNode| node.children.into_iter().nth(index)
}

/// Copies the first value found under child `index` onto the node itself.
///
/// The child stays in place; pair with [`discard_child`] to remove it.
pub fn child_value(
    index: usize,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    move |mut node: AstNode| {
        let value = node
            .children
            .get(index)
            .and_then(AstNode::first_value)
            .cloned();
        if value.is_some() {
            node.value = value;
        }
        Some(node)
    }
}

/// Removes the child at `index`, if present.
pub fn discard_child(
    index: usize,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    move |mut node: AstNode| {
        if index < node.children.len() {
            node.children.remove(index);
        }
        Some(node)
    }
}

/// Removes every child.
pub fn discard_children() -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    |mut node: AstNode| {
        node.children.clear();
        Some(node)
    }
}

/// Leaves the node unchanged.
pub fn identity() -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    Some
}

/// Drops the node entirely.
pub fn discard() -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    |_: AstNode| None
}

/// Retags the node.
pub fn rename(
    node_type: impl Into<String>,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    let node_type = node_type.into();
    move |node: AstNode| Some(node.with_type(node_type.clone()))
}

/// Splices the children of child `index` into the node in its place.
pub fn flatten_child(
    index: usize,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    move |mut node: AstNode| {
        if index < node.children.len() {
            let tail = node.children.split_off(index + 1);
            if let Some(inner) = node.children.pop() {
                node.children.extend(inner.children);
            }
            node.children.extend(tail);
        }
        Some(node)
    }
}

/// Splices the children of every child tagged `node_type` into the node in
/// its place.
pub fn flatten_type(
    node_type: impl Into<String>,
) -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    let node_type = node_type.into();
    move |mut node: AstNode| {
        let children = std::mem::take(&mut node.children);
        for child in children {
            if child.node_type == node_type {
                node.children.extend(child.children);
            } else {
                node.children.push(child);
            }
        }
        Some(node)
    }
}

/// Decodes backslash escapes in the node's value.
pub fn collapse_escapes() -> impl Fn(AstNode) -> Option<AstNode> + Clone + Send + Sync + 'static {
    |mut node: AstNode| {
        if let Some(value) = node.value.take() {
            node.value = Some(NodeValue::Str(collapse_escape_sequences(&value.as_text())));
        }
        Some(node)
    }
}
