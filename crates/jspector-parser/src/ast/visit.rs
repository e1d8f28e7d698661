//! In-place tree replacement.
//!
//! [`replace`] walks the tree top-down with an enter-only visitor. When the
//! visitor returns a replacement, the replacement takes the node's slot and
//! traversal continues into the replacement's own children, so freshly
//! synthesized subtrees are visited by the same pass. Children are always
//! visited in their declared order.

use super::{Node, NodeKind};

/// Enter-only rewrite visitor.
pub trait Visitor {
    /// Called once per node before its children. Returning `Some(node)`
    /// replaces the visited node; the visitor may also edit `node` in place
    /// and return `None`.
    fn enter(&mut self, node: &mut Node, parent: Option<NodeKind>) -> Option<Node>;
}

impl<F> Visitor for F
where
    F: FnMut(&mut Node, Option<NodeKind>) -> Option<Node>,
{
    fn enter(&mut self, node: &mut Node, parent: Option<NodeKind>) -> Option<Node> {
        self(node, parent)
    }
}

/// Run `visitor` over `root` and everything below it.
pub fn replace<V: Visitor + ?Sized>(root: &mut Node, visitor: &mut V) {
    replace_node(root, None, visitor);
}

fn replace_node<V: Visitor + ?Sized>(node: &mut Node, parent: Option<NodeKind>, visitor: &mut V) {
    if let Some(replacement) = visitor.enter(node, parent) {
        *node = replacement;
    }
    let kind = node.kind();
    for child in node.children_mut() {
        replace_node(child, Some(kind), visitor);
    }
}

/// Visit every node read-only, top-down, in declared order.
pub fn walk<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    f(node);
    for child in node.children() {
        walk(child, f);
    }
}

#[cfg(test)]
#[path = "../../tests/visit_tests.rs"]
mod tests;
