//! Single-pass tree traversal.

use crate::ast::SyntaxNode;

/// Walks the tree rooted at `node` in depth-first, left-to-right
/// pre-order, calling `f` on every node exactly once.
///
/// The order is deterministic and matches source textual order, so
/// anything accumulated during the walk is stable across repeated runs
/// on the same tree.
pub fn visit<'a, F>(node: &'a SyntaxNode, f: &mut F)
where
    F: FnMut(&'a SyntaxNode),
{
    f(node);
    for child in node.children() {
        visit(child, f);
    }
}
