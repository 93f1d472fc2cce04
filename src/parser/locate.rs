//! Locating the node that owns a text change.

use crate::base::SourceChange;
use crate::syntax::SyntaxNode;

/// Find the deepest node whose span contains the start of `change`.
///
/// Boundary convention: an offset sitting exactly between two adjacent
/// spans belongs to the *preceding* span (the node ending at the offset),
/// so an insertion at a leaf boundary gets first refusal from the handler
/// of the text it extends. The descent always takes the first matching
/// child, which makes the tie-break deterministic across runs.
///
/// Returns `None` when the offset lies outside the root's span; that only
/// happens for malformed or empty-rooted trees, and the caller treats it as
/// a rejection.
pub fn locate_owner(root: &SyntaxNode, change: &SourceChange) -> Option<SyntaxNode> {
    let offset = change.span.start();
    if !root.span().contains_inclusive(offset) {
        return None;
    }
    let mut node = root.clone();
    'descend: loop {
        for child in node.children() {
            if child.span().contains_inclusive(offset) {
                node = child.clone();
                continue 'descend;
            }
        }
        // No child claims the offset: this node is the most specific owner.
        // For well-formed trees that means a leaf; an interior node with a
        // coverage gap owns the change itself (and, with no handler, will
        // reject it).
        return Some(node);
    }
}
