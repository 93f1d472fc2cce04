//! The persistent syntax node model.
//!
//! Nodes are immutable value trees shared by `Arc`: replacing one node
//! rebuilds only the path from the root down to it and shares every
//! off-path subtree by reference. Identity across rebuilds is
//! structural-content equality (kind, text, handler, children), not
//! position: absolute offsets go stale once an earlier sibling changes
//! length, so they are excluded from the identity notion.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::handler::EditHandler;
use super::kind::SyntaxKind;

/// An immutable node in a Weft syntax tree.
///
/// Cloning is cheap (an `Arc` bump). Two clones of the same allocation are
/// reference-identical ([`SyntaxNode::ptr_eq`]); two independently built
/// nodes with the same structural content compare equal (`==`).
#[derive(Clone)]
pub struct SyntaxNode {
    data: Arc<NodeData>,
}

struct NodeData {
    kind: SyntaxKind,
    span: TextRange,
    content_hash: u64,
    content: NodeContent,
}

enum NodeContent {
    Leaf {
        text: SmolStr,
        handler: Option<EditHandler>,
    },
    Interior {
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Create a leaf node backing `text` at `span`.
    ///
    /// The span length must equal the text length; [`SyntaxTreeBuilder`]
    /// guarantees this for trees it assembles and [`validate`] checks it for
    /// roots assembled by hand.
    ///
    /// [`SyntaxTreeBuilder`]: super::SyntaxTreeBuilder
    /// [`validate`]: super::validate
    pub fn leaf(
        kind: SyntaxKind,
        span: TextRange,
        text: impl Into<SmolStr>,
        handler: Option<EditHandler>,
    ) -> SyntaxNode {
        let text = text.into();
        let content_hash = hash_leaf(kind, &text, handler.as_ref());
        SyntaxNode {
            data: Arc::new(NodeData {
                kind,
                span,
                content_hash,
                content: NodeContent::Leaf { text, handler },
            }),
        }
    }

    /// Create an interior node; its span is the cover of its children.
    pub fn interior(kind: SyntaxKind, children: Vec<SyntaxNode>) -> SyntaxNode {
        let span = cover(&children);
        let content_hash = hash_interior(kind, &children);
        SyntaxNode {
            data: Arc::new(NodeData {
                kind,
                span,
                content_hash,
                content: NodeContent::Interior { children },
            }),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    /// Absolute span assigned at construction time. Spans of nodes untouched
    /// by an edit are not adjusted; see the module docs.
    pub fn span(&self) -> TextRange {
        self.data.span
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.data.content, NodeContent::Leaf { .. })
    }

    /// Leaf text; `None` for interior nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.data.content {
            NodeContent::Leaf { text, .. } => Some(text.as_str()),
            NodeContent::Interior { .. } => None,
        }
    }

    /// The edit-handler capability attached to this leaf, if any.
    pub fn handler(&self) -> Option<&EditHandler> {
        match &self.data.content {
            NodeContent::Leaf { handler, .. } => handler.as_ref(),
            NodeContent::Interior { .. } => None,
        }
    }

    /// Child nodes in source order; empty for leaves.
    pub fn children(&self) -> &[SyntaxNode] {
        match &self.data.content {
            NodeContent::Leaf { .. } => &[],
            NodeContent::Interior { children } => children,
        }
    }

    /// Structural content hash (kind, text, handler, children; spans
    /// excluded).
    pub fn content_hash(&self) -> u64 {
        self.data.content_hash
    }

    /// Reference identity: both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &SyntaxNode) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Structural-content equality; also exposed as `==`.
    pub fn content_eq(&self, other: &SyntaxNode) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.data.content_hash != other.data.content_hash || self.data.kind != other.data.kind {
            return false;
        }
        match (&self.data.content, &other.data.content) {
            (
                NodeContent::Leaf { text, handler },
                NodeContent::Leaf {
                    text: other_text,
                    handler: other_handler,
                },
            ) => text == other_text && handler == other_handler,
            (
                NodeContent::Interior { children },
                NodeContent::Interior {
                    children: other_children,
                },
            ) => {
                children.len() == other_children.len()
                    && children
                        .iter()
                        .zip(other_children)
                        .all(|(a, b)| a.content_eq(b))
            }
            _ => false,
        }
    }

    /// Replace `target` (matched by reference identity) with `replacement`,
    /// rebuilding the path from this root and sharing all other subtrees by
    /// reference.
    ///
    /// Rebuilt ancestors recompute their span as the cover of their
    /// children; untouched siblings keep their construction-time spans.
    /// Returns `None` when `target` is not part of this tree.
    pub fn replace_node(
        &self,
        target: &SyntaxNode,
        replacement: SyntaxNode,
    ) -> Option<SyntaxNode> {
        if self.ptr_eq(target) {
            return Some(replacement);
        }
        let children = match &self.data.content {
            NodeContent::Leaf { .. } => return None,
            NodeContent::Interior { children } => children,
        };
        for (idx, child) in children.iter().enumerate() {
            if let Some(new_child) = child.replace_node(target, replacement.clone()) {
                let mut new_children = children.clone();
                new_children[idx] = new_child;
                return Some(SyntaxNode::interior(self.data.kind, new_children));
            }
        }
        None
    }

    /// Lazy depth-first pre-order traversal of this subtree, including
    /// `self`. Restartable: each call returns a fresh iterator.
    pub fn descendants(&self) -> Descendants {
        Descendants {
            stack: vec![self.clone()],
        }
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl Eq for SyntaxNode {}

impl Hash for SyntaxNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.content_hash.hash(state);
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.content {
            NodeContent::Leaf { text, .. } => {
                write!(f, "{:?}@{:?} {:?}", self.data.kind, self.data.span, text)
            }
            NodeContent::Interior { .. } => write!(f, "{:?}@{:?}", self.data.kind, self.data.span),
        }
    }
}

/// Iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants {
    stack: Vec<SyntaxNode>,
}

impl Iterator for Descendants {
    type Item = SyntaxNode;

    fn next(&mut self) -> Option<SyntaxNode> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev().cloned());
        Some(node)
    }
}

/// Covering span of a child sequence. Children edited to a new length may
/// end past their stale-spanned successors, so the end is the maximum over
/// all children rather than the last child's end.
fn cover(children: &[SyntaxNode]) -> TextRange {
    let Some(first) = children.first() else {
        return TextRange::empty(TextSize::new(0));
    };
    let start = first.span().start();
    let end = children
        .iter()
        .map(|child| child.span().end())
        .max()
        .unwrap_or(start);
    TextRange::new(start, end.max(start))
}

fn hash_leaf(kind: SyntaxKind, text: &SmolStr, handler: Option<&EditHandler>) -> u64 {
    let mut hasher = FxHasher::default();
    (kind as u16).hash(&mut hasher);
    0u8.hash(&mut hasher);
    text.as_str().hash(&mut hasher);
    handler.hash(&mut hasher);
    hasher.finish()
}

fn hash_interior(kind: SyntaxKind, children: &[SyntaxNode]) -> u64 {
    let mut hasher = FxHasher::default();
    (kind as u16).hash(&mut hasher);
    1u8.hash(&mut hasher);
    for child in children {
        child.content_hash().hash(&mut hasher);
    }
    hasher.finish()
}
