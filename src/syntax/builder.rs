//! Tree construction and validation.
//!
//! The full Weft parser (and the tests here) assemble trees through
//! [`SyntaxTreeBuilder`]: push tokens, nest nodes, finish. The builder
//! accumulates the source snapshot from the leaf tokens it is fed, so the
//! resulting tree is consistent by construction; [`validate`] checks the
//! same invariants for roots assembled by hand.

use std::sync::Arc;

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::handler::EditHandler;
use super::kind::SyntaxKind;
use super::node::SyntaxNode;
use super::tree::{Diagnostic, SyntaxTree};

/// Violations of the node-model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The root span must start at zero and cover the whole snapshot.
    #[error("root span {root:?} does not cover the source (length {source_len:?})")]
    RootSpan {
        root: TextRange,
        source_len: TextSize,
    },

    /// A child span escapes its parent's span.
    #[error("node span {child:?} escapes its parent span {parent:?}")]
    ChildOutOfParent { parent: TextRange, child: TextRange },

    /// Sibling spans must be disjoint and ordered by offset.
    #[error("sibling spans {left:?} and {right:?} overlap or are out of order")]
    SiblingOrder { left: TextRange, right: TextRange },

    /// A leaf's span length must equal its text length.
    #[error("leaf span {span:?} does not match its text length {text_len:?}")]
    LeafLength { span: TextRange, text_len: TextSize },

    /// A leaf's text must match the snapshot slice its span addresses.
    #[error("leaf at {span:?} disagrees with the source snapshot")]
    LeafTextMismatch { span: TextRange },

    /// Builder misuse (mismatched start/finish calls, stray tokens).
    #[error("unbalanced builder: {0}")]
    Unbalanced(&'static str),
}

/// Check the node-model invariants of `root` against a source snapshot.
pub fn validate(root: &SyntaxNode, source: &str) -> Result<(), TreeError> {
    let source_len = TextSize::of(source);
    if root.span() != TextRange::new(TextSize::new(0), source_len) {
        return Err(TreeError::RootSpan {
            root: root.span(),
            source_len,
        });
    }
    validate_node(root, source)
}

fn validate_node(node: &SyntaxNode, source: &str) -> Result<(), TreeError> {
    if let Some(text) = node.text() {
        let span = node.span();
        if span.len() != TextSize::of(text) {
            return Err(TreeError::LeafLength {
                span,
                text_len: TextSize::of(text),
            });
        }
        let slice = source.get(usize::from(span.start())..usize::from(span.end()));
        if slice != Some(text) {
            return Err(TreeError::LeafTextMismatch { span });
        }
        return Ok(());
    }

    let mut previous: Option<TextRange> = None;
    for child in node.children() {
        if !node.span().contains_range(child.span()) {
            return Err(TreeError::ChildOutOfParent {
                parent: node.span(),
                child: child.span(),
            });
        }
        if let Some(left) = previous {
            if child.span().start() < left.end() {
                return Err(TreeError::SiblingOrder {
                    left,
                    right: child.span(),
                });
            }
        }
        validate_node(child, source)?;
        previous = Some(child.span());
    }
    Ok(())
}

/// Assembles a [`SyntaxTree`] from tokens and nested nodes.
///
/// Offsets are tracked automatically: each token occupies the next bytes of
/// the snapshot being accumulated, so spans and source text cannot drift
/// apart.
#[derive(Debug, Default)]
pub struct SyntaxTreeBuilder {
    source: String,
    stack: Vec<(SyntaxKind, Vec<SyntaxNode>)>,
    root: Option<SyntaxNode>,
    diagnostics: Vec<Diagnostic>,
    misuse: Option<&'static str>,
}

impl SyntaxTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an interior node of `kind`.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        if self.root.is_some() && self.stack.is_empty() {
            self.note_misuse("start_node after the root was finished");
            return;
        }
        self.stack.push((kind, Vec::new()));
    }

    /// Close the innermost open node.
    pub fn finish_node(&mut self) {
        let Some((kind, children)) = self.stack.pop() else {
            self.note_misuse("finish_node without a matching start_node");
            return;
        };
        let node = SyntaxNode::interior(kind, children);
        match self.stack.last_mut() {
            Some((_, siblings)) => siblings.push(node),
            None => self.root = Some(node),
        }
    }

    /// Push a leaf token with no edit handler. Such leaves reject every
    /// change landing on them.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.push_leaf(kind, text, None);
    }

    /// Push a leaf token carrying an edit handler.
    pub fn token_with_handler(&mut self, kind: SyntaxKind, text: &str, handler: EditHandler) {
        self.push_leaf(kind, text, Some(handler));
    }

    /// Record a diagnostic to carry on the finished tree.
    pub fn diagnostic(&mut self, message: impl Into<String>, range: TextRange) {
        self.diagnostics.push(Diagnostic::new(message, range));
    }

    /// Finish, validate, and return the tree.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if let Some(misuse) = self.misuse {
            return Err(TreeError::Unbalanced(misuse));
        }
        if !self.stack.is_empty() {
            return Err(TreeError::Unbalanced("unclosed node at finish"));
        }
        let root = self
            .root
            .ok_or(TreeError::Unbalanced("finish without a root node"))?;
        let source: Arc<str> = self.source.into();
        validate(&root, &source)?;
        Ok(SyntaxTree::new(root, source, self.diagnostics.into()))
    }

    fn push_leaf(&mut self, kind: SyntaxKind, text: &str, handler: Option<EditHandler>) {
        if self.stack.is_empty() {
            self.note_misuse("token outside any node");
            return;
        }
        let start = TextSize::of(self.source.as_str());
        let span = TextRange::at(start, TextSize::of(text));
        self.source.push_str(text);
        let leaf = SyntaxNode::leaf(kind, span, text, handler);
        if let Some((_, children)) = self.stack.last_mut() {
            children.push(leaf);
        }
    }

    fn note_misuse(&mut self, what: &'static str) {
        // Keep the first misuse; later ones are usually knock-on effects.
        self.misuse.get_or_insert(what);
    }
}
