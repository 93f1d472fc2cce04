//! Syntax trees: a root node plus the source snapshot and diagnostics the
//! full parser produced it from.

use std::sync::Arc;

use text_size::TextRange;

use super::builder::{self, TreeError};
use super::node::SyntaxNode;

/// A parse diagnostic with location and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// An immutable Weft syntax tree.
///
/// Trees returned by the partial parser share the original tree's source
/// snapshot and diagnostics; only the root changes. Callers must not assume
/// the snapshot reflects partially parsed edits - the partial parser never
/// creates a new snapshot, and re-deriving display text from the edited
/// nodes is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    root: SyntaxNode,
    source: Arc<str>,
    diagnostics: Arc<[Diagnostic]>,
}

impl SyntaxTree {
    /// Create a tree without validating the node-model invariants. Use
    /// [`SyntaxTree::try_new`] for roots assembled outside
    /// [`SyntaxTreeBuilder`].
    ///
    /// [`SyntaxTreeBuilder`]: super::SyntaxTreeBuilder
    pub fn new(root: SyntaxNode, source: Arc<str>, diagnostics: Arc<[Diagnostic]>) -> Self {
        Self {
            root,
            source,
            diagnostics,
        }
    }

    /// Create a tree, validating `root` against the snapshot.
    pub fn try_new(
        root: SyntaxNode,
        source: Arc<str>,
        diagnostics: Arc<[Diagnostic]>,
    ) -> Result<Self, TreeError> {
        builder::validate(&root, &source)?;
        Ok(Self::new(root, source, diagnostics))
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// The source snapshot the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// A new tree rooted at `root`, sharing this tree's source snapshot and
    /// diagnostics.
    pub fn with_root(&self, root: SyntaxNode) -> SyntaxTree {
        SyntaxTree {
            root,
            source: Arc::clone(&self.source),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}
