//! Result classification for partially parsed changes.

use super::node::SyntaxNode;

/// Outcome flags for one partially parsed change.
///
/// Accepted and rejected are mutually exclusive by construction (a single
/// accepted bit); `provisional` and `auto_complete_block` are orthogonal
/// modifier flags a handler may add. The partial parser itself only ever
/// inspects the rejected bit; everything else is metadata for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PartialParseResult {
    accepted: bool,
    provisional: bool,
    auto_complete_block: bool,
}

impl PartialParseResult {
    /// The change was fully absorbed into the tree.
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            ..Self::default()
        }
    }

    /// The change cannot be absorbed; the caller must discard the engine and
    /// perform a full parse.
    pub fn rejected() -> Self {
        Self::default()
    }

    /// Mark an accepted result as tentative, pending confirmation by the
    /// next change against the same owner.
    pub fn with_provisional(mut self) -> Self {
        debug_assert!(self.accepted, "provisional only modifies accepted results");
        self.provisional = true;
        self
    }

    /// Ask the editor layer to auto-complete the owner's closing construct.
    pub fn with_auto_complete_block(mut self) -> Self {
        self.auto_complete_block = true;
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn is_rejected(&self) -> bool {
        !self.accepted
    }

    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    pub fn has_auto_complete_block(&self) -> bool {
        self.auto_complete_block
    }
}

/// The outcome of applying a change through an edit handler.
#[derive(Debug, Clone)]
pub struct EditResult {
    pub result: PartialParseResult,
    /// Replacement for the owning node; present exactly when the change was
    /// not rejected.
    pub edited_node: Option<SyntaxNode>,
}

impl EditResult {
    pub fn new(result: PartialParseResult, edited_node: SyntaxNode) -> Self {
        Self {
            result,
            edited_node: Some(edited_node),
        }
    }

    pub fn rejected() -> Self {
        Self {
            result: PartialParseResult::rejected(),
            edited_node: None,
        }
    }
}
