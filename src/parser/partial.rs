//! The partial re-parse engine: one edit session over one document.

use tracing::{trace, warn};

use crate::base::SourceChange;
use crate::syntax::{PartialParseResult, SyntaxNode, SyntaxTree};

use super::locate::locate_owner;

/// Incremental re-parser bound to a single document edit session.
///
/// Constructed from a freshly parsed tree; fed one [`SourceChange`] at a
/// time as the user types. Calls must be serialized by the caller - `&mut
/// self` makes concurrent mutation unrepresentable, and there is no internal
/// locking. After a rejected result the instance must be discarded and a new
/// one built from a fresh full parse; feeding further changes to a rejected
/// engine is undefined.
pub struct PartialParser {
    original_tree: SyntaxTree,
    modified_root: SyntaxNode,
    last_change_owner: Option<SyntaxNode>,
    last_result_provisional: bool,
}

impl PartialParser {
    /// Bind a new edit session to `tree`.
    pub fn new(tree: SyntaxTree) -> Self {
        let modified_root = tree.root().clone();
        Self {
            original_tree: tree,
            modified_root,
            last_change_owner: None,
            last_result_provisional: false,
        }
    }

    /// The tree this session was constructed from; never mutated.
    pub fn original_tree(&self) -> &SyntaxTree {
        &self.original_tree
    }

    /// The current working root, reflecting every absorbed change.
    pub fn modified_root(&self) -> &SyntaxNode {
        &self.modified_root
    }

    /// Partially parse one text change.
    ///
    /// The returned tree shares the original tree's source snapshot and
    /// diagnostics; only its root reflects absorbed edits.
    pub fn parse(&mut self, change: &SourceChange) -> (PartialParseResult, SyntaxTree) {
        let result = self.apply_change(change);

        // Remember provisional acceptance for the next call.
        self.last_result_provisional = result.is_provisional();
        trace!(?change, ?result, "partial parse");

        (result, self.original_tree.with_root(self.modified_root.clone()))
    }

    fn apply_change(&mut self, change: &SourceChange) -> PartialParseResult {
        // Try the owner cached from the previous call first. If it refuses
        // the change we reject without relocating in the same call; the
        // locator only runs on the first change of a session.
        if let Some(owner) = self.last_change_owner.clone() {
            return self.try_owner(&owner, change);
        }

        // First change of the session: find the owning node.
        self.last_change_owner = locate_owner(&self.modified_root, change);

        if self.last_result_provisional {
            // The previous provisional edit was never confirmed against its
            // owner; the accumulated state needs a full reparse.
            PartialParseResult::rejected()
        } else if let Some(owner) = self.last_change_owner.clone() {
            self.try_owner(&owner, change)
        } else {
            PartialParseResult::rejected()
        }
    }

    fn try_owner(&mut self, owner: &SyntaxNode, change: &SourceChange) -> PartialParseResult {
        let handler = owner.handler().cloned().unwrap_or_default();
        if !handler.owns_change(owner, change) {
            return PartialParseResult::rejected();
        }
        let edit = handler.apply_change(owner, change);
        if !edit.result.is_rejected() {
            if let Some(edited) = edit.edited_node {
                self.replace_last_change_owner(owner, edited);
            }
        }
        edit.result
    }

    /// Splice the edited node over `owner`, then re-acquire it as a live
    /// member of the new root: the handler's node is matched among the new
    /// root's descendants by reference identity first, falling back to
    /// structural content, and the match becomes the cached owner for the
    /// next change.
    fn replace_last_change_owner(&mut self, owner: &SyntaxNode, edited: SyntaxNode) {
        match self.modified_root.replace_node(owner, edited.clone()) {
            Some(new_root) => {
                self.modified_root = new_root;
                // Two passes: a content-identical twin elsewhere in the tree
                // must not shadow the spliced node itself.
                self.last_change_owner = self
                    .modified_root
                    .descendants()
                    .find(|node| node.ptr_eq(&edited))
                    .or_else(|| {
                        self.modified_root
                            .descendants()
                            .find(|node| node.content_eq(&edited))
                    });
                if self.last_change_owner.is_none() {
                    warn!("edited node missing from the spliced tree");
                }
            }
            None => warn!("cached change owner is not part of the working tree"),
        }
    }
}
