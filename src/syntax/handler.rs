//! Per-node edit-handling capabilities.
//!
//! Every leaf that represents editable text can carry an [`EditHandler`]
//! deciding whether the leaf owns an incoming change and, if so, what the
//! edited replacement leaf looks like. A handler must reject any change
//! whose result would escape the leaf's lexical context (for example markup
//! text growing a `@` transition), deferring to a full parse.
//!
//! Handlers are a closed set dispatched by match; leaves without a handler
//! behave like [`EditHandler::Default`], which rejects everything.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::SourceChange;

use super::node::SyntaxNode;
use super::result::{EditResult, PartialParseResult};

/// The character that switches Weft from markup to a template construct.
pub const TRANSITION_CHAR: char = '@';

/// Edit-handling capability attached to editable leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EditHandler {
    /// Safe fallback: owns changes inside its span but rejects applying any
    /// of them.
    #[default]
    Default,

    /// A literal markup run. Accepts edits as long as the resulting text
    /// stays plain markup, i.e. contains no transition character.
    MarkupText,

    /// An `ident('.'ident)*` member chain following a transition. A chain
    /// left with a single trailing dot is accepted provisionally, awaiting
    /// the member name that confirms it.
    ImplicitExpression,

    /// The opening delimiter of a block whose closer has not been typed yet.
    /// A newline inserted immediately after the delimiter is absorbed and
    /// flags the editor layer to insert `closer`.
    AutoCompleteBlock { closer: SmolStr },
}

impl EditHandler {
    /// Whether this handler is willing to absorb `change` on behalf of
    /// `node`.
    ///
    /// All current handlers use span containment. Insertions at the node's
    /// end boundary count as contained; the locator's tie-break sends those
    /// here first.
    pub fn owns_change(&self, node: &SyntaxNode, change: &SourceChange) -> bool {
        node.span().contains_range(change.span)
    }

    /// Apply `change` to `node`, producing the edited replacement leaf and
    /// its classification. Interior nodes reject unconditionally.
    pub fn apply_change(&self, node: &SyntaxNode, change: &SourceChange) -> EditResult {
        let Some(text) = node.text() else {
            return EditResult::rejected();
        };
        match self {
            EditHandler::Default => EditResult::rejected(),
            EditHandler::MarkupText => {
                let Some(edited) = change.edited_text(node.span(), text) else {
                    return EditResult::rejected();
                };
                if edited.contains(TRANSITION_CHAR) {
                    // The run is no longer plain markup; only a full parse
                    // can place the new construct.
                    return EditResult::rejected();
                }
                EditResult::new(PartialParseResult::accepted(), edited_leaf(node, self, edited))
            }
            EditHandler::ImplicitExpression => {
                let Some(edited) = change.edited_text(node.span(), text) else {
                    return EditResult::rejected();
                };
                match classify_member_chain(&edited) {
                    Chain::Complete => EditResult::new(
                        PartialParseResult::accepted(),
                        edited_leaf(node, self, edited),
                    ),
                    Chain::TrailingDot => EditResult::new(
                        PartialParseResult::accepted().with_provisional(),
                        edited_leaf(node, self, edited),
                    ),
                    Chain::Invalid => EditResult::rejected(),
                }
            }
            EditHandler::AutoCompleteBlock { .. } => {
                let at_end = change.span.start() == node.span().end();
                if !(change.is_insert() && at_end && is_newline(change.new_text.as_str())) {
                    return EditResult::rejected();
                }
                let Some(edited) = change.edited_text(node.span(), text) else {
                    return EditResult::rejected();
                };
                EditResult::new(
                    PartialParseResult::accepted().with_auto_complete_block(),
                    edited_leaf(node, self, edited),
                )
            }
        }
    }

    /// The text the editor layer should insert to close the block, for
    /// auto-complete handlers.
    pub fn auto_complete_string(&self) -> Option<&str> {
        match self {
            EditHandler::AutoCompleteBlock { closer } => Some(closer.as_str()),
            _ => None,
        }
    }
}

/// Replacement leaf at the owner's start offset with a re-measured length.
fn edited_leaf(node: &SyntaxNode, handler: &EditHandler, text: String) -> SyntaxNode {
    let span = TextRange::at(node.span().start(), TextSize::of(text.as_str()));
    SyntaxNode::leaf(node.kind(), span, text, Some(handler.clone()))
}

fn is_newline(text: &str) -> bool {
    matches!(text, "\n" | "\r\n")
}

fn is_ident_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

enum Chain {
    /// `ident('.'ident)*`
    Complete,
    /// `ident('.'ident)*'.'` - awaiting the next member name
    TrailingDot,
    Invalid,
}

/// Classify `text` as a member chain (`user`, `user.name`, `user.`).
fn classify_member_chain(text: &str) -> Chain {
    let mut expect_segment_start = true;
    for c in text.chars() {
        if expect_segment_start {
            if !is_ident_start(c) {
                return Chain::Invalid;
            }
            expect_segment_start = false;
        } else if c == '.' {
            expect_segment_start = true;
        } else if !is_ident_continue(c) {
            return Chain::Invalid;
        }
    }
    if text.is_empty() {
        Chain::Invalid
    } else if expect_segment_start {
        Chain::TrailingDot
    } else {
        Chain::Complete
    }
}
