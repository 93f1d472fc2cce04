//! Syntax tree model for Weft templates.
//!
//! The pieces, leaves first:
//! - [`SyntaxNode`] - persistent, immutable nodes with structural sharing
//! - [`EditHandler`] - per-leaf capability deciding whether a leaf owns a
//!   text change and what the edited leaf looks like
//! - [`PartialParseResult`], [`EditResult`] - classification of one change
//! - [`SyntaxTree`] - root plus source snapshot and diagnostics
//! - [`SyntaxTreeBuilder`] - the constructing boundary for the full parser
//!   and for tests

pub mod builder;
mod handler;
mod kind;
mod node;
mod result;
mod tree;

pub use builder::{SyntaxTreeBuilder, TreeError, validate};
pub use handler::{EditHandler, TRANSITION_CHAR};
pub use kind::SyntaxKind;
pub use node::{Descendants, SyntaxNode};
pub use result::{EditResult, PartialParseResult};
pub use tree::{Diagnostic, SyntaxTree};
