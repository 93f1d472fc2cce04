//! # weft-base
//!
//! Core library for Weft template syntax trees and incremental re-parsing.
//!
//! Weft is a templated markup language: literal markup interleaved with
//! template constructs introduced by the `@` transition - implicit
//! expressions (`@user.name`), explicit expressions (`@( ... )`), and
//! statement blocks (`@{ ... }`). This crate holds the editor-facing
//! incremental core: given the syntax tree of the current document and a
//! stream of keystroke-sized text changes, it absorbs each change into the
//! existing tree by editing a single leaf when it can, and signals a
//! rejection - full re-parse required - when it cannot.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → partial re-parse engine (change locator, edit session)
//!   ↓
//! syntax    → tree model, edit handlers, result flags, tree builder
//!   ↓
//! base      → primitives (SourceChange, TextRange/TextSize)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use weft::{EditHandler, PartialParser, SourceChange, SyntaxKind, SyntaxTreeBuilder, TextSize};
//!
//! // The full parser (external to this crate) produces a tree...
//! let mut builder = SyntaxTreeBuilder::new();
//! builder.start_node(SyntaxKind::DOCUMENT);
//! builder.token_with_handler(SyntaxKind::MARKUP_TEXT, "Hi ", EditHandler::MarkupText);
//! builder.token(SyntaxKind::TRANSITION, "@");
//! builder.token_with_handler(
//!     SyntaxKind::IMPLICIT_EXPRESSION,
//!     "user",
//!     EditHandler::ImplicitExpression,
//! );
//! builder.finish_node();
//! let tree = builder.finish().unwrap();
//!
//! // ...and the partial parser absorbs keystrokes into it.
//! let mut parser = PartialParser::new(tree);
//! let (result, new_tree) = parser.parse(&SourceChange::insert(TextSize::new(8), "s"));
//! assert!(result.is_accepted());
//! assert_eq!(new_tree.root().children()[2].text(), Some("users"));
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser)
// ============================================================================

/// Foundation types: SourceChange, TextRange/TextSize
pub mod base;

/// Syntax: tree model, edit handlers, result flags, tree builder
pub mod syntax;

/// Partial re-parsing: change locator, edit session engine
pub mod parser;

// Re-export the working set
pub use base::{SourceChange, TextRange, TextSize};
pub use parser::{PartialParser, locate_owner};
pub use syntax::{
    Diagnostic, EditHandler, EditResult, PartialParseResult, SyntaxKind, SyntaxNode, SyntaxTree,
    SyntaxTreeBuilder, TreeError,
};
