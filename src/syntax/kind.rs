//! Syntax kinds for Weft template trees.
//!
//! Weft interleaves literal markup with template constructs introduced by
//! the `@` transition: implicit expressions (`@user.name`), explicit
//! expressions (`@( ... )`), and statement blocks (`@{ ... }`).

/// All syntax kinds (tokens and nodes) in a Weft template tree.
///
/// Tokens are leaf nodes (markup runs, transitions, punctuation).
/// Nodes are composite (the document, expression and statement blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // NODES (composite)
    // =========================================================================
    DOCUMENT = 0,
    MARKUP_BLOCK,
    EXPRESSION_BLOCK,   // @( ... )
    STATEMENT_BLOCK,    // @{ ... }

    // =========================================================================
    // TOKENS (leaves)
    // =========================================================================
    MARKUP_TEXT,        // literal markup run
    TRANSITION,         // @
    IMPLICIT_EXPRESSION, // user.name
    CODE_TEXT,          // raw code inside a block
    L_BRACE,            // {
    R_BRACE,            // }
    L_PAREN,            // (
    R_PAREN,            // )
}
