//! Partial (incremental) re-parsing of Weft templates.
//!
//! Re-running the full parser on every keystroke is too slow for large
//! documents. This module decides, per incoming [`SourceChange`], whether
//! the change can be absorbed into the existing tree by editing one leaf
//! node, or whether it invalidates enough structure that the caller must
//! fall back to the full parser.
//!
//! ```text
//! editor change
//!     ↓
//! PartialParser::parse
//!     ↓
//! locate_owner (first change) / cached owner (subsequent changes)
//!     ↓
//! EditHandler::owns_change / apply_change on the owning leaf
//!     ↓
//! tree splice → (PartialParseResult, SyntaxTree)
//! ```
//!
//! On a rejected result the engine stops touching its own state; the caller
//! is responsible for discarding it and rebuilding from a fresh full parse.
//!
//! [`SourceChange`]: crate::base::SourceChange

mod locate;
mod partial;

pub use locate::locate_owner;
pub use partial::PartialParser;
