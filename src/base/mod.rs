//! Foundation types for the Weft toolchain.
//!
//! This module provides the primitives the rest of the crate builds on:
//! - [`SourceChange`] - a single contiguous text replacement
//! - [`TextRange`], [`TextSize`] - source positions (byte offsets)
//!
//! This module has NO dependencies on other weft modules.

mod change;

pub use change::SourceChange;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
