//! Source text changes delivered by the editor integration layer.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// A single contiguous text replacement against an immutable source snapshot.
///
/// `span` addresses the replaced range in the snapshot the change was made
/// against; `new_text` is the replacement. Insertions have an empty span,
/// deletions an empty `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceChange {
    pub span: TextRange,
    pub new_text: SmolStr,
}

impl SourceChange {
    pub fn new(span: TextRange, new_text: impl Into<SmolStr>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    /// An insertion of `text` at `offset`.
    pub fn insert(offset: TextSize, text: impl Into<SmolStr>) -> Self {
        Self::new(TextRange::empty(offset), text)
    }

    /// A deletion of `span`.
    pub fn delete(span: TextRange) -> Self {
        Self::new(span, "")
    }

    /// A replacement of `span` with `text`.
    pub fn replace(span: TextRange, text: impl Into<SmolStr>) -> Self {
        Self::new(span, text)
    }

    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    pub fn is_delete(&self) -> bool {
        !self.span.is_empty() && self.new_text.is_empty()
    }

    pub fn is_replace(&self) -> bool {
        !self.span.is_empty() && !self.new_text.is_empty()
    }

    /// Length of the replacement text.
    pub fn new_length(&self) -> TextSize {
        TextSize::of(self.new_text.as_str())
    }

    /// Apply this change to a full source snapshot.
    ///
    /// Returns `None` when the span is out of bounds or would split a UTF-8
    /// character.
    pub fn applied_to(&self, text: &str) -> Option<String> {
        self.splice(text, self.span)
    }

    /// The text an owning node would contain after this change.
    ///
    /// `node_span` is the node's span and `node_text` its current text; the
    /// change's span is interpreted relative to `node_span.start()`. Returns
    /// `None` when the change does not fall inside the node or would split a
    /// UTF-8 character.
    pub fn edited_text(&self, node_span: TextRange, node_text: &str) -> Option<String> {
        let start = self.span.start().checked_sub(node_span.start())?;
        self.splice(node_text, TextRange::at(start, self.span.len()))
    }

    fn splice(&self, text: &str, span: TextRange) -> Option<String> {
        let (start, end) = (usize::from(span.start()), usize::from(span.end()));
        if end > text.len() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return None;
        }
        let mut edited = String::with_capacity(text.len() - (end - start) + self.new_text.len());
        edited.push_str(&text[..start]);
        edited.push_str(&self.new_text);
        edited.push_str(&text[end..]);
        Some(edited)
    }
}
