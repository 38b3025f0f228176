//! Minimal document abstraction the acceptance core operates on.
//!
//! The host editor owns the buffer; the core only borrows it for the
//! duration of one operation. Offsets are UTF-8 byte offsets.

use crate::span::Span;

/// Read/replace access to a line-partitioned text buffer.
pub trait Document {
    /// Total length of the document in bytes.
    fn len(&self) -> u32;

    /// Byte offset of the end of the line containing `offset`: the offset of
    /// the terminating `\n`, or `len()` on the last line.
    ///
    /// `offset` is clamped to `len()` and must be a char boundary.
    fn line_end_offset(&self, offset: u32) -> u32;

    /// Text inside `span`, or `None` if the span is out of bounds or not on
    /// char boundaries.
    fn try_slice(&self, span: Span) -> Option<&str>;

    /// Replaces `span` with `text`.
    ///
    /// Callers must validate `span` first (via [`Document::try_slice`]); an
    /// invalid span is host misuse and may panic.
    fn replace_range(&mut self, span: Span, text: &str);
}

/// String-backed in-memory document.
///
/// Used by tests and by embedders without a host buffer of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> TextBuffer {
        TextBuffer { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Document for TextBuffer {
    fn len(&self) -> u32 {
        self.text.len() as u32
    }

    fn line_end_offset(&self, offset: u32) -> u32 {
        let start = (offset as usize).min(self.text.len());
        let Some(rest) = self.text.get(start..) else {
            return self.len();
        };
        match rest.find('\n') {
            Some(i) => (start + i) as u32,
            None => self.len(),
        }
    }

    fn try_slice(&self, span: Span) -> Option<&str> {
        if span.end < span.start {
            return None;
        }
        self.text.get(span.start as usize..span.end as usize)
    }

    fn replace_range(&mut self, span: Span, text: &str) {
        self.text
            .replace_range(span.start as usize..span.end as usize, text);
    }
}
