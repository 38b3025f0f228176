//! Host-agnostic text-buffer primitives for the inline-acceptance core.
//!
//! All coordinates are UTF-8 byte offsets into the document text.
//! Ranges are half-open `[start, end)`.

mod caret;
mod document;
mod edit;
mod span;
mod text_edit;

pub use caret::{Caret, CaretSet, Carets};
pub use document::{Document, TextBuffer};
pub use edit::{ApplyResult, EditError, apply_edit, rebase_offset};
pub use span::Span;
pub use text_edit::TextEdit;

#[cfg(test)]
mod tests;
