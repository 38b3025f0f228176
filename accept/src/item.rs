//! Pending-suggestion data model.

use std::fmt;

use textbuf::Span;

/// A pending inline suggestion displayed at a caret.
///
/// Two provenances exist. A structured source knows exactly which span of
/// the document it wants to overwrite (possibly spanning lines or stale
/// text ahead of the caret). A tail source only produces text for the rest
/// of the current line and needs reconciling against whatever already
/// follows the caret there.
pub enum CompletionItem {
    RangeBased { range: Span, insert_text: String },
    Tail(Box<dyn TailSuggestion>),
}

impl fmt::Debug for CompletionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionItem::RangeBased { range, insert_text } => f
                .debug_struct("RangeBased")
                .field("range", range)
                .field("insert_text", insert_text)
                .finish(),
            CompletionItem::Tail(_) => f.write_str("Tail(..)"),
        }
    }
}

/// Text generator for a tail suggestion.
pub trait TailSuggestion {
    /// Candidate final text given the text already on the line after the
    /// caret. Must be pure and deterministic for a given suffix.
    fn compute_text(&self, same_line_suffix: &str) -> String;
}

/// Tail suggestion whose text ignores the trailing suffix entirely: the
/// common shape for sources that are oblivious to editor-inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTail(pub String);

impl StaticTail {
    pub fn new(text: impl Into<String>) -> StaticTail {
        StaticTail(text.into())
    }
}

impl TailSuggestion for StaticTail {
    fn compute_text(&self, _same_line_suffix: &str) -> String {
        self.0.clone()
    }
}
