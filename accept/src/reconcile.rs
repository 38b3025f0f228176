//! Computes the document mutation for accepting one suggestion.
//!
//! All coordinates are UTF-8 byte offsets; ranges are half-open `[start, end)`.

use textbuf::{Document, Span};

use crate::item::CompletionItem;

/// Computed mutation and caret move for one acceptance.
///
/// Invariant: `caret_after == replace.start + text.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub replace: Span,
    pub text: String,
    pub caret_after: u32,
}

/// Computes the replacement for `item` anchored at `caret_offset`.
///
/// Returns `None` when the item no longer fits the current document
/// (stale range, caret past the end, or a split UTF-8 boundary).
pub fn reconcile(
    doc: &dyn Document,
    caret_offset: u32,
    item: &CompletionItem,
) -> Option<Reconciliation> {
    match item {
        CompletionItem::RangeBased { range, insert_text } => {
            doc.try_slice(*range)?;
            Some(Reconciliation {
                replace: *range,
                text: insert_text.clone(),
                caret_after: range.start + insert_text.len() as u32,
            })
        }
        CompletionItem::Tail(suggestion) => {
            let line_end = doc.line_end_offset(caret_offset);
            let replace = Span::new(caret_offset, line_end);
            let same_line_suffix = doc.try_slice(replace)?;

            let generated = suggestion.compute_text(same_line_suffix);

            // The source may have blended the trailing text into its own
            // output already; re-appending it then would duplicate it. The
            // check is purely textual: a suffix appearing anywhere in the
            // generated text counts as already represented.
            let text = if generated.contains(same_line_suffix) {
                generated
            } else {
                let mut text = generated;
                text.push_str(same_line_suffix);
                text
            };

            let caret_after = caret_offset + text.len() as u32;
            Some(Reconciliation {
                replace,
                text,
                caret_after,
            })
        }
    }
}
