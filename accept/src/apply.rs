//! Atomic application of a computed reconciliation.

use textbuf::{CaretSet, Document, rebase_offset};

use crate::reconcile::Reconciliation;

/// Deterministic apply-time errors. Any of these means nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    InvalidRange,
    CaretOutOfRange,
}

impl ApplyError {
    pub fn message(self) -> &'static str {
        match self {
            ApplyError::InvalidRange => "Invalid replace range",
            ApplyError::CaretOutOfRange => "Caret out of range",
        }
    }
}

/// Wraps the host's mutation-transaction primitive.
pub trait TransactionalApplier {
    /// Replaces `rec.replace` with `rec.text` and moves the caret at
    /// `caret_idx` to `rec.caret_after`, as one atomic, undo-integrated
    /// unit: afterwards either both effects are observable or neither is.
    fn apply(
        &mut self,
        doc: &mut dyn Document,
        carets: &mut dyn CaretSet,
        caret_idx: usize,
        rec: &Reconciliation,
    ) -> Result<(), ApplyError>;
}

/// Applier over in-memory buffers.
///
/// Validates everything up front so the mutation below cannot fail halfway.
/// Untargeted carets are rebased through the edit, the way a host buffer
/// moves markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferApplier;

impl TransactionalApplier for BufferApplier {
    fn apply(
        &mut self,
        doc: &mut dyn Document,
        carets: &mut dyn CaretSet,
        caret_idx: usize,
        rec: &Reconciliation,
    ) -> Result<(), ApplyError> {
        if doc.try_slice(rec.replace).is_none() {
            return Err(ApplyError::InvalidRange);
        }

        let inserted_len = rec.text.len() as u32;
        let new_len = doc.len() - rec.replace.len() + inserted_len;
        if rec.caret_after > new_len {
            return Err(ApplyError::CaretOutOfRange);
        }

        let all = carets.carets();
        if caret_idx >= all.len() {
            return Err(ApplyError::CaretOutOfRange);
        }

        doc.replace_range(rec.replace, &rec.text);
        for (idx, caret) in all.iter().enumerate() {
            if idx == caret_idx {
                carets.move_caret(idx, rec.caret_after);
            } else {
                carets.move_caret(idx, rebase_offset(rec.replace, inserted_len, caret.offset));
            }
        }
        Ok(())
    }
}
