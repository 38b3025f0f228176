//! Inline completion acceptance core.
//!
//! Given a pending inline suggestion anchored at a caret, computes the exact
//! document mutation and new caret position that accepting it should
//! produce, without duplicating or losing text already typed after the
//! caret, and applies it as one atomic edit.
//!
//! All coordinates are UTF-8 byte offsets, matching `textbuf`. Ranges are
//! half-open `[start, end)`.
//!
//! The host editor owns the document, the caret-set, the displayed
//! suggestion, and the mutation transaction; it injects them through the
//! narrow seams re-exported below, which keeps the core host-agnostic and
//! testable against in-memory fakes.

mod apply;
mod item;
mod lookup;
mod observer;
mod reconcile;
mod resolver;

pub use apply::{ApplyError, BufferApplier, TransactionalApplier};
pub use item::{CompletionItem, StaticTail, TailSuggestion};
pub use lookup::{CompletionLookup, PendingItems};
pub use observer::{AcceptEvent, AcceptObserver, NullObserver, ObserverError, Provenance};
pub use reconcile::{Reconciliation, reconcile};
pub use resolver::resolve_caret;

use serde::Serialize;
use textbuf::{CaretSet, Document};
use tracing::{debug, warn};

/// Capability flags for one accept call.
///
/// Passed explicitly at call time so branch selection is a pure function
/// of the call's inputs, never of ambient global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptConfig {
    /// Whether a structured (range-based) suggestion source is currently
    /// connected. Range-based items are only honored while one is; tail
    /// items are honored either way.
    pub structured_source: bool,
}

/// Result of an accept request.
///
/// `NotApplicable` is not an error: it tells the host to let the keypress
/// fall through to its default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptOutcome {
    Applied,
    NotApplicable,
}

/// Accepts the suggestion pending at the resolved caret, if any.
///
/// Resolves a caret, fetches the suggestion displayed there, computes the
/// reconciled mutation, re-validates it against the current document, and
/// applies it atomically. Any step that cannot complete cleanly degrades to
/// [`AcceptOutcome::NotApplicable`] with nothing mutated.
pub fn accept(
    doc: &mut dyn Document,
    carets: &mut dyn CaretSet,
    lookup: &dyn CompletionLookup,
    applier: &mut dyn TransactionalApplier,
    observer: &dyn AcceptObserver,
    config: AcceptConfig,
    explicit_caret: Option<usize>,
) -> AcceptOutcome {
    AcceptSession {
        doc,
        carets,
        lookup,
        applier,
        observer,
        config,
        explicit_caret,
    }
    .run()
}

/// Whether an accept would currently apply, without mutating anything.
///
/// Used by hosts to decide whether to intercept the key at all: a caret
/// must resolve and the lookup must yield an item the capability flags
/// honor. Mirrors the applicability checks in [`accept`] minus the
/// apply-time bounds re-validation.
pub fn accept_available(
    carets: &dyn CaretSet,
    lookup: &dyn CompletionLookup,
    config: AcceptConfig,
    explicit_caret: Option<usize>,
) -> bool {
    let Some((_, caret)) = resolve_caret(carets, explicit_caret) else {
        return false;
    };
    lookup
        .item_at(caret)
        .is_some_and(|item| item_honored(item, config))
}

struct AcceptSession<'a> {
    doc: &'a mut dyn Document,
    carets: &'a mut dyn CaretSet,
    lookup: &'a dyn CompletionLookup,
    applier: &'a mut dyn TransactionalApplier,
    observer: &'a dyn AcceptObserver,
    config: AcceptConfig,
    explicit_caret: Option<usize>,
}

impl AcceptSession<'_> {
    fn run(self) -> AcceptOutcome {
        // 1) Pick the single caret this accept targets.
        let Some((caret_idx, caret)) = resolve_caret(self.carets, self.explicit_caret) else {
            return AcceptOutcome::NotApplicable;
        };

        // 2) Fetch the suggestion displayed there.
        let Some(item) = self.lookup.item_at(caret) else {
            return AcceptOutcome::NotApplicable;
        };
        if !item_honored(item, self.config) {
            return AcceptOutcome::NotApplicable;
        }
        let provenance = match item {
            CompletionItem::RangeBased { .. } => Provenance::Structured,
            CompletionItem::Tail(_) => Provenance::Tail,
        };

        // 3) Compute the mutation.
        let Some(rec) = reconcile(self.doc, caret.offset, item) else {
            debug!(caret = caret.offset, "accept skipped: item does not fit document");
            return AcceptOutcome::NotApplicable;
        };

        // 4) The document may have changed between lookup and now; never
        //    hand the applier a stale range.
        if self.doc.try_slice(rec.replace).is_none() {
            debug!(
                start = rec.replace.start,
                end = rec.replace.end,
                "accept skipped: replace range went stale"
            );
            return AcceptOutcome::NotApplicable;
        }

        // 5) Apply text mutation and caret move as one unit.
        if let Err(err) = self.applier.apply(self.doc, self.carets, caret_idx, &rec) {
            warn!(error = err.message(), "accept not applied");
            return AcceptOutcome::NotApplicable;
        }

        // 6) Best-effort notification; an observer failure never undoes
        //    or fails the accept.
        let event = AcceptEvent {
            provenance,
            replace_start: rec.replace.start,
            replace_end: rec.replace.end,
            inserted_len: rec.text.len() as u32,
            caret_after: rec.caret_after,
        };
        if let Err(err) = self.observer.on_accepted(&event) {
            warn!(error = %err, "acceptance observer failed");
        }

        debug!(caret = rec.caret_after, ?provenance, "completion accepted");
        AcceptOutcome::Applied
    }
}

fn item_honored(item: &CompletionItem, config: AcceptConfig) -> bool {
    match item {
        CompletionItem::RangeBased { .. } => config.structured_source,
        CompletionItem::Tail(_) => true,
    }
}

#[cfg(test)]
mod tests;
