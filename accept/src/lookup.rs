//! Pending-suggestion lookup seam.

use std::collections::HashMap;

use textbuf::Caret;

use crate::item::CompletionItem;

/// Maps a caret to the suggestion currently displayed there, if any.
///
/// Queried from the rendering/decoration layer. This is a pure query:
/// looking an item up never consumes it. The host clears the displayed
/// decoration after an accept either way, which is what makes a second
/// accept a no-op.
pub trait CompletionLookup {
    fn item_at(&self, caret: Caret) -> Option<&CompletionItem>;
}

/// In-memory lookup keyed by caret offset.
#[derive(Debug, Default)]
pub struct PendingItems {
    items: HashMap<u32, CompletionItem>,
}

impl PendingItems {
    pub fn new() -> PendingItems {
        PendingItems::default()
    }

    /// Registers `item` as displayed at `offset`, replacing any previous one.
    pub fn show(&mut self, offset: u32, item: CompletionItem) {
        self.items.insert(offset, item);
    }

    pub fn clear(&mut self, offset: u32) {
        self.items.remove(&offset);
    }
}

impl CompletionLookup for PendingItems {
    fn item_at(&self, caret: Caret) -> Option<&CompletionItem> {
        self.items.get(&caret.offset)
    }
}
