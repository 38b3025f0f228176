//! Caret (cursor) model.
//!
//! A caret-set may hold several carets at once (multi-cursor editing);
//! policy about which caret an operation targets lives with the caller.

/// A single cursor position, identified by a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caret {
    pub offset: u32,
}

impl Caret {
    pub fn at(offset: u32) -> Caret {
        Caret { offset }
    }
}

/// Host-owned set of carets, in document order.
pub trait CaretSet {
    fn carets(&self) -> Vec<Caret>;

    /// Moves the caret at `idx` to `offset`. Out-of-range `idx` is ignored.
    fn move_caret(&mut self, idx: usize, offset: u32);
}

/// In-memory caret set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carets {
    carets: Vec<Caret>,
}

impl Carets {
    pub fn new(offsets: &[u32]) -> Carets {
        Carets {
            carets: offsets.iter().map(|&offset| Caret { offset }).collect(),
        }
    }

    pub fn single(offset: u32) -> Carets {
        Carets {
            carets: vec![Caret { offset }],
        }
    }
}

impl CaretSet for Carets {
    fn carets(&self) -> Vec<Caret> {
        self.carets.clone()
    }

    fn move_caret(&mut self, idx: usize, offset: u32) {
        if let Some(caret) = self.carets.get_mut(idx) {
            caret.offset = offset;
        }
    }
}
