//! Validated edit application with cursor rebasing.
//!
//! Cursor rules:
//! - an edit fully before the cursor shifts it by the byte delta
//! - a cursor strictly inside the replaced range snaps to the edit `start`

use crate::span::Span;
use crate::text_edit::TextEdit;

/// Result payload for edit application in byte coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub source: String,
    pub cursor: u32,
}

/// Deterministic edit-application errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    InvalidCursor,
    InvalidEditRange,
}

impl EditError {
    pub fn message(self) -> &'static str {
        match self {
            EditError::InvalidCursor => "Invalid cursor",
            EditError::InvalidEditRange => "Invalid edit range",
        }
    }
}

/// Rebases a byte offset (in pre-edit coordinates) through one edit that
/// replaces `range` with `inserted_len` bytes.
pub fn rebase_offset(range: Span, inserted_len: u32, offset: u32) -> u32 {
    let delta = inserted_len as i64 - range.len() as i64;

    if range.end <= offset {
        if delta >= 0 {
            offset.saturating_add(delta as u32)
        } else {
            offset.saturating_sub((-delta) as u32)
        }
    } else if range.start < offset && offset < range.end {
        range.start
    } else {
        offset
    }
}

/// Applies a single byte edit to `source` and rebases a byte cursor through it.
pub fn apply_edit(source: &str, edit: &TextEdit, cursor: u32) -> Result<ApplyResult, EditError> {
    validate_cursor(source, cursor)?;
    validate_range(source, edit.range)?;

    let start = edit.range.start as usize;
    let end = edit.range.end as usize;

    let cursor = rebase_offset(edit.range, edit.new_text.len() as u32, cursor);

    let mut updated = String::with_capacity(source.len() - (end - start) + edit.new_text.len());
    updated.push_str(&source[..start]);
    updated.push_str(&edit.new_text);
    updated.push_str(&source[end..]);

    Ok(ApplyResult {
        source: updated,
        cursor,
    })
}

fn validate_cursor(source: &str, cursor: u32) -> Result<(), EditError> {
    let cursor = cursor as usize;
    if cursor > source.len() || !source.is_char_boundary(cursor) {
        return Err(EditError::InvalidCursor);
    }
    Ok(())
}

fn validate_range(source: &str, range: Span) -> Result<(), EditError> {
    let source_len = u32::try_from(source.len()).map_err(|_| EditError::InvalidEditRange)?;

    if range.end < range.start || range.end > source_len {
        return Err(EditError::InvalidEditRange);
    }
    if !source.is_char_boundary(range.start as usize) || !source.is_char_boundary(range.end as usize)
    {
        return Err(EditError::InvalidEditRange);
    }
    Ok(())
}
