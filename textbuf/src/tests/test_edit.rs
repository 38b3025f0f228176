use crate::{EditError, Span, TextEdit, apply_edit, rebase_offset};

fn edit(start: u32, end: u32, new_text: &str) -> TextEdit {
    TextEdit {
        range: Span::new(start, end),
        new_text: new_text.to_string(),
    }
}

#[test]
fn apply_edit_replaces_and_shifts_cursor_after_edit() {
    let out = apply_edit("abcd", &edit(1, 2, "XYZ"), 3).expect("expected edit to apply");
    assert_eq!(out.source, "aXYZcd");
    assert_eq!(out.cursor, 5);
}

#[test]
fn apply_edit_leaves_cursor_before_edit_untouched() {
    let out = apply_edit("abcd", &edit(2, 4, ""), 1).expect("expected edit to apply");
    assert_eq!(out.source, "ab");
    assert_eq!(out.cursor, 1);
}

#[test]
fn apply_edit_snaps_cursor_inside_replaced_range_to_start() {
    let out = apply_edit("abcdef", &edit(1, 5, "-"), 3).expect("expected edit to apply");
    assert_eq!(out.source, "a-f");
    assert_eq!(out.cursor, 1);
}

#[test]
fn apply_edit_shrinking_edit_shifts_cursor_back() {
    let out = apply_edit("abcdef", &edit(0, 4, "x"), 6).expect("expected edit to apply");
    assert_eq!(out.source, "xef");
    assert_eq!(out.cursor, 3);
}

#[test]
fn apply_edit_rejects_cursor_past_the_end() {
    let err = apply_edit("abc", &edit(0, 1, "z"), 4).expect_err("expected cursor error");
    assert_eq!(err, EditError::InvalidCursor);
}

#[test]
fn apply_edit_rejects_range_past_the_end() {
    let err = apply_edit("abc", &edit(1, 9, "z"), 0).expect_err("expected range error");
    assert_eq!(err, EditError::InvalidEditRange);
}

#[test]
fn apply_edit_rejects_inverted_range() {
    let err = apply_edit("abcd", &edit(3, 1, "z"), 0).expect_err("expected range error");
    assert_eq!(err, EditError::InvalidEditRange);
}

#[test]
fn apply_edit_rejects_split_utf8_boundary() {
    // 'é' occupies bytes 1..3.
    let err = apply_edit("aéb", &edit(0, 2, "z"), 0).expect_err("expected boundary error");
    assert_eq!(err, EditError::InvalidEditRange);
}

#[test]
fn rebase_offset_covers_before_inside_and_after() {
    let range = Span::new(2, 5);
    // Growing edit: 3 bytes replaced by 7.
    assert_eq!(rebase_offset(range, 7, 1), 1);
    assert_eq!(rebase_offset(range, 7, 2), 2);
    assert_eq!(rebase_offset(range, 7, 3), 2);
    assert_eq!(rebase_offset(range, 7, 5), 9);
    assert_eq!(rebase_offset(range, 7, 8), 12);
    // Shrinking edit: 3 bytes replaced by 1.
    assert_eq!(rebase_offset(range, 1, 8), 6);
}

#[test]
fn apply_edit_pure_insertion_at_cursor() {
    let out = apply_edit("f()", &edit(2, 2, "x"), 2).expect("expected edit to apply");
    assert_eq!(out.source, "f(x)");
    assert_eq!(out.cursor, 3);
}
