use textbuf::{Span, TextBuffer};

use crate::tests::accept_dsl::BlendingTail;
use crate::{CompletionItem, StaticTail, reconcile};

fn range_based(start: u32, end: u32, insert_text: &str) -> CompletionItem {
    CompletionItem::RangeBased {
        range: Span::new(start, end),
        insert_text: insert_text.to_string(),
    }
}

fn tail(text: &str) -> CompletionItem {
    CompletionItem::Tail(Box::new(StaticTail::new(text)))
}

#[test]
fn range_based_uses_item_range_verbatim() {
    let doc = TextBuffer::new("function f() {}");
    let rec = reconcile(&doc, 13, &range_based(13, 13, "return 1;")).expect("expected mutation");

    assert_eq!(rec.replace, Span::new(13, 13));
    assert_eq!(rec.text, "return 1;");
    assert_eq!(rec.caret_after, 22);
}

#[test]
fn range_based_out_of_bounds_yields_none() {
    let doc = TextBuffer::new("short");
    assert!(reconcile(&doc, 0, &range_based(2, 40, "x")).is_none());
    assert!(reconcile(&doc, 0, &range_based(4, 2, "x")).is_none());
}

#[test]
fn range_based_split_utf8_boundary_yields_none() {
    // 'é' occupies bytes 1..3.
    let doc = TextBuffer::new("aéb");
    assert!(reconcile(&doc, 0, &range_based(1, 2, "x")).is_none());
}

#[test]
fn tail_with_empty_suffix_inserts_generated_text_only() {
    let doc = TextBuffer::new("console.log(");
    let rec = reconcile(&doc, 12, &tail("'ok');")).expect("expected mutation");

    // The empty suffix is contained in anything, so nothing is re-appended.
    assert_eq!(rec.replace, Span::new(12, 12));
    assert_eq!(rec.text, "'ok');");
    assert_eq!(rec.caret_after, 18);
}

#[test]
fn tail_reappends_suffix_the_source_did_not_regenerate() {
    // The editor auto-closed the paren; the source only produced the argument.
    let doc = TextBuffer::new("console.log()");
    let rec = reconcile(&doc, 12, &tail("'hi'")).expect("expected mutation");

    assert_eq!(rec.replace, Span::new(12, 13));
    assert_eq!(rec.text, "'hi')");
    assert_eq!(rec.caret_after, 17);
}

#[test]
fn tail_does_not_duplicate_a_regenerated_suffix() {
    let doc = TextBuffer::new("console.log()");
    let item = CompletionItem::Tail(Box::new(BlendingTail("'hi'")));
    let rec = reconcile(&doc, 12, &item).expect("expected mutation");

    assert_eq!(rec.text, "'hi')");
    assert_eq!(rec.text.matches(')').count(), 1);
}

#[test]
fn tail_replace_stops_at_the_end_of_the_caret_line() {
    let doc = TextBuffer::new("let a = 1;\nconsole.log()\ndone");
    let rec = reconcile(&doc, 23, &tail("'x'")).expect("expected mutation");

    assert_eq!(rec.replace, Span::new(23, 24));
    assert_eq!(rec.text, "'x')");
    assert_eq!(rec.caret_after, 27);
}

#[test]
fn tail_caret_past_document_end_yields_none() {
    let doc = TextBuffer::new("abc");
    assert!(reconcile(&doc, 99, &tail("x")).is_none());
}

#[test]
fn caret_lands_at_replace_start_plus_text_len() {
    let doc = TextBuffer::new("return x");
    let cases = [
        reconcile(&doc, 7, &tail("y; // x")),
        reconcile(&doc, 7, &tail("null")),
        reconcile(&doc, 0, &range_based(0, 8, "return y")),
    ];

    for rec in cases {
        let rec = rec.expect("expected mutation");
        assert_eq!(rec.caret_after, rec.replace.start + rec.text.len() as u32);
    }
}
