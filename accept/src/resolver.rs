use textbuf::{Caret, CaretSet};

/// Picks the single caret an accept operation targets.
///
/// An explicit index always wins. Otherwise only a singleton caret-set
/// resolves: accepting under multi-cursor editing is ambiguous (which
/// cursor's suggestion wins?), so acceptance is disabled and the keypress
/// falls through to default behavior.
pub fn resolve_caret(carets: &dyn CaretSet, explicit: Option<usize>) -> Option<(usize, Caret)> {
    let all = carets.carets();

    if let Some(idx) = explicit {
        return all.get(idx).map(|caret| (idx, *caret));
    }

    if all.len() == 1 {
        return Some((0, all[0]));
    }

    None
}
