use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_text_edit_kinds() {
    let insert = TextEdit::insert(5, "&");
    assert!(insert.is_insert());
    assert!(!insert.is_delete());
    assert_eq!(insert.span, Span::point(5));

    let delete = TextEdit::delete(Span::new(0, 4));
    assert!(delete.is_delete());
    assert!(!delete.is_insert());

    let replace = TextEdit::replace(Span::new(0, 4), "x");
    assert!(!replace.is_insert());
    assert!(!replace.is_delete());
}

#[test]
fn test_apply_all_uses_original_offsets() {
    // void f(Widget w);
    let source = "void f(Widget w);";
    let edits = [TextEdit::insert(13, "&"), TextEdit::insert(7, "const ")];
    assert_eq!(
        TextEdit::apply_all(FileId::MAIN, source, &edits).as_deref(),
        Some("void f(const Widget& w);")
    );
}

#[test]
fn test_apply_all_wraps_reference() {
    let source = "return Widget(w);";
    let edits = [TextEdit::insert(14, "std::move("), TextEdit::insert(15, ")")];
    assert_eq!(
        TextEdit::apply_all(FileId::MAIN, source, &edits).as_deref(),
        Some("return Widget(std::move(w));")
    );
}

#[test]
fn test_apply_all_rejects_overlap() {
    let source = "if (p) delete p;";
    let edits = [
        TextEdit::delete(Span::new(0, 6)),
        TextEdit::replace(Span::new(4, 8), "q"),
    ];
    assert_eq!(TextEdit::apply_all(FileId::MAIN, source, &edits), None);
}

#[test]
fn test_apply_all_rejects_out_of_bounds() {
    assert_eq!(
        TextEdit::apply_all(FileId::MAIN, "abc", &[TextEdit::insert(10, "x")]),
        None
    );
}

#[test]
fn test_text_edit_display() {
    assert_eq!(TextEdit::insert(3, "&").to_string(), "insert \"&\" at 3");
    assert_eq!(TextEdit::delete(Span::new(1, 4)).to_string(), "delete 1..4");
    assert_eq!(
        TextEdit::replace(Span::new(1, 4), "x").to_string(),
        "replace 1..4 with \"x\""
    );
}

#[test]
fn test_apply_all_filters_by_file() {
    let header = FileId::new(1);
    let edits = [
        TextEdit::insert(0, "a").in_file(header),
        TextEdit::insert(0, "b"),
    ];
    assert_eq!(TextEdit::apply_all(header, "x", &edits).as_deref(), Some("ax"));
    assert_eq!(
        TextEdit::apply_all(FileId::MAIN, "x", &edits).as_deref(),
        Some("bx")
    );
}

#[test]
fn test_insertions_at_same_offset_keep_order() {
    let edits = [TextEdit::insert(1, "("), TextEdit::insert(1, "[")];
    assert_eq!(
        TextEdit::apply_all(FileId::MAIN, "ab", &edits).as_deref(),
        Some("a([b")
    );
}
