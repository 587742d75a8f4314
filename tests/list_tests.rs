//! Unordered list tests.

use downhill::to_html;

#[test]
fn flat_list() {
    assert_eq!(to_html("* a\n* b\n"), "<ul><li>a\n</li><li>b\n</li></ul>");
}

#[test]
fn flat_list_ignoring_newlines() {
    let html = to_html("* a\n* b\n").replace('\n', "");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn nested_list_and_return() {
    assert_eq!(
        to_html("* a\n\t\t* b\n* c"),
        "<ul><li>a\n<ul><li>b\n</li></ul></li><li>c</li></ul>"
    );
}

#[test]
fn single_tab_stays_at_level_one() {
    assert_eq!(to_html("* a\n\t* b"), "<ul><li>a\n</li><li>b</li></ul>");
}

#[test]
fn deep_indent_saturates_at_two() {
    assert_eq!(
        to_html("* a\n\t\t\t\t\t\t* b"),
        "<ul><li>a\n<ul><li>b</li></ul></li></ul>"
    );
}

#[test]
fn indented_first_item_starts_at_level_one() {
    assert_eq!(to_html("\t\t* a"), "<ul><li>a</li></ul>");
}

#[test]
fn list_ends_at_plain_line() {
    assert_eq!(to_html("* a\ntext"), "<ul><li>a\n</li></ul>text");
}

#[test]
fn nested_list_ends_at_plain_line() {
    assert_eq!(
        to_html("* a\n\t\t* b\ntext"),
        "<ul><li>a\n<ul><li>b\n</li></ul></li></ul>text"
    );
}

#[test]
fn marker_needs_space() {
    assert_eq!(to_html("*a*"), "<i>a</i>");
}

#[test]
fn item_with_emphasis() {
    assert_eq!(to_html("* **b**"), "<ul><li><b>b</b></li></ul>");
}
