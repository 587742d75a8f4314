//! Blockquote and hard line break tests.

use downhill::to_html;

#[test]
fn single_line_quote() {
    assert_eq!(to_html("> quote"), "<blockquote>quote</blockquote>");
}

#[test]
fn quote_spans_consecutive_lines() {
    assert_eq!(to_html("> a\n> b"), "<blockquote>a\nb</blockquote>");
}

#[test]
fn quote_ends_at_plain_line() {
    assert_eq!(
        to_html("> quote\nplain"),
        "<blockquote>quote\n</blockquote>plain"
    );
}

#[test]
fn marker_without_space() {
    assert_eq!(to_html(">tight"), "<blockquote>tight</blockquote>");
}

#[test]
fn list_inside_quote() {
    assert_eq!(
        to_html("> * a\n> * b"),
        "<blockquote><ul><li>a\n</li><li>b</li></ul></blockquote>"
    );
}

#[test]
fn table_in_quote() {
    assert_eq!(
        to_html("> | a |\n> | - |\n> | b |"),
        "<blockquote><table>\n<thead>\n<tr>\n<th>a</th></tr>\n</thead>\n\
         <tbody>\n<tr>\n<td>b</td></tr>\n</tbody>\n</table>\n</blockquote>"
    );
}

#[test]
fn quoted_delimiter_does_not_open_table_outside_quote() {
    assert_eq!(to_html("| a |\n> | - |"), "| a |\n<blockquote>| - |</blockquote>");
}

#[test]
fn quote_closes_list() {
    assert_eq!(
        to_html("* a\n> q"),
        "<ul><li>a\n</li></ul><blockquote>q</blockquote>"
    );
}

#[test]
fn trailing_double_space_breaks_line() {
    assert_eq!(to_html("a  \nb"), "a  \n<br />b");
}

#[test]
fn single_trailing_space_is_not_a_break() {
    assert_eq!(to_html("a \nb"), "a \nb");
}
