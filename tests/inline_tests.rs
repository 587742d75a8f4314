//! Inline construct tests: emphasis, code spans, links and images.

use downhill::{EmphasisMode, Options, to_html, to_html_with_options};

fn nested(input: &str) -> String {
    let options = Options {
        emphasis: EmphasisMode::Nested,
        ..Options::default()
    };
    to_html_with_options(input, &options)
}

// === Emphasis (toggle) ===

#[test]
fn emphasis_strengths() {
    assert_eq!(
        to_html("*em* **bold** ***both***"),
        "<i>em</i> <b>bold</b> <b><i>both</i></b>"
    );
}

#[test]
fn underscore_markers() {
    assert_eq!(to_html("_a_ __b__"), "<i>a</i> <b>b</b>");
}

#[test]
fn long_run_is_literal() {
    assert_eq!(to_html("****"), "****");
    assert_eq!(to_html("a *****b"), "a *****b");
}

#[test]
fn toggle_closes_with_run_length() {
    assert_eq!(to_html("**a*"), "<b>a</i>");
}

#[test]
fn toggle_span_crosses_lines() {
    assert_eq!(to_html("*a\nb"), "<i>a\nb</i>");
}

// === Emphasis (nested) ===

#[test]
fn nested_matching_pairs() {
    assert_eq!(nested("*a* **b**"), "<i>a</i> <b>b</b>");
}

#[test]
fn nested_interleaved_stays_well_formed() {
    assert_eq!(nested("*a **b* c**"), "<i>a <b>b</b></i><b> c</b>");
}

#[test]
fn nested_closes_at_line_end() {
    assert_eq!(nested("*a\nb"), "<i>a</i>\nb");
}

#[test]
fn nested_distinguishes_marker_bytes() {
    assert_eq!(nested("*a _b* c_"), "<i>a <i>b</i></i><i> c</i>");
}

#[test]
fn nested_depth_is_capped() {
    assert_eq!(
        nested("*a _b **c __d ***e"),
        "<i>a <i>b <b>c <b>d ***e</b></b></i></i>"
    );
}

// === Code spans ===

#[test]
fn code_span() {
    assert_eq!(to_html("`let *x*`"), "<pre>let *x*</pre>");
}

#[test]
fn unclosed_code_span_closed_at_end() {
    assert_eq!(to_html("`x"), "<pre>x</pre>");
}

// === Links and images ===

#[test]
fn link_mid_line() {
    assert_eq!(
        to_html("see [docs](http://x.y) now"),
        "see <a href=\"http://x.y\">docs</a> now"
    );
}

#[test]
fn image() {
    assert_eq!(to_html("![logo](a.png)"), "<img alt=\"logo\" src=\"a.png\">");
}

#[test]
fn unterminated_link_is_literal() {
    assert_eq!(to_html("[docs](x"), "[docs](x");
    assert_eq!(to_html("[docs] (x)"), "[docs] (x)");
}

#[test]
fn link_does_not_cross_lines() {
    assert_eq!(to_html("[a\n](b)"), "[a\n](b)");
}

#[test]
fn links_disabled() {
    let options = Options {
        links: false,
        ..Options::default()
    };
    assert_eq!(to_html_with_options("[a](b) ![c](d)", &options), "[a](b) ![c](d)");
}

#[test]
fn link_inside_code_is_literal() {
    assert_eq!(to_html("`[a](b)`"), "<pre>[a](b)</pre>");
}

#[test]
fn link_target_keeps_underscores() {
    assert_eq!(
        to_html("[a](snake_case.html)"),
        "<a href=\"snake_case.html\">a</a>"
    );
}
