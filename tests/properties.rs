//! Property tests over generated Markdown.

use downhill::{EmphasisMode, Options, render, to_html_with_options};
use proptest::prelude::*;

/// Markdown-ish text built from the dialect's marker bytes. `<` is left out
/// so every tag in the output comes from the renderer.
fn markdown() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[#>*_`|=\\- \tab\n\\[\\]()!]{0,200}").unwrap()
}

fn emphasis_mode() -> impl Strategy<Value = EmphasisMode> {
    prop_oneof![Just(EmphasisMode::Toggle), Just(EmphasisMode::Nested)]
}

const BLOCK_TAGS: &[&str] = &[
    "blockquote", "ul", "li", "table", "thead", "tbody", "tr", "th", "td", "h1", "h2", "h3",
    "h4", "h5", "h6",
];

fn max_list_depth(html: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut rest = html;
    while let Some(idx) = rest.find('<') {
        rest = &rest[idx..];
        if rest.starts_with("<ul>") {
            depth += 1;
            max = max.max(depth);
        } else if rest.starts_with("</ul>") {
            depth = depth.saturating_sub(1);
        }
        rest = &rest[1..];
    }
    max
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_bytes(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut out = Vec::new();
        render(&input, &mut out, &Options::default());
        let mut out = Vec::new();
        let nested = Options { emphasis: EmphasisMode::Nested, ..Options::default() };
        render(&input, &mut out, &nested);
    }

    #[test]
    fn output_is_deterministic(input in markdown(), mode in emphasis_mode()) {
        let options = Options { emphasis: mode, ..Options::default() };
        prop_assert_eq!(
            to_html_with_options(&input, &options),
            to_html_with_options(&input, &options)
        );
    }

    #[test]
    fn block_tags_are_balanced(input in markdown(), mode in emphasis_mode()) {
        let options = Options { emphasis: mode, ..Options::default() };
        let html = to_html_with_options(&input, &options);
        for tag in BLOCK_TAGS {
            let opens = html.matches(&format!("<{tag}>")).count();
            let closes = html.matches(&format!("</{tag}>")).count();
            prop_assert_eq!(opens, closes, "unbalanced <{}> in {:?}", tag, html);
        }
    }

    #[test]
    fn list_depth_never_exceeds_two(input in markdown()) {
        let html = to_html_with_options(&input, &Options::default());
        prop_assert!(max_list_depth(&html) <= 2, "too deep: {:?}", html);
    }

    #[test]
    fn nested_emphasis_is_balanced(input in markdown()) {
        let options = Options { emphasis: EmphasisMode::Nested, ..Options::default() };
        let html = to_html_with_options(&input, &options);
        for tag in ["i", "b"] {
            let opens = html.matches(&format!("<{tag}>")).count();
            let closes = html.matches(&format!("</{tag}>")).count();
            prop_assert_eq!(opens, closes, "unbalanced <{}> in {:?}", tag, html);
        }
    }
}
