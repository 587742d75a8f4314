//! Fixture-driven conversion tests.
//!
//! Runs every case in tests/fixtures/cases.json through the renderer.

use downhill::{EmphasisMode, Options, to_html_with_options};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    markdown: String,
    html: String,
    #[serde(default = "default_links")]
    links: bool,
    #[serde(default)]
    emphasis: Emphasis,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Emphasis {
    #[default]
    Toggle,
    Nested,
}

fn default_links() -> bool {
    true
}

fn load_cases() -> Vec<Case> {
    let json = fs::read_to_string("tests/fixtures/cases.json")
        .expect("Failed to read tests/fixtures/cases.json");
    serde_json::from_str(&json).expect("Failed to parse cases.json")
}

impl Case {
    fn options(&self) -> Options {
        Options {
            links: self.links,
            emphasis: match self.emphasis {
                Emphasis::Toggle => EmphasisMode::Toggle,
                Emphasis::Nested => EmphasisMode::Nested,
            },
        }
    }
}

#[test]
fn fixture_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let failures: Vec<_> = cases
        .iter()
        .filter_map(|case| {
            let output = to_html_with_options(&case.markdown, &case.options());
            (output != case.html).then(|| {
                format!(
                    "{}\n  markdown: {:?}\n  expected: {:?}\n  actual:   {:?}",
                    case.name, case.markdown, case.html, output
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}
