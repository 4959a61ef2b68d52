//! Search-query highlighting.
//!
//! Splits text into matching and non-matching runs (case-insensitive,
//! literal) so the explorer, the text viewer and the Markdown renderer
//! mark matches the same way.

use regex::{Regex, RegexBuilder};

/// A run of text and whether it matched the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into runs around case-insensitive occurrences of `query`.
///
/// A blank query yields the whole text as a single unmatched run.
pub fn split_matches<'a>(text: &'a str, query: &str) -> Vec<Run<'a>> {
    let Some(re) = query_regex(query) else {
        return vec![Run {
            text,
            matched: false,
        }];
    };

    let mut runs = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            runs.push(Run {
                text: &text[last..m.start()],
                matched: false,
            });
        }
        runs.push(Run {
            text: m.as_str(),
            matched: true,
        });
        last = m.end();
    }
    if last < text.len() || runs.is_empty() {
        runs.push(Run {
            text: &text[last..],
            matched: false,
        });
    }
    runs
}

/// Escape `text` as HTML, wrapping matches of `query` in `<mark>`.
pub fn highlight_matches(text: &str, query: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for run in split_matches(text, query) {
        let escaped = ammonia::clean_text(run.text);
        if run.matched {
            html.push_str("<mark>");
            html.push_str(&escaped);
            html.push_str("</mark>");
        } else {
            html.push_str(&escaped);
        }
    }
    html
}

fn query_regex(query: &str) -> Option<Regex> {
    if query.trim().is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}
