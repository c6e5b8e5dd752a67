//! Answer tokenization
//!
//! Converts raw agent output into an ordered sequence of typed segments so
//! the rendering layer never re-parses the text. The only markup recognized
//! is the `[label](url)` link pattern; everything else, including malformed
//! link candidates, passes through as literal text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[label](url)` where the label stops at the first `]` and the url must
    /// be http(s) with no whitespace or `)` inside. `[^\]]+` is what gives the
    /// first-`]`-wins behavior; bracket nesting is never balanced.
    static ref LINK_RE: Regex =
        Regex::new(r"\[([^\]]+)\]\((https?://[^\s)]+)\)").expect("valid regex");
}

/// One unit of tokenized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, rendered verbatim.
    Text(String),
    /// A hyperlink; `url` always starts with `http://` or `https://`.
    Link { label: String, url: String },
}

/// Split `text` into segments with a single left-to-right scan.
///
/// Matches never overlap: each search resumes at the end of the previous
/// match. Empty input yields an empty sequence (the renderer prints nothing).
pub fn tokenize(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in LINK_RE.captures_iter(text) {
        let matched = caps.get(0).expect("capture group 0 always present");
        if matched.start() > cursor {
            segments.push(Segment::Text(text[cursor..matched.start()].to_string()));
        }
        segments.push(Segment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        cursor = matched.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuild the source text from segments; must equal the input exactly.
    fn reconstruct(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.clone(),
                Segment::Link { label, url } => format!("[{}]({})", label, url),
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_text_yields_single_segment() {
        let segments = tokenize("no links here, just prose.");
        assert_eq!(
            segments,
            vec![Segment::Text("no links here, just prose.".to_string())]
        );
    }

    #[test]
    fn link_with_surrounding_text() {
        let segments = tokenize("see [the docs](https://docs.rs/regex) for details");
        assert_eq!(
            segments,
            vec![
                Segment::Text("see ".to_string()),
                Segment::Link {
                    label: "the docs".to_string(),
                    url: "https://docs.rs/regex".to_string(),
                },
                Segment::Text(" for details".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_links_have_no_empty_text_between() {
        let segments = tokenize("[a](http://x.com)[b](http://y.com)");
        assert_eq!(
            segments,
            vec![
                Segment::Link {
                    label: "a".to_string(),
                    url: "http://x.com".to_string(),
                },
                Segment::Link {
                    label: "b".to_string(),
                    url: "http://y.com".to_string(),
                },
            ]
        );
    }

    #[test]
    fn non_http_scheme_is_not_a_link() {
        let segments = tokenize("[a](ftp://x.com)");
        assert_eq!(segments, vec![Segment::Text("[a](ftp://x.com)".to_string())]);
    }

    #[test]
    fn whitespace_in_url_is_not_a_link() {
        let input = "[a](http://x.com and more)";
        assert_eq!(tokenize(input), vec![Segment::Text(input.to_string())]);
    }

    #[test]
    fn unbalanced_brackets_pass_through() {
        let input = "[dangling](http://x.com";
        assert_eq!(tokenize(input), vec![Segment::Text(input.to_string())]);
    }

    #[test]
    fn label_stops_at_first_closing_bracket() {
        // The candidate starting at `[a` dies on the first `]` (no `(` after
        // it), so the whole thing is literal text.
        let input = "[a[b]](http://x.com)";
        assert_eq!(tokenize(input), vec![Segment::Text(input.to_string())]);

        // With a single `]` the maximal non-`]` run is the label, brackets
        // inside it and all.
        let segments = tokenize("[a[b](http://x.com)");
        assert_eq!(
            segments,
            vec![Segment::Link {
                label: "a[b".to_string(),
                url: "http://x.com".to_string(),
            }]
        );
    }

    #[test]
    fn empty_label_is_not_a_link() {
        let input = "[](http://x.com)";
        assert_eq!(tokenize(input), vec![Segment::Text(input.to_string())]);
    }

    #[test]
    fn round_trip_reconstructs_source() {
        let cases = [
            "",
            "plain",
            "see [a](http://x.com) and [b](https://y.com/path?q=1) done",
            "[a](http://x.com)[b](http://y.com)",
            "broken [a](ftp://x) [ok](https://z.dev)",
            "trailing text after [last](http://end.io)",
        ];
        for case in cases {
            assert_eq!(reconstruct(&tokenize(case)), case, "case: {case:?}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = "check [a](http://x.com) twice";
        assert_eq!(tokenize(input), tokenize(input));
    }
}
