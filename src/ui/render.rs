//! Answer rendering
//!
//! Maps tokenized answer segments onto terminal output. Link segments become
//! OSC 8 hyperlinks so capable terminals make them clickable; everywhere else
//! they degrade to `label (url)` so nothing is lost in a pipe.

use askterm_core::answer::{tokenize, Segment};
use console::Style;

/// Render an answer for the terminal.
///
/// `hyperlinks` should be true when styled output is on (see
/// `console::colors_enabled`); an empty answer renders as an empty string.
pub fn render_answer(answer: &str, hyperlinks: bool) -> String {
    let mut out = String::new();
    for segment in tokenize(answer) {
        match segment {
            Segment::Text(text) => out.push_str(&text),
            Segment::Link { label, url } => out.push_str(&render_link(&label, &url, hyperlinks)),
        }
    }
    out
}

fn render_link(label: &str, url: &str, hyperlinks: bool) -> String {
    if !hyperlinks {
        return format!("{} ({})", label, url);
    }
    let styled = Style::new().blue().underlined().apply_to(label);
    // OSC 8 hyperlink: ESC ] 8 ; ; url ST label ESC ] 8 ; ; ST
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, styled)
}
