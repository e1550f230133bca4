//! Summary formatting.
//!
//! The service returns summaries as lightly marked-up text: `**Title**`
//! marks a section heading and `\n` a line break. [`segments`] parses that
//! into a flat token stream; [`format_summary`] renders the stream as the
//! HTML fragment shown to the user. Other front ends (the terminal renderer
//! in the CLI, for instance) walk the segments themselves.

mod segment;

pub use segment::{Segment, segments};

/// Class list applied to every heading.
pub const HEADING_CLASS: &str = "fw-bold mt-3";

/// Turns `**X**` runs into headings and newlines into `<br>`.
///
/// Matching is shortest-first and never crosses a line break, so
/// `**a** and **b**` yields two headings and an unterminated `**` is kept
/// as literal text. Everything else passes through untouched.
pub fn format_summary(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + 32);
    for segment in segments(text) {
        match segment {
            Segment::Text(t) => html.push_str(t),
            Segment::Heading(h) => {
                html.push_str("<h5 class=\"");
                html.push_str(HEADING_CLASS);
                html.push_str("\">");
                html.push_str(h);
                html.push_str("</h5>");
            }
            Segment::LineBreak => html.push_str("<br>"),
        }
    }
    html
}
