//! Terminal rendering of summaries.

use console::style;
use gigapdf_render::{Segment, segments};

/// Renders a summary for the terminal: headings in bold on their own line,
/// markup tags dropped.
pub fn to_terminal(summary: &str) -> String {
    let mut out = String::with_capacity(summary.len());
    for segment in segments(summary) {
        match segment {
            Segment::Text(t) => out.push_str(&strip_tags(t)),
            Segment::Heading(h) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&style(strip_tags(h)).bold().to_string());
            }
            Segment::LineBreak => out.push('\n'),
        }
    }
    out.trim_end().to_string()
}

/// Drops `<...>` tags, keeping the text between them.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
