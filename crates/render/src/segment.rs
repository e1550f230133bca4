/// One piece of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, never containing a newline.
    Text(&'a str),
    /// Contents of a `**...**` run.
    Heading(&'a str),
    LineBreak,
}

const MARKER: &str = "**";

/// Splits `text` into text, heading and line break segments.
///
/// Adjacent text pieces are merged.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push(Segment::LineBreak);
        }
        split_line(line, &mut out);
    }
    out
}

fn split_line<'a>(line: &'a str, out: &mut Vec<Segment<'a>>) {
    // Start of the pending text run.
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(found) = line[pos..].find(MARKER) {
        let open = pos + found;
        let body = open + MARKER.len();
        match line[body..].find(MARKER) {
            Some(len) => {
                if open > text_start {
                    out.push(Segment::Text(&line[text_start..open]));
                }
                out.push(Segment::Heading(&line[body..body + len]));
                pos = body + len + MARKER.len();
                text_start = pos;
            }
            // No closer on this line: the first `*` is literal, retry from the next one.
            None => pos = open + 1,
        }
    }

    if text_start < line.len() {
        out.push(Segment::Text(&line[text_start..]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::*;

    #[test]
    fn splits_headings_and_breaks() {
        assert_eq!(
            segments("**Intro**\nHello **world**!"),
            vec![
                Heading("Intro"),
                LineBreak,
                Text("Hello "),
                Heading("world"),
                Text("!"),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn blank_lines_are_breaks() {
        assert_eq!(segments("\n\n"), vec![LineBreak, LineBreak]);
    }

    #[test]
    fn unmatched_marker_merges_into_text() {
        assert_eq!(segments("a ** b"), vec![Text("a ** b")]);
        assert_eq!(segments("**"), vec![Text("**")]);
        assert_eq!(segments("***"), vec![Text("***")]);
    }

    #[test]
    fn odd_stars() {
        assert_eq!(segments("***a**"), vec![Heading("*a")]);
        assert_eq!(segments("*****"), vec![Heading(""), Text("*")]);
    }
}
