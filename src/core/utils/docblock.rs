//! Doc comment (`/** ... */`) extraction.

use swc_common::comments::{Comment, CommentKind};

/// Text of the last JSDoc-style block comment among `comments`, with the
/// leading `*` gutter stripped. Returns None when there is no such comment or
/// it is empty.
pub fn parse_docblock(comments: &[Comment]) -> Option<String> {
    let comment = comments
        .iter()
        .rev()
        .find(|c| c.kind == CommentKind::Block && c.text.starts_with('*'))?;
    let body = &comment.text[1..];

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect();

    let start = lines.iter().position(|line| !line.is_empty())?;
    let end = lines.iter().rposition(|line| !line.is_empty())?;
    Some(lines[start..=end].join("\n"))
}
