//! Greedy word wrap for commit bodies
//!
//! Tokens are delimited by spaces, tabs and line breaks and re-joined with
//! a single space. A token longer than the width (URLs, paths, long
//! identifiers) is never split: it gets a line of its own, even though that
//! line overflows.
//!
//! A `\r` is content to [`wrap`]. The rewrap entry points strip a trailing
//! `\r` before wrapping and put it back on every produced line, so CRLF
//! text stays CRLF.

use super::message::CommitMessage;
use super::{char_len, is_blank};

const TOKEN_SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// Wrap a paragraph to `max_width` characters.
///
/// - Blank input gives an empty result.
/// - A single line that already fits is returned unchanged.
/// - Otherwise tokens are packed greedily: a token joins the current line
///   while `current + 1 + token <= max_width`.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if is_blank(text) {
        return Vec::new();
    }

    if !text.contains('\n') && char_len(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for token in text.split(TOKEN_SEPARATORS).filter(|t| !t.is_empty()) {
        let token_len = char_len(token);

        if current_len == 0 {
            current.push_str(token);
            current_len = token_len;
        } else if current_len + 1 + token_len <= max_width {
            current.push(' ');
            current.push_str(token);
            current_len += 1 + token_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// An edit instruction for the editing surface: replace document lines
/// `start_line..end_line` with `lines` and move the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrap {
    pub start_line: usize,
    /// Exclusive
    pub end_line: usize,
    pub lines: Vec<String>,
    pub cursor_line: usize,
    pub cursor_column: usize,
}

/// Wrap the line under the cursor if it is a body line wider than
/// `max_width`.
///
/// Only the cursor line is touched: the overflow moves onto new lines
/// inserted below it and the rest of the paragraph is left alone. Returns
/// `None` when nothing needs to change.
pub fn rewrap_cursor_line(
    lines: &[String],
    message: &CommitMessage,
    cursor_line: usize,
    cursor_column: usize,
    max_width: usize,
) -> Option<Rewrap> {
    message.paragraph_at(cursor_line)?;
    let (line, cr) = split_cr(lines.get(cursor_line)?);

    if char_len(line) <= max_width {
        return None;
    }

    let mut wrapped = wrap(line, max_width);
    if wrapped.len() <= 1 {
        return None;
    }

    // Keep a trailing space so the next typed word doesn't glue onto the last one
    if line.ends_with([' ', '\t']) {
        if let Some(last) = wrapped.last_mut() {
            last.push(' ');
        }
    }

    let (line_offset, column) = map_cursor(&[line], 0, cursor_column, &wrapped);
    append_cr(&mut wrapped, cr);

    tracing::debug!(
        line = cursor_line,
        into = wrapped.len(),
        "Wrapped overflowing body line"
    );

    Some(Rewrap {
        start_line: cursor_line,
        end_line: cursor_line + 1,
        lines: wrapped,
        cursor_line: cursor_line + line_offset,
        cursor_column: column,
    })
}

/// Reflow the whole paragraph under the cursor.
///
/// Returns `None` when the cursor is not in a body paragraph or the
/// paragraph is already wrapped the way [`wrap`] would wrap it.
pub fn reflow_paragraph(
    message: &CommitMessage,
    cursor_line: usize,
    cursor_column: usize,
    max_width: usize,
) -> Option<Rewrap> {
    let paragraph = message.paragraph_at(cursor_line)?;

    // CRLF only when every line carries the `\r`; otherwise it is content
    let crlf = paragraph.lines.iter().all(|l| l.ends_with('\r'));
    let source: Vec<&str> = paragraph
        .lines
        .iter()
        .map(|l| if crlf { split_cr(l).0 } else { l.as_str() })
        .collect();

    let mut wrapped = wrap(&source.join("\n"), max_width);
    let (line_offset, column) = map_cursor(
        &source,
        cursor_line - paragraph.start_line,
        cursor_column,
        &wrapped,
    );
    append_cr(&mut wrapped, if crlf { "\r" } else { "" });

    if wrapped == paragraph.lines {
        return None;
    }

    tracing::debug!(
        start = paragraph.start_line,
        from = paragraph.lines.len(),
        into = wrapped.len(),
        "Reflowed paragraph"
    );

    Some(Rewrap {
        start_line: paragraph.start_line,
        end_line: paragraph.end_line(),
        lines: wrapped,
        cursor_line: paragraph.start_line + line_offset,
        cursor_column: column,
    })
}

fn is_separator(ch: char) -> bool {
    TOKEN_SEPARATORS.contains(&ch)
}

/// Split a trailing `\r` off a line
fn split_cr(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(rest) => (rest, "\r"),
        None => (line, ""),
    }
}

fn append_cr(lines: &mut [String], cr: &str) {
    if cr.is_empty() {
        return;
    }
    for line in lines {
        line.push_str(cr);
    }
}

/// Find where a cursor in `source` lands in `wrapped`.
///
/// Wrapping only moves separators around, so the cursor is anchored to the
/// number of other characters before it.
fn map_cursor(
    source: &[&str],
    line: usize,
    column: usize,
    wrapped: &[String],
) -> (usize, usize) {
    let mut anchor = 0;
    let mut after_space = false;

    for (idx, text) in source.iter().enumerate().take(line + 1) {
        let take = if idx == line { column } else { usize::MAX };
        let mut taken = 0;
        for ch in text.chars().take(take) {
            if !is_separator(ch) {
                anchor += 1;
            }
            after_space = is_separator(ch);
            taken += 1;
        }
        if idx < line && taken > 0 {
            // The line break counts as whitespace
            after_space = true;
        }
    }

    if anchor == 0 {
        return (0, 0);
    }

    let mut seen = 0;
    for (row, text) in wrapped.iter().enumerate() {
        for (col, ch) in text.chars().enumerate() {
            if is_separator(ch) {
                continue;
            }
            seen += 1;
            if seen == anchor {
                let col = col + 1;
                if !after_space {
                    return (row, col);
                }
                if text.chars().nth(col).is_some_and(is_separator) {
                    return (row, col + 1);
                }
                if col == char_len(text) && row + 1 < wrapped.len() {
                    return (row + 1, 0);
                }
                return (row, col);
            }
        }
    }

    let last = wrapped.len().saturating_sub(1);
    (last, wrapped.get(last).map_or(0, |l| char_len(l)))
}
