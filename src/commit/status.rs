//! Status values shown in the status bar

use super::message::CommitMessage;
use super::{char_len, TITLE_MAX_LENGTH};

/// Display values derived from the cursor and the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// 1-indexed line
    pub line: usize,
    /// 1-indexed column
    pub column: usize,
    pub title_length: usize,
    /// Title is longer than [`TITLE_MAX_LENGTH`]
    pub warn: bool,
}

/// Project a character offset into the message onto line/column values.
///
/// Every line counts its characters plus one for the `\n` that follows it.
/// Offsets past the end clamp to the end of the last line.
pub fn status(cursor_offset: usize, message: &CommitMessage) -> Status {
    let (line, column) = offset_to_line_column(cursor_offset, &message.to_lines());
    let title_length = message.title_length();

    Status {
        line: line + 1,
        column: column + 1,
        title_length,
        warn: title_length > TITLE_MAX_LENGTH,
    }
}

/// 0-indexed (line, column) for a character offset
fn offset_to_line_column(offset: usize, lines: &[String]) -> (usize, usize) {
    let mut remaining = offset;

    for (idx, line) in lines.iter().enumerate() {
        let len = char_len(line);
        if remaining <= len {
            return (idx, remaining);
        }
        if idx + 1 == lines.len() {
            return (idx, len);
        }
        remaining -= len + 1;
    }

    (0, 0)
}
