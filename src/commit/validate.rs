//! Title length validation
//!
//! Produces advisory highlight spans; nothing here ever rejects a message.

use super::message::CommitMessage;
use super::TITLE_MAX_LENGTH;

/// What a highlight span marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Title characters past the recommended length
    TitleOverflow,
}

/// A highlighted character range within one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Document line index (0-indexed)
    pub line: usize,
    /// First highlighted character (inclusive)
    pub start: usize,
    /// End of the range (exclusive, never past the line length)
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the character at `column` on `line` is covered
    pub fn covers(&self, line: usize, column: usize) -> bool {
        self.line == line && (self.start..self.end).contains(&column)
    }
}

/// Result of validating a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub spans: Vec<Span>,
    pub title_length: usize,
}

impl Validation {
    pub fn title_too_long(&self) -> bool {
        self.title_length > TITLE_MAX_LENGTH
    }

    /// Spans on a given line, in order
    pub fn spans_on_line(&self, line: usize) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.line == line)
    }
}

/// Compute highlight spans for a message
pub fn validate(message: &CommitMessage) -> Validation {
    let title_length = message.title_length();
    let mut spans = Vec::new();

    if title_length > TITLE_MAX_LENGTH {
        spans.push(Span {
            line: 0,
            start: TITLE_MAX_LENGTH,
            end: title_length,
            kind: SpanKind::TitleOverflow,
        });
    }

    Validation {
        spans,
        title_length,
    }
}
