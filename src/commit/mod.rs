//! Commit message engine
//!
//! Pure functions over plain data: parsing a document snapshot into a
//! [`CommitMessage`], wrapping body text, validating the title, toggling
//! trailers, projecting status values and normalizing text for save.
//!
//! Nothing in here touches the terminal or the filesystem.

pub mod message;
pub mod normalize;
pub mod status;
pub mod trailer;
pub mod validate;
pub mod wrap;

pub use message::{BodyBlock, CommitMessage, Paragraph};
pub use normalize::normalize_for_save;
pub use status::{status, Status};
pub use trailer::{is_trailer_line, toggle_sign_off, toggle_trailer, SIGN_OFF_KEY};
pub use validate::{validate, Span, SpanKind, Validation};
pub use wrap::{reflow_paragraph, rewrap_cursor_line, wrap, Rewrap};

/// Maximum recommended title length (characters)
pub const TITLE_MAX_LENGTH: usize = 50;

/// Column at which body text is wrapped (characters)
pub const BODY_MAX_LENGTH: usize = 72;

/// Character length of a line (not byte length)
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A line is blank when it only contains whitespace
#[inline]
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Git comment lines from the commit template
#[inline]
pub(crate) fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}
