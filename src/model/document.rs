//! Document model - the text buffer and file state
//!
//! The buffer is a `ropey::Rope` configured to break lines on `\n` only,
//! so its line indices match the `\n`-split snapshots handed to the
//! commit engine. A `\r` before the newline is ordinary line content.

use ropey::Rope;
use std::path::PathBuf;

use crate::commit::CommitMessage;
use crate::error::EditorError;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the message file (None only in tests)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer differs from the last loaded/saved text
    pub is_modified: bool,
    /// Text as of the last load or save
    saved_text: String,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            file_path: None,
            is_modified: false,
            saved_text: text.to_string(),
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(&path).map_err(|e| EditorError::io(&path, &e))?;
        tracing::info!(
            "Loaded {} ({} bytes)",
            path.display(),
            content.len()
        );
        Ok(Self {
            file_path: Some(path),
            ..Self::with_text(&content)
        })
    }

    /// File name for display, `[No Name]` without a path
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by index, without its newline
    pub fn get_line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }
        let mut line = self.buffer.line(line_idx).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Get the length of a line in characters (excluding newline character)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx >= self.buffer.len_lines() {
            return 0;
        }
        let line = self.buffer.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Snapshot of all lines, split on `\n`
    pub fn lines(&self) -> Vec<String> {
        self.buffer
            .to_string()
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    /// Full buffer text
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Parse the current snapshot into a commit message
    pub fn message(&self) -> CommitMessage {
        CommitMessage::parse(&self.lines())
    }

    /// Convert a (line, column) position to a buffer offset
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a buffer offset to (line, column) position
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Insert text at a character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.buffer.len_chars());
        self.buffer.insert(offset, text);
        self.touch();
    }

    /// Remove the characters in `start..end`
    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.buffer.len_chars());
        if start >= end {
            return;
        }
        self.buffer.remove(start..end);
        self.touch();
    }

    /// Replace lines `start..end` (exclusive) with `replacement`
    pub fn replace_lines(&mut self, start: usize, end: usize, replacement: &[String]) {
        let mut lines = self.lines();
        let end = end.min(lines.len());
        let start = start.min(end);
        lines.splice(start..end, replacement.iter().cloned());
        self.set_lines(&lines);
    }

    /// Replace the whole buffer with the given lines
    pub fn set_lines(&mut self, lines: &[String]) {
        self.buffer = Rope::from_str(&lines.join("\n"));
        self.touch();
    }

    /// Record the current buffer as the saved state
    pub fn mark_saved(&mut self) {
        self.saved_text = self.buffer.to_string();
        self.is_modified = false;
    }

    fn touch(&mut self) {
        self.is_modified = self.buffer != self.saved_text.as_str();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
