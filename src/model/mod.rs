//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod status_bar;
pub mod ui;

pub use document::Document;
pub use editor::{Cursor, EditorState, Viewport};
pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment,
};
pub use ui::{BarMessage, Prompt, UiState};

use crate::git::{GitIdentity, IdentityProvider};

/// Rows below the text area: status bar and message bar
pub const CHROME_ROWS: u16 = 2;

/// Width of the line number gutter for a document, including one column
/// of padding (e.g. "  12 ")
pub fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(3) + 2
}

/// The complete application model
pub struct AppModel {
    pub document: Document,
    pub editor: EditorState,
    pub ui: UiState,
    /// Committer identity for the sign-off toggle
    pub identity: Box<dyn IdentityProvider>,
}

impl AppModel {
    /// Create a model for a loaded document, looking up identity with git
    pub fn new(document: Document, terminal_size: (u16, u16)) -> Self {
        Self::with_identity(document, terminal_size, Box::new(GitIdentity))
    }

    /// Create a model with a specific identity provider
    pub fn with_identity(
        document: Document,
        terminal_size: (u16, u16),
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        let mut model = Self {
            document,
            editor: EditorState::new(Viewport::default()),
            ui: UiState::new(),
            identity,
        };
        model.resize(terminal_size.0, terminal_size.1);
        sync_status_bar(&mut model);
        model
    }

    /// Recompute the viewport for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.ui.terminal_size = (width, height);
        let gutter = gutter_width(self.document.line_count());
        let vp = &mut self.editor.viewport;
        vp.visible_lines = height.saturating_sub(CHROME_ROWS) as usize;
        vp.visible_columns = (width as usize).saturating_sub(gutter);
        self.editor.ensure_cursor_visible();
    }

    /// Length of the cursor line
    pub fn current_line_length(&self) -> usize {
        self.document.line_length(self.editor.cursor.line)
    }

    /// Clamp the cursor into the document
    pub fn clamp_cursor(&mut self) {
        let last_line = self.document.line_count().saturating_sub(1);
        let cursor = &mut self.editor.cursor;
        cursor.line = cursor.line.min(last_line);
        cursor.column = cursor.column.min(self.document.line_length(cursor.line));
    }

    /// Move the cursor to a position, clamped into the document
    pub fn set_cursor(&mut self, line: usize, column: usize) {
        self.editor.cursor.line = line;
        self.editor.cursor.column = column;
        self.editor.cursor.desired_column = None;
        self.clamp_cursor();
        self.editor.ensure_cursor_visible();
    }

    /// Character offset of the cursor in the buffer
    pub fn cursor_offset(&self) -> usize {
        let cursor = self.editor.cursor;
        self.document.cursor_to_offset(cursor.line, cursor.column)
    }
}
