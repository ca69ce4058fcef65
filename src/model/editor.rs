//! Editor state - cursor and viewport
//!
//! A single cursor, no selections: the editor only needs to type, move and
//! reflow.

/// Cursor position in the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters)
    pub column: usize,
    /// Desired column for vertical movement (preserves position when moving through short lines)
    pub desired_column: Option<usize>,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at a specific position
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }
}

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of text columns that fit in the viewport (gutter excluded)
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

/// Editor state - cursor plus what part of the document is on screen
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Lines kept visible above/below the cursor when scrolling
    pub scroll_padding: usize,
}

impl EditorState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cursor: Cursor::new(),
            viewport,
            scroll_padding: 1,
        }
    }

    /// Scroll the viewport so the cursor is on screen, moving as little as possible
    pub fn ensure_cursor_visible(&mut self) {
        let vp = &mut self.viewport;
        let padding = self
            .scroll_padding
            .min(vp.visible_lines.saturating_sub(1) / 2);
        let line = self.cursor.line;

        if line < vp.top_line + padding {
            vp.top_line = line.saturating_sub(padding);
        } else if vp.visible_lines > 0 && line + padding >= vp.top_line + vp.visible_lines {
            vp.top_line = (line + padding + 1).saturating_sub(vp.visible_lines);
        }

        let column = self.cursor.column;
        if column < vp.left_column {
            vp.left_column = column;
        } else if vp.visible_columns > 0 && column >= vp.left_column + vp.visible_columns {
            vp.left_column = column + 1 - vp.visible_columns;
        }
    }
}
