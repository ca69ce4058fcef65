//! Status bar model - segments and layout
//!
//! Left: cursor position, title length, modified marker. Right: key hints,
//! dropped when the bar is too narrow.

use crate::commit::status;
use crate::keymap::Keymap;

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Cursor position (e.g., "Ln 3, Col 15")
    CursorPosition,
    /// Title length (e.g., "Title: 42")
    TitleLength,
    /// Modified indicator ("[modified]")
    ModifiedIndicator,
    /// Key binding hints
    KeyHints,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
    /// Text rendered with the warning style
    Warning(String),
    /// Text rendered dimmed
    Dim(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) | SegmentContent::Warning(s) | SegmentContent::Dim(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        self.display_text().is_empty()
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, SegmentContent::Warning(_))
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        self.display_text().chars().count()
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment; the position follows from the segment type
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::CursorPosition | SegmentId::TitleLength | SegmentId::ModifiedIndicator => {
                SegmentPosition::Left
            }
            SegmentId::KeyHints => SegmentPosition::Right,
        };

        Self {
            id,
            position,
            content,
        }
    }

    /// Drawn right after the previous segment, one space apart and
    /// without a separator (`Title: 12 [modified]`)
    pub fn joins_previous(&self) -> bool {
        self.id == SegmentId::ModifiedIndicator
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments and the default
    /// keymap's hints
    pub fn new() -> Self {
        Self::with_key_hints(Keymap::default().status_hints())
    }

    /// Create a status bar advertising the given key hints
    pub fn with_key_hints(hints: String) -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Ln 1, Col 1".into()),
                ),
                StatusSegment::new(
                    SegmentId::TitleLength,
                    SegmentContent::Text("Title: 0".into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::KeyHints, SegmentContent::Dim(hints)),
            ],
            separator_spacing: 3,
            padding: 1,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Iterate over visible segments (non-empty content)
    pub fn visible_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(|s| !s.content.is_empty())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    /// Width in character units
    pub width: usize,
    pub content: SegmentContent,
}

/// Complete layout of the status bar
#[derive(Debug, Clone, Default)]
pub struct StatusBarLayout {
    pub left: Vec<RenderedSegment>,
    pub right: Vec<RenderedSegment>,
    /// X positions of separators between left segments
    pub separator_positions: Vec<usize>,
}

impl StatusBar {
    /// Calculate the layout for rendering
    ///
    /// Right segments are only placed when they leave at least two columns
    /// between them and the left side.
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut layout = StatusBarLayout::default();

        let mut left_x = self.padding;
        let mut prev_segment_end: Option<usize> = None;

        for seg in self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Left)
        {
            if let Some(prev_end) = prev_segment_end {
                if seg.joins_previous() {
                    left_x = prev_end + 1;
                } else {
                    layout
                        .separator_positions
                        .push(prev_end + self.separator_spacing / 2);
                    left_x = prev_end + self.separator_spacing;
                }
            }

            let width = seg.content.char_width();
            layout.left.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                content: seg.content.clone(),
            });
            prev_segment_end = Some(left_x + width);
        }

        let left_end = prev_segment_end.unwrap_or(self.padding);
        let mut right_x = available_width.saturating_sub(self.padding);

        let right_segs: Vec<_> = self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Right)
            .collect();

        for seg in right_segs.iter().rev() {
            let width = seg.content.char_width();
            let Some(x) = right_x.checked_sub(width) else {
                break;
            };
            if x < left_end + 2 {
                break;
            }

            layout.right.push(RenderedSegment {
                id: seg.id,
                x,
                width,
                content: seg.content.clone(),
            });
            right_x = x.saturating_sub(self.separator_spacing);
        }

        layout.right.reverse();
        layout
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current document/editor state
pub fn sync_status_bar(model: &mut AppModel) {
    let cursor = model.editor.cursor;
    let offset = model.document.cursor_to_offset(cursor.line, cursor.column);
    let status = status(offset, &model.document.message());

    let bar = &mut model.ui.status_bar;

    bar.update_segment(
        SegmentId::CursorPosition,
        SegmentContent::Text(format!("Ln {}, Col {}", status.line, status.column)),
    );

    let title = format!("Title: {}", status.title_length);
    bar.update_segment(
        SegmentId::TitleLength,
        if status.warn {
            SegmentContent::Warning(title)
        } else {
            SegmentContent::Text(title)
        },
    );

    bar.update_segment(
        SegmentId::ModifiedIndicator,
        if model.document.is_modified {
            SegmentContent::Text("[modified]".to_string())
        } else {
            SegmentContent::Empty
        },
    );
}
