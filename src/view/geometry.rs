//! Geometry helpers for rendering
//!
//! Pure functions for the screen layout and the mapping between character
//! columns and terminal cells, testable without a terminal.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::model::CHROME_ROWS;

/// The three regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub text: Rect,
    pub status_bar: Rect,
    pub message_bar: Rect,
}

/// Split the terminal into text area, status bar and message bar
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let text_height = area.height.saturating_sub(CHROME_ROWS);
    let row = |offset: u16| {
        let y = area.y + text_height + offset;
        let height = u16::from(y < area.y + area.height);
        Rect::new(area.x, y, area.width, height)
    };

    ScreenAreas {
        text: Rect::new(area.x, area.y, area.width, text_height),
        status_bar: row(0),
        message_bar: row(1),
    }
}

/// Display form and width of a character in a terminal cell.
///
/// Tabs show as a single space, other control characters as `?`.
#[inline]
pub fn display_char(ch: char) -> (char, usize) {
    match ch {
        '\t' => (' ', 1),
        c if c.is_control() => ('?', 1),
        c => (c, c.width().unwrap_or(0)),
    }
}

/// A character placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character column in the line
    pub column: usize,
    pub ch: char,
    /// Screen x offset from the start of the text area
    pub x: usize,
    pub width: usize,
}

/// Characters of `line` that fit in `max_width` cells when the view is
/// scrolled to `left_column`. A wide character that would straddle the
/// right edge is left out.
pub fn visible_cells(line: &str, left_column: usize, max_width: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut x = 0;

    for (column, ch) in line.chars().enumerate().skip(left_column) {
        let (ch, width) = display_char(ch);
        if x + width > max_width {
            break;
        }
        cells.push(Cell {
            column,
            ch,
            x,
            width,
        });
        x += width;
    }

    cells
}

/// Screen x offset of character `column` when scrolled to `left_column`
pub fn char_col_to_visual_col(line: &str, left_column: usize, column: usize) -> usize {
    line.chars()
        .skip(left_column)
        .take(column.saturating_sub(left_column))
        .map(|ch| display_char(ch).1)
        .sum()
}
