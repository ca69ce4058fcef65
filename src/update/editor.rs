//! Editor update functions for cursor movement and scrolling

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, paging)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => match direction {
            Direction::Up => move_cursor_vertical(model, -1),
            Direction::Down => move_cursor_vertical(model, 1),
            Direction::Left => move_cursor_left(model),
            Direction::Right => move_cursor_right(model),
        },

        EditorMsg::MoveCursorLineStart => {
            let line = model.editor.cursor.line;
            model.set_cursor(line, 0);
        }

        EditorMsg::MoveCursorLineEnd => {
            let line = model.editor.cursor.line;
            model.set_cursor(line, model.current_line_length());
        }

        EditorMsg::MoveCursorDocumentStart => model.set_cursor(0, 0),

        EditorMsg::MoveCursorDocumentEnd => {
            let last = model.document.line_count().saturating_sub(1);
            model.set_cursor(last, model.document.line_length(last));
        }

        EditorMsg::PageUp => {
            let page = page_size(model);
            move_cursor_vertical(model, -(page as isize));
        }

        EditorMsg::PageDown => {
            let page = page_size(model);
            move_cursor_vertical(model, page as isize);
        }

        EditorMsg::SetCursorPosition { line, column } => model.set_cursor(line, column),
    }

    Some(Cmd::Redraw)
}

fn page_size(model: &AppModel) -> usize {
    model.editor.viewport.visible_lines.saturating_sub(1).max(1)
}

/// Move up (negative) or down (positive) by `delta` lines, keeping the
/// desired column across short lines
fn move_cursor_vertical(model: &mut AppModel, delta: isize) {
    let last = model.document.line_count().saturating_sub(1);
    let cursor = model.editor.cursor;
    let target = cursor.line.saturating_add_signed(delta).min(last);
    if target == cursor.line {
        return;
    }

    let desired = cursor.desired_column.unwrap_or(cursor.column);
    let cursor = &mut model.editor.cursor;
    cursor.line = target;
    cursor.column = desired.min(model.document.line_length(target));
    cursor.desired_column = Some(desired);
    model.editor.ensure_cursor_visible();
}

fn move_cursor_left(model: &mut AppModel) {
    let cursor = model.editor.cursor;
    if cursor.column > 0 {
        model.set_cursor(cursor.line, cursor.column - 1);
    } else if cursor.line > 0 {
        let prev = cursor.line - 1;
        model.set_cursor(prev, model.document.line_length(prev));
    }
}

fn move_cursor_right(model: &mut AppModel) {
    let cursor = model.editor.cursor;
    if cursor.column < model.current_line_length() {
        model.set_cursor(cursor.line, cursor.column + 1);
    } else if cursor.line + 1 < model.document.line_count() {
        model.set_cursor(cursor.line + 1, 0);
    }
}
