//! Document update functions for text editing, wrapping and trailers

use crate::commands::Cmd;
use crate::commit::{reflow_paragraph, rewrap_cursor_line, toggle_sign_off, Rewrap, BODY_MAX_LENGTH};
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing, reflow, sign-off)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let offset = model.cursor_offset();
            let mut buf = [0u8; 4];
            model.document.insert(offset, ch.encode_utf8(&mut buf));
            let cursor = model.editor.cursor;
            model.set_cursor(cursor.line, cursor.column + 1);
            after_edit(model);
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertNewline => {
            let offset = model.cursor_offset();
            model.document.insert(offset, "\n");
            let line = model.editor.cursor.line;
            model.set_cursor(line + 1, 0);
            after_edit(model);
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteBackward => {
            let offset = model.cursor_offset();
            if offset == 0 {
                return None;
            }

            let cursor = model.editor.cursor;
            let (line, column) = if cursor.column > 0 {
                (cursor.line, cursor.column - 1)
            } else {
                // Joining onto the end of the previous line
                let prev = cursor.line - 1;
                (prev, model.document.line_length(prev))
            };

            model.document.remove(offset - 1, offset);
            model.set_cursor(line, column);
            after_edit(model);
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteForward => {
            let offset = model.cursor_offset();
            if offset >= model.document.buffer.len_chars() {
                return None;
            }
            model.document.remove(offset, offset + 1);
            after_edit(model);
            Some(Cmd::Redraw)
        }

        DocumentMsg::Paste(text) => {
            let text = text.replace("\r\n", "\n").replace('\r', "\n");
            if text.is_empty() {
                return None;
            }
            let offset = model.cursor_offset();
            model.document.insert(offset, &text);
            let (line, column) = model
                .document
                .offset_to_cursor(offset + text.chars().count());
            model.set_cursor(line, column);
            after_edit(model);
            Some(Cmd::Redraw)
        }

        DocumentMsg::ReflowParagraph => {
            let cursor = model.editor.cursor;
            let message = model.document.message();
            let rewrap = reflow_paragraph(&message, cursor.line, cursor.column, BODY_MAX_LENGTH)?;
            apply_rewrap(model, rewrap);
            model.ui.clear_message();
            Some(Cmd::Redraw)
        }

        DocumentMsg::ToggleSignOff => {
            let message = model.document.message();
            match toggle_sign_off(&message, model.identity.as_ref()) {
                Ok(toggled) => {
                    let cursor = model.editor.cursor;
                    model.document.set_lines(&toggled.to_lines());
                    model.set_cursor(cursor.line, cursor.column);
                    model.ui.clear_message();
                    refresh_viewport(model);
                }
                Err(e) => {
                    tracing::warn!("Sign-off toggle failed: {}", e);
                    model.ui.set_error(e.user_message());
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Common tail of every keystroke edit: clear the message bar and wrap
/// the cursor line if it now overflows the body width
fn after_edit(model: &mut AppModel) {
    model.ui.clear_message();

    let cursor = model.editor.cursor;
    let lines = model.document.lines();
    let message = model.document.message();
    if let Some(rewrap) = rewrap_cursor_line(
        &lines,
        &message,
        cursor.line,
        cursor.column,
        BODY_MAX_LENGTH,
    ) {
        apply_rewrap(model, rewrap);
    }

    refresh_viewport(model);
}

fn apply_rewrap(model: &mut AppModel, rewrap: Rewrap) {
    model
        .document
        .replace_lines(rewrap.start_line, rewrap.end_line, &rewrap.lines);
    model.set_cursor(rewrap.cursor_line, rewrap.cursor_column);
}

/// The gutter grows with the line count, which changes the text width
fn refresh_viewport(model: &mut AppModel) {
    let (width, height) = model.ui.terminal_size;
    model.resize(width, height);
}
