//! View module - draws the model into a ratatui frame
//!
//! Rendering reads the model and never changes it.

pub mod geometry;

pub use geometry::{char_col_to_visual_col, screen_areas, visible_cells, Cell, ScreenAreas};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use crate::commit::{validate, Validation};
use crate::model::{gutter_width, AppModel, SegmentContent};
use crate::theme::Theme;

/// Draw the whole screen and place the terminal cursor
pub fn render(frame: &mut Frame, model: &AppModel, theme: &Theme) {
    let areas = screen_areas(frame.area());
    let buf = frame.buffer_mut();

    render_text_area(buf, areas.text, model, theme);
    render_status_bar(buf, areas.status_bar, model, theme);
    render_message_bar(buf, areas.message_bar, model, theme);

    if let Some(position) = cursor_screen_position(model, areas.text) {
        frame.set_cursor_position(position);
    }
}

fn render_text_area(buf: &mut Buffer, area: Rect, model: &AppModel, theme: &Theme) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let message = model.document.message();
    let validation = validate(&message);
    let comment_start = message.comment_start();

    let gutter = gutter_width(model.document.line_count());
    let viewport = &model.editor.viewport;
    let cursor_line = model.editor.cursor.line;
    let text_x = area.x + gutter as u16;
    let text_width = (area.width as usize).saturating_sub(gutter);

    for row in 0..area.height {
        let y = area.y + row;
        let line_idx = viewport.top_line + row as usize;
        let is_cursor_line = line_idx == cursor_line;

        buf.set_style(
            Rect::new(area.x, y, area.width, 1),
            theme.text_style(is_cursor_line),
        );

        let Some(line) = model.document.get_line(line_idx) else {
            continue;
        };

        let number = format!("{:>width$} ", line_idx + 1, width = gutter - 1);
        buf.set_string(area.x, y, number, theme.gutter_style(is_cursor_line));

        let is_comment = line_idx >= comment_start;
        for cell in visible_cells(&line, viewport.left_column, text_width) {
            if cell.width == 0 {
                continue;
            }
            let style = cell_style(
                theme,
                &validation,
                line_idx,
                cell.column,
                is_cursor_line,
                is_comment,
            );
            buf.set_string(text_x + cell.x as u16, y, cell.ch.to_string(), style);
        }
    }
}

fn cell_style(
    theme: &Theme,
    validation: &Validation,
    line: usize,
    column: usize,
    is_cursor_line: bool,
    is_comment: bool,
) -> Style {
    if validation.spans_on_line(line).any(|s| s.covers(line, column)) {
        theme.overflow_style(is_cursor_line)
    } else if is_comment {
        theme.comment_style(is_cursor_line)
    } else {
        theme.text_style(is_cursor_line)
    }
}

fn render_status_bar(buf: &mut Buffer, area: Rect, model: &AppModel, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let base = theme.status_style();
    buf.set_style(area, base);

    let layout = model.ui.status_bar.layout(area.width as usize);
    for &x in &layout.separator_positions {
        if x < area.width as usize {
            buf.set_string(area.x + x as u16, area.y, "|", base);
        }
    }

    for seg in layout.left.iter().chain(layout.right.iter()) {
        if seg.x >= area.width as usize {
            continue;
        }
        let style = match &seg.content {
            SegmentContent::Warning(_) => base.fg(theme.status_bar.warning.into()),
            SegmentContent::Dim(_) => base.fg(theme.status_bar.dim.into()),
            _ => base,
        };
        buf.set_stringn(
            area.x + seg.x as u16,
            area.y,
            seg.content.display_text(),
            area.width as usize - seg.x,
            style,
        );
    }
}

fn render_message_bar(buf: &mut Buffer, area: Rect, model: &AppModel, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let base = Style::default()
        .fg(theme.message_bar.foreground.into())
        .bg(theme.editor.background.into());
    buf.set_style(area, base);

    let Some((text, is_error)) = model.ui.message_bar_text() else {
        return;
    };
    let color = if model.ui.prompt.is_some() {
        theme.message_bar.prompt
    } else if is_error {
        theme.message_bar.error
    } else {
        theme.message_bar.foreground
    };
    buf.set_stringn(
        area.x + 1,
        area.y,
        text,
        (area.width as usize).saturating_sub(1),
        base.fg(color.into()),
    );
}

/// Terminal position of the editing cursor, if it is on screen
pub fn cursor_screen_position(model: &AppModel, text_area: Rect) -> Option<(u16, u16)> {
    let cursor = model.editor.cursor;
    let viewport = &model.editor.viewport;

    let row = cursor.line.checked_sub(viewport.top_line)?;
    if row >= text_area.height as usize {
        return None;
    }

    let gutter = gutter_width(model.document.line_count());
    let line = model.document.get_line(cursor.line).unwrap_or_default();
    let x = gutter + char_col_to_visual_col(&line, viewport.left_column, cursor.column);
    if x >= text_area.width as usize {
        return None;
    }

    Some((text_area.x + x as u16, text_area.y + row as u16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(model: &AppModel) -> Buffer {
        let (width, height) = model.ui.terminal_size;
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| render(frame, model, &theme)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_gutter_and_text() {
        let model = AppModel::new(Document::with_text("Title\n\nBody"), (40, 8));
        let buf = draw(&model);
        assert!(row_text(&buf, 0).starts_with("   1 Title"));
        assert!(row_text(&buf, 2).starts_with("   3 Body"));
    }

    #[test]
    fn test_title_overflow_is_highlighted() {
        let title = "x".repeat(55);
        let model = AppModel::new(Document::with_text(&title), (80, 8));
        let buf = draw(&model);
        let theme = Theme::default();
        let gutter = gutter_width(1) as u16;

        assert_eq!(buf[(gutter + 49, 0)].fg, theme.text_style(true).fg.unwrap());
        assert_eq!(
            buf[(gutter + 50, 0)].fg,
            theme.overflow_style(true).fg.unwrap()
        );
        assert_eq!(
            buf[(gutter + 54, 0)].fg,
            theme.overflow_style(true).fg.unwrap()
        );
    }

    #[test]
    fn test_status_bar_row() {
        let model = AppModel::new(Document::with_text("Title"), (80, 6));
        let buf = draw(&model);
        let status = row_text(&buf, 4);
        assert!(status.contains("Ln 1, Col 1"));
        assert!(status.contains("Title: 5"));
        assert!(status.contains("^S Save"));
    }

    #[test]
    fn test_modified_marker_follows_title_count() {
        let mut model = AppModel::new(Document::with_text("Title"), (80, 6));
        model.document.insert(5, "!");
        crate::model::sync_status_bar(&mut model);
        let buf = draw(&model);
        let status = row_text(&buf, 4);
        assert!(status.contains("Ln 1, Col 1 | Title: 6 [modified]"));
    }

    #[test]
    fn test_message_bar_shows_prompt() {
        let mut model = AppModel::new(Document::with_text("Title"), (80, 6));
        model.ui.prompt = Some(crate::model::Prompt::QuitConfirm);
        let buf = draw(&model);
        assert!(row_text(&buf, 5).contains("Save changes? (y/n/esc)"));
    }

    #[test]
    fn test_cursor_position_accounts_for_gutter() {
        let mut model = AppModel::new(Document::with_text("Title\n\nBody"), (40, 8));
        model.set_cursor(2, 3);
        let areas = screen_areas(Rect::new(0, 0, 40, 8));
        assert_eq!(cursor_screen_position(&model, areas.text), Some((8, 2)));
    }
}
