//! Color theme for the terminal view

use ratatui::style::{Color as TermColor, Modifier, Style};

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 {
            return Err(format!("Invalid color format: {}", s));
        }
        Ok(Color {
            r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
            g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
            b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
        })
    }
}

impl From<Color> for TermColor {
    fn from(c: Color) -> Self {
        TermColor::Rgb(c.r, c.g, c.b)
    }
}

/// Editor colors
#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub current_line_background: Color,
    /// Git comment lines
    pub comment: Color,
    /// Title characters past the length limit
    pub overflow: Color,
}

/// Gutter colors
#[derive(Debug, Clone)]
pub struct GutterTheme {
    pub background: Color,
    pub foreground: Color,
    pub foreground_active: Color,
}

/// Status bar colors
#[derive(Debug, Clone)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
    pub warning: Color,
    pub dim: Color,
}

/// Message bar colors
#[derive(Debug, Clone)]
pub struct MessageBarTheme {
    pub foreground: Color,
    pub error: Color,
    pub prompt: Color,
}

/// Complete theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub gutter: GutterTheme,
    pub status_bar: StatusBarTheme,
    pub message_bar: MessageBarTheme,
}

impl Theme {
    pub fn default_dark() -> Self {
        Self {
            name: "Default Dark".to_string(),
            editor: EditorTheme {
                background: Color::rgb(0x1E, 0x1E, 0x1E),
                foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                current_line_background: Color::rgb(0x2A, 0x2A, 0x2A),
                comment: Color::rgb(0x6A, 0x99, 0x55),
                overflow: Color::rgb(0xF4, 0x47, 0x47),
            },
            gutter: GutterTheme {
                background: Color::rgb(0x1E, 0x1E, 0x1E),
                foreground: Color::rgb(0x85, 0x85, 0x85),
                foreground_active: Color::rgb(0xC6, 0xC6, 0xC6),
            },
            status_bar: StatusBarTheme {
                background: Color::rgb(0x00, 0x7A, 0xCC),
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                warning: Color::rgb(0xFF, 0xD7, 0x00),
                dim: Color::rgb(0xC0, 0xD8, 0xF0),
            },
            message_bar: MessageBarTheme {
                foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                error: Color::rgb(0xF4, 0x47, 0x47),
                prompt: Color::rgb(0xFF, 0xD7, 0x00),
            },
        }
    }

    pub fn text_style(&self, current_line: bool) -> Style {
        let bg = if current_line {
            self.editor.current_line_background
        } else {
            self.editor.background
        };
        Style::default().fg(self.editor.foreground.into()).bg(bg.into())
    }

    pub fn comment_style(&self, current_line: bool) -> Style {
        self.text_style(current_line).fg(self.editor.comment.into())
    }

    pub fn overflow_style(&self, current_line: bool) -> Style {
        self.text_style(current_line)
            .fg(self.editor.overflow.into())
            .add_modifier(Modifier::BOLD)
    }

    pub fn gutter_style(&self, current_line: bool) -> Style {
        let fg = if current_line {
            self.gutter.foreground_active
        } else {
            self.gutter.foreground
        };
        Style::default().fg(fg.into()).bg(self.gutter.background.into())
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(self.status_bar.foreground.into())
            .bg(self.status_bar.background.into())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
