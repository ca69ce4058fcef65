//! UI state - status bar, message bar and prompts

use super::status_bar::StatusBar;

/// A line shown in the message bar below the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarMessage {
    pub text: String,
    pub is_error: bool,
}

/// Modal prompt that captures input until answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// "Save changes? (y/n/esc)" after Ctrl+Q on a modified document
    QuitConfirm,
}

impl Prompt {
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::QuitConfirm => "Save changes? (y/n/esc)",
        }
    }
}

/// UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Message bar content (cleared on the next edit)
    pub message: Option<BarMessage>,
    /// Active prompt, if any
    pub prompt: Option<Prompt>,
    /// Quit once the pending save succeeds
    pub quit_after_save: bool,
    /// Terminal size in cells (width, height)
    pub terminal_size: (u16, u16),
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational message
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.message = Some(BarMessage {
            text: text.into(),
            is_error: false,
        });
    }

    /// Show an error message
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message = Some(BarMessage {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Text for the message bar: the prompt wins over any message
    pub fn message_bar_text(&self) -> Option<(&str, bool)> {
        if let Some(prompt) = self.prompt {
            return Some((prompt.text(), false));
        }
        self.message
            .as_ref()
            .map(|m| (m.text.as_str(), m.is_error))
    }
}
