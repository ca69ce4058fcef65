//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::error::EditorError;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Set cursor to specific position
    SetCursorPosition { line: usize, column: usize },
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Insert pasted text at cursor
    Paste(String),
    /// Reflow the body paragraph under the cursor (Alt+Q)
    ReflowParagraph,
    /// Add or remove the Signed-off-by trailer (Ctrl+O)
    ToggleSignOff,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Save the document (Ctrl+S)
    SaveFile,
    /// The write finished
    SaveCompleted(Result<(), EditorError>),
    /// Quit, prompting first when modified (Ctrl+Q)
    Quit,
    /// Prompt answered `y`: save, then quit
    ConfirmQuit,
    /// Prompt answered `n`: quit without saving
    DiscardQuit,
    /// Prompt dismissed with Escape
    CancelQuit,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    App(AppMsg),
}
