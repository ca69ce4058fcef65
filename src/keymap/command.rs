//! Command enum representing all executable editor actions
//!
//! Commands are the bridge between keybindings and the message system.

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};

/// All editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement
    // ========================================================================
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorLineStart,
    MoveCursorLineEnd,
    MoveCursorDocumentStart,
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,

    // ========================================================================
    // Editing
    // ========================================================================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    /// Re-wrap the body paragraph under the cursor
    ReflowParagraph,
    /// Add or remove the committer's Signed-off-by trailer
    ToggleSignOff,

    // ========================================================================
    // File / App
    // ========================================================================
    SaveFile,
    Quit,
}

impl Command {
    /// Convert this command to the message it dispatches
    pub fn to_msg(self) -> Msg {
        use Command::*;

        match self {
            MoveCursorUp => Msg::Editor(EditorMsg::MoveCursor(Direction::Up)),
            MoveCursorDown => Msg::Editor(EditorMsg::MoveCursor(Direction::Down)),
            MoveCursorLeft => Msg::Editor(EditorMsg::MoveCursor(Direction::Left)),
            MoveCursorRight => Msg::Editor(EditorMsg::MoveCursor(Direction::Right)),
            MoveCursorLineStart => Msg::Editor(EditorMsg::MoveCursorLineStart),
            MoveCursorLineEnd => Msg::Editor(EditorMsg::MoveCursorLineEnd),
            MoveCursorDocumentStart => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
            MoveCursorDocumentEnd => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),
            PageUp => Msg::Editor(EditorMsg::PageUp),
            PageDown => Msg::Editor(EditorMsg::PageDown),

            InsertNewline => Msg::Document(DocumentMsg::InsertNewline),
            InsertTab => Msg::Document(DocumentMsg::InsertChar('\t')),
            DeleteBackward => Msg::Document(DocumentMsg::DeleteBackward),
            DeleteForward => Msg::Document(DocumentMsg::DeleteForward),
            ReflowParagraph => Msg::Document(DocumentMsg::ReflowParagraph),
            ToggleSignOff => Msg::Document(DocumentMsg::ToggleSignOff),

            SaveFile => Msg::App(AppMsg::SaveFile),
            Quit => Msg::App(AppMsg::Quit),
        }
    }

    /// Human-readable name for the command
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveCursorUp => "Move Up",
            MoveCursorDown => "Move Down",
            MoveCursorLeft => "Move Left",
            MoveCursorRight => "Move Right",
            MoveCursorLineStart => "Line Start",
            MoveCursorLineEnd => "Line End",
            MoveCursorDocumentStart => "Document Start",
            MoveCursorDocumentEnd => "Document End",
            PageUp => "Page Up",
            PageDown => "Page Down",
            InsertNewline => "Newline",
            InsertTab => "Tab",
            DeleteBackward => "Delete Backward",
            DeleteForward => "Delete Forward",
            ReflowParagraph => "Reflow",
            ToggleSignOff => "Sign-off",
            SaveFile => "Save",
            Quit => "Quit",
        }
    }
}
