//! Default keybindings

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    let keystroke = match key {
        KeyCode::Char(c) => Keystroke::char_with_mods(c, mods),
        _ => Keystroke::new(key, mods),
    };
    Keybinding::new(keystroke, command)
}

/// The editor's keybindings
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let alt = Modifiers::ALT;
    let none = Modifiers::NONE;

    vec![
        // ====================================================================
        // File / App
        // ====================================================================
        bind(KeyCode::Char('s'), ctrl, Command::SaveFile),
        bind(KeyCode::Char('q'), ctrl, Command::Quit),

        // ====================================================================
        // Commit message tools
        // ====================================================================
        bind(KeyCode::Char('o'), ctrl, Command::ToggleSignOff),
        bind(KeyCode::Char('q'), alt, Command::ReflowParagraph),

        // ====================================================================
        // Navigation
        // ====================================================================
        bind(KeyCode::Up, none, Command::MoveCursorUp),
        bind(KeyCode::Down, none, Command::MoveCursorDown),
        bind(KeyCode::Left, none, Command::MoveCursorLeft),
        bind(KeyCode::Right, none, Command::MoveCursorRight),
        bind(KeyCode::Home, none, Command::MoveCursorLineStart),
        bind(KeyCode::End, none, Command::MoveCursorLineEnd),
        bind(KeyCode::Home, ctrl, Command::MoveCursorDocumentStart),
        bind(KeyCode::End, ctrl, Command::MoveCursorDocumentEnd),
        bind(KeyCode::PageUp, none, Command::PageUp),
        bind(KeyCode::PageDown, none, Command::PageDown),

        // ====================================================================
        // Editing
        // ====================================================================
        bind(KeyCode::Enter, none, Command::InsertNewline),
        bind(KeyCode::Tab, none, Command::InsertTab),
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
    ]
}
