//! Tests for the keymap system

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::messages::{AppMsg, DocumentMsg, Msg};

fn lookup(code: CtKeyCode, modifiers: KeyModifiers) -> Option<Command> {
    let keymap = Keymap::default();
    let keystroke = keystroke_from_crossterm(&KeyEvent::new(code, modifiers))?;
    keymap.lookup(&keystroke)
}

#[test]
fn test_file_bindings() {
    assert_eq!(
        lookup(CtKeyCode::Char('s'), KeyModifiers::CONTROL),
        Some(Command::SaveFile)
    );
    assert_eq!(
        lookup(CtKeyCode::Char('q'), KeyModifiers::CONTROL),
        Some(Command::Quit)
    );
}

#[test]
fn test_commit_tool_bindings() {
    assert_eq!(
        lookup(CtKeyCode::Char('o'), KeyModifiers::CONTROL),
        Some(Command::ToggleSignOff)
    );
    assert_eq!(
        lookup(CtKeyCode::Char('q'), KeyModifiers::ALT),
        Some(Command::ReflowParagraph)
    );
}

#[test]
fn test_plain_characters_are_unbound() {
    assert_eq!(lookup(CtKeyCode::Char('s'), KeyModifiers::NONE), None);
    assert_eq!(lookup(CtKeyCode::Char('Q'), KeyModifiers::SHIFT), None);
}

#[test]
fn test_ctrl_home_differs_from_home() {
    assert_eq!(
        lookup(CtKeyCode::Home, KeyModifiers::NONE),
        Some(Command::MoveCursorLineStart)
    );
    assert_eq!(
        lookup(CtKeyCode::Home, KeyModifiers::CONTROL),
        Some(Command::MoveCursorDocumentStart)
    );
}

#[test]
fn test_unmapped_keys() {
    assert!(keystroke_from_crossterm(&KeyEvent::new(CtKeyCode::F(5), KeyModifiers::NONE)).is_none());
}

#[test]
fn test_command_messages() {
    assert_eq!(Command::SaveFile.to_msg(), Msg::App(AppMsg::SaveFile));
    assert_eq!(
        Command::InsertTab.to_msg(),
        Msg::Document(DocumentMsg::InsertChar('\t'))
    );
}

#[test]
fn test_status_hints() {
    assert_eq!(
        Keymap::default().status_hints(),
        "^S Save  ^Q Quit  ^O Sign-off  Alt+Q Reflow"
    );
}

#[test]
fn test_status_hints_follow_rebinding() {
    let mut keymap = Keymap::default();
    keymap.add_binding(Keybinding::new(
        Keystroke::char_with_mods('w', Modifiers::CTRL),
        Command::SaveFile,
    ));
    // Ctrl+S now quits, so it no longer advertises save
    keymap.add_binding(Keybinding::new(
        Keystroke::char_with_mods('s', Modifiers::CTRL),
        Command::Quit,
    ));

    assert_eq!(keymap.display_for(Command::SaveFile).as_deref(), Some("^W"));
    assert_eq!(keymap.display_for(Command::Quit).as_deref(), Some("^Q"));
    assert!(keymap.status_hints().starts_with("^W Save  ^Q Quit"));
}

#[test]
fn test_status_hints_skip_unbound_commands() {
    let keymap = Keymap::with_bindings(vec![Keybinding::new(
        Keystroke::new(KeyCode::Home, Modifiers::CTRL | Modifiers::SHIFT),
        Command::ReflowParagraph,
    )]);
    assert_eq!(keymap.status_hints(), "Ctrl+Shift+Home Reflow");
}

#[test]
fn test_later_binding_wins() {
    let mut keymap = Keymap::default();
    keymap.add_binding(Keybinding::new(
        Keystroke::char_with_mods('s', Modifiers::CTRL),
        Command::Quit,
    ));
    assert_eq!(
        keymap.lookup(&Keystroke::char_with_mods('s', Modifiers::CTRL)),
        Some(Command::Quit)
    );
}
