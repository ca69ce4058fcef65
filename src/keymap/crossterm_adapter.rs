//! Adapter to convert crossterm key events to our Keystroke type

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a crossterm key event to a Keystroke
///
/// Returns None for keys the editor has no use for (function keys, media
/// keys, lone modifiers)
pub fn keystroke_from_crossterm(event: &KeyEvent) -> Option<Keystroke> {
    let mods = Modifiers::new(
        event.modifiers.contains(KeyModifiers::CONTROL),
        event.modifiers.contains(KeyModifiers::SHIFT),
        event.modifiers.contains(KeyModifiers::ALT),
    );

    let key = match event.code {
        CtKeyCode::Char(c) => return Some(Keystroke::char_with_mods(c, mods)),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };

    Some(Keystroke::new(key, mods))
}
