//! Terminal input handling
//!
//! Turns crossterm events into messages. Bound keystrokes go through the
//! keymap; unbound printable characters are typed into the document. While
//! a prompt is open only its answers get through.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::commands::Cmd;
use crate::keymap::{keystroke_from_crossterm, Keymap};
use crate::messages::{AppMsg, DocumentMsg, Msg};
use crate::model::{AppModel, Prompt};
use crate::update::update;

/// Handle one terminal event, running the resulting message through `update`
pub fn handle_event(model: &mut AppModel, keymap: &Keymap, event: Event) -> Option<Cmd> {
    let msg = event_to_msg(model, keymap, event)?;
    update(model, msg)
}

/// Map a terminal event to a message, if it means anything to the editor
pub fn event_to_msg(model: &AppModel, keymap: &Keymap, event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) => key_to_msg(model, keymap, &key),
        Event::Paste(text) => {
            if model.ui.prompt.is_some() {
                return None;
            }
            Some(Msg::Document(DocumentMsg::Paste(text)))
        }
        Event::Resize(width, height) => Some(Msg::App(AppMsg::Resize(width, height))),
        _ => None,
    }
}

fn key_to_msg(model: &AppModel, keymap: &Keymap, key: &KeyEvent) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if let Some(prompt) = model.ui.prompt {
        return prompt_key(prompt, key);
    }

    if let Some(command) = keystroke_from_crossterm(key).and_then(|ks| keymap.lookup(&ks)) {
        return Some(command.to_msg());
    }

    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Msg::Document(DocumentMsg::InsertChar(ch)))
        }
        _ => None,
    }
}

fn prompt_key(prompt: Prompt, key: &KeyEvent) -> Option<Msg> {
    match prompt {
        Prompt::QuitConfirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Msg::App(AppMsg::ConfirmQuit)),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Msg::App(AppMsg::DiscardQuit)),
            KeyCode::Esc => Some(Msg::App(AppMsg::CancelQuit)),
            _ => None,
        },
    }
}
