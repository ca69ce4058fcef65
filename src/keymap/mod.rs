//! Keyboard mapping
//!
//! Maps terminal keystrokes to editor commands:
//!
//! ```text
//! crossterm::KeyEvent → Keystroke → Keymap::lookup() → Command → Msg
//! ```
//!
//! Keys without a binding fall through to text input in `crate::input`.

mod binding;
mod command;
mod crossterm_adapter;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use crossterm_adapter::keystroke_from_crossterm;
pub use defaults::default_bindings;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

#[cfg(test)]
mod tests;
