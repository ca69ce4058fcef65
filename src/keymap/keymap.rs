//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::defaults::default_bindings;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Fast lookup (indices into bindings)
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding; a later binding for the same keystroke wins
    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.insert(binding.keystroke, idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    /// Get the keybinding for a command (first binding that is still live)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings
            .iter()
            .enumerate()
            .find(|(idx, b)| b.command == command && self.lookup.get(&b.keystroke) == Some(idx))
            .map(|(_, b)| b)
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }

    /// Key hints for the status bar, e.g. `^S Save  ^Q Quit`.
    ///
    /// Commands without a binding are left out.
    pub fn status_hints(&self) -> String {
        HINT_COMMANDS
            .iter()
            .filter_map(|&command| {
                self.display_for(command)
                    .map(|keys| format!("{} {}", keys, command.display_name()))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Commands advertised in the status bar, in display order
const HINT_COMMANDS: [Command; 4] = [
    Command::SaveFile,
    Command::Quit,
    Command::ToggleSignOff,
    Command::ReflowParagraph,
];

impl Default for Keymap {
    fn default() -> Self {
        Self::with_bindings(default_bindings())
    }
}
