//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! `update` returns `None` when nothing needs to happen.

use std::path::PathBuf;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the screen
    Redraw,
    /// Write normalized content to disk, then send `AppMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: String },
    /// Leave the event loop
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::SaveFile { .. } => true,
            Cmd::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::SaveFile {
            path: PathBuf::from("COMMIT_EDITMSG"),
            content: "Title\n".into(),
        }
        .needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
    }
}
