//! commit-editor - Elm-style terminal editor for git commit messages
//!
//! `commit` holds the message engine (wrap, validate, trailers, status,
//! save normalization) as pure functions. Around it sits the Elm
//! Architecture loop: `input` turns terminal events into `Msg`s, `update`
//! applies them to the `AppModel` and returns `Cmd`s, `view` draws.

pub mod commands;
pub mod commit;
pub mod config_paths;
pub mod error;
pub mod git;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod terminal;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use error::EditorError;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
