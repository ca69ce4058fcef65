//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::sync_status_bar;
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    if model.ui.prompt.is_some() && !reaches_prompt(&msg) {
        debug!(target: "message", msg = %msg_name, "ignored while prompting");
        return None;
    }

    let result = match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Messages that are still handled while a prompt is open
fn reaches_prompt(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::App(
            AppMsg::ConfirmQuit
                | AppMsg::DiscardQuit
                | AppMsg::CancelQuit
                | AppMsg::SaveCompleted(_)
                | AppMsg::Resize(..)
        )
    )
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertChar('x')`
/// - `App::Resize(80, 24)`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
