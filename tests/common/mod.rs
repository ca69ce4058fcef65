//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use commit_editor::error::EditorError;
use commit_editor::git::{Identity, IdentityProvider};
use commit_editor::messages::{DocumentMsg, Msg};
use commit_editor::model::{AppModel, Document};
use commit_editor::update::update;

pub const SIGN_OFF: &str = "Signed-off-by: Test User <test@example.com>";

/// Identity provider with a fixed answer
pub struct FixedIdentity(pub Option<Identity>);

impl FixedIdentity {
    pub fn test_user() -> Self {
        Self(Some(Identity {
            name: "Test User".into(),
            email: "test@example.com".into(),
        }))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl IdentityProvider for FixedIdentity {
    fn identity(&self) -> Result<Identity, EditorError> {
        self.0.clone().ok_or(EditorError::MissingIdentity)
    }
}

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    test_model_with_identity(text, line, column, FixedIdentity::test_user())
}

/// Create a test model whose identity lookup gives the given answer
pub fn test_model_with_identity(
    text: &str,
    line: usize,
    column: usize,
    identity: FixedIdentity,
) -> AppModel {
    let mut model =
        AppModel::with_identity(Document::with_text(text), (100, 30), Box::new(identity));
    model.set_cursor(line, column);
    model
}

/// Create a test model backed by a file path
pub fn test_model_with_file(text: &str, path: PathBuf) -> AppModel {
    let mut document = Document::with_text(text);
    document.file_path = Some(path);
    AppModel::with_identity(document, (100, 30), Box::new(FixedIdentity::test_user()))
}

/// Get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.text()
}

/// Cursor as (line, column)
pub fn cursor(model: &AppModel) -> (usize, usize) {
    (model.editor.cursor.line, model.editor.cursor.column)
}

/// Type each character of `text` as a separate keystroke
pub fn type_str(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        let msg = if ch == '\n' {
            DocumentMsg::InsertNewline
        } else {
            DocumentMsg::InsertChar(ch)
        };
        update(model, Msg::Document(msg));
    }
}
