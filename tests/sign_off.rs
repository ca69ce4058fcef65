//! Signed-off-by toggle tests (Ctrl+O)

mod common;

use common::{buffer_to_string, cursor, test_model, test_model_with_identity, FixedIdentity, SIGN_OFF};
use commit_editor::messages::{DocumentMsg, Msg};
use commit_editor::update::update;

fn toggle(model: &mut commit_editor::AppModel) {
    update(model, Msg::Document(DocumentMsg::ToggleSignOff));
}

#[test]
fn test_adds_sign_off_after_body() {
    let mut model = test_model("Title\n\nBody text", 2, 4);
    toggle(&mut model);

    assert_eq!(
        buffer_to_string(&model),
        format!("Title\n\nBody text\n\n{SIGN_OFF}")
    );
    assert!(model.document.is_modified);
}

#[test]
fn test_toggle_twice_restores_document() {
    let text = "Title\n\nBody text\n\n# Please enter the commit message";
    let mut model = test_model(text, 2, 4);

    toggle(&mut model);
    assert!(buffer_to_string(&model).contains(SIGN_OFF));

    toggle(&mut model);
    assert_eq!(buffer_to_string(&model), text);
    assert!(!model.document.is_modified);
}

#[test]
fn test_sign_off_goes_before_git_comments() {
    let mut model = test_model("Title\n\nBody\n\n# comment", 0, 0);
    toggle(&mut model);

    assert_eq!(
        buffer_to_string(&model),
        format!("Title\n\nBody\n\n{SIGN_OFF}\n\n# comment")
    );
}

#[test]
fn test_cursor_is_kept_and_clamped() {
    let mut model = test_model("Title\n\nBody", 2, 3);
    toggle(&mut model);
    assert_eq!(cursor(&model), (2, 3));

    // Cursor on the trailer line; removing it leaves fewer lines
    update(
        &mut model,
        Msg::Editor(commit_editor::messages::EditorMsg::MoveCursorDocumentEnd),
    );
    assert_eq!(cursor(&model).0, 4);
    toggle(&mut model);
    assert_eq!(buffer_to_string(&model), "Title\n\nBody");
    assert_eq!(cursor(&model), (2, 4));
}

#[test]
fn test_missing_identity_reports_error_and_leaves_text() {
    let mut model = test_model_with_identity("Title\n\nBody", 0, 0, FixedIdentity::missing());
    toggle(&mut model);

    assert_eq!(buffer_to_string(&model), "Title\n\nBody");
    assert!(!model.document.is_modified);

    let message = model.ui.message.as_ref().expect("error message");
    assert_eq!(message.text, "Git user not configured");
    assert!(message.is_error);
}

#[test]
fn test_existing_trailers_are_grouped() {
    let mut model = test_model("Title\n\nBody\n\nAcked-by: Someone <s@example.com>", 0, 0);
    toggle(&mut model);

    assert_eq!(
        buffer_to_string(&model),
        format!("Title\n\nBody\n\nAcked-by: Someone <s@example.com>\n{SIGN_OFF}")
    );
}
