//! Save and quit tests - normalization on disk, dirty flag, quit prompt

mod common;

use std::fs;

use common::{test_model_with_file, type_str};
use commit_editor::commands::Cmd;
use commit_editor::messages::{AppMsg, Msg};
use commit_editor::model::Prompt;
use commit_editor::update::update;
use commit_editor::util::write_file;
use commit_editor::AppModel;
use tempfile::TempDir;

/// Run a command the way the runtime does; returns true on quit
fn run_cmd(model: &mut AppModel, cmd: Option<Cmd>) -> bool {
    match cmd {
        Some(Cmd::SaveFile { path, content }) => {
            let result = write_file(&path, &content);
            let next = update(model, Msg::App(AppMsg::SaveCompleted(result)));
            run_cmd(model, next)
        }
        Some(Cmd::Quit) => true,
        _ => false,
    }
}

fn send(model: &mut AppModel, msg: AppMsg) -> bool {
    let cmd = update(model, Msg::App(msg));
    run_cmd(model, cmd)
}

#[test]
fn test_save_writes_normalized_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    let mut model = test_model_with_file("Title   \n\nBody\t\n\n\n", path.clone());

    assert!(!send(&mut model, AppMsg::SaveFile));

    assert_eq!(fs::read_to_string(&path).unwrap(), "Title\n\nBody\n");
}

#[test]
fn test_save_appends_final_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    let mut model = test_model_with_file("hello   \t", path.clone());

    send(&mut model, AppMsg::SaveFile);

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn test_save_clears_modified_and_reports() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    let mut model = test_model_with_file("Title", path.clone());
    model.set_cursor(0, 5);
    type_str(&mut model, " fixed");
    assert!(model.document.is_modified);

    send(&mut model, AppMsg::SaveFile);

    assert!(!model.document.is_modified);
    let message = model.ui.message.as_ref().unwrap();
    assert_eq!(message.text, format!("Saved {}", path.display()));
    assert!(!message.is_error);
}

#[test]
fn test_save_failure_keeps_session_and_dirty_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("COMMIT_EDITMSG");
    let mut model = test_model_with_file("Title", path);
    type_str(&mut model, "x");

    assert!(!send(&mut model, AppMsg::SaveFile));

    assert!(model.document.is_modified);
    let message = model.ui.message.as_ref().unwrap();
    assert!(message.is_error);
    assert!(message.text.starts_with("Error writing"));
}

// ========================================================================
// Quit
// ========================================================================

#[test]
fn test_quit_unmodified_exits_immediately() {
    let dir = TempDir::new().unwrap();
    let mut model = test_model_with_file("Title", dir.path().join("MSG"));

    assert!(send(&mut model, AppMsg::Quit));
}

#[test]
fn test_quit_modified_prompts() {
    let dir = TempDir::new().unwrap();
    let mut model = test_model_with_file("Title", dir.path().join("MSG"));
    type_str(&mut model, "x");

    assert!(!send(&mut model, AppMsg::Quit));
    assert_eq!(model.ui.prompt, Some(Prompt::QuitConfirm));
    assert_eq!(
        model.ui.message_bar_text(),
        Some(("Save changes? (y/n/esc)", false))
    );
}

#[test]
fn test_prompt_yes_saves_then_quits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("MSG");
    let mut model = test_model_with_file("Title", path.clone());
    type_str(&mut model, "x");
    send(&mut model, AppMsg::Quit);

    assert!(send(&mut model, AppMsg::ConfirmQuit));
    assert_eq!(fs::read_to_string(&path).unwrap(), "xTitle\n");
}

#[test]
fn test_prompt_yes_with_failed_save_stays_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("MSG");
    let mut model = test_model_with_file("Title", path);
    type_str(&mut model, "x");
    send(&mut model, AppMsg::Quit);

    assert!(!send(&mut model, AppMsg::ConfirmQuit));
    assert_eq!(model.ui.prompt, None);
    assert!(!model.ui.quit_after_save);
    assert!(model.ui.message.as_ref().is_some_and(|m| m.is_error));
}

#[test]
fn test_prompt_no_quits_without_saving() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("MSG");
    fs::write(&path, "Title\n").unwrap();
    let mut model = test_model_with_file("Title\n", path.clone());
    type_str(&mut model, "x");
    send(&mut model, AppMsg::Quit);

    assert!(send(&mut model, AppMsg::DiscardQuit));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Title\n");
}

#[test]
fn test_prompt_escape_cancels() {
    let dir = TempDir::new().unwrap();
    let mut model = test_model_with_file("Title", dir.path().join("MSG"));
    type_str(&mut model, "x");
    send(&mut model, AppMsg::Quit);

    assert!(!send(&mut model, AppMsg::CancelQuit));
    assert_eq!(model.ui.prompt, None);
    assert_eq!(model.ui.message_bar_text(), None);
    assert!(model.document.is_modified);
}

#[test]
fn test_prompt_blocks_other_messages() {
    let dir = TempDir::new().unwrap();
    let mut model = test_model_with_file("Title", dir.path().join("MSG"));
    type_str(&mut model, "x");
    send(&mut model, AppMsg::Quit);

    type_str(&mut model, "more");
    assert_eq!(model.document.text(), "xTitle");
    assert!(!send(&mut model, AppMsg::SaveFile));
    assert_eq!(model.ui.prompt, Some(Prompt::QuitConfirm));
}
