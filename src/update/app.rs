//! App message handlers (save, quit, resize)

use crate::commands::Cmd;
use crate::commit::normalize_for_save;
use crate::messages::AppMsg;
use crate::model::{AppModel, Prompt};

/// Handle app messages (file operations, quit prompt, terminal events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => save(model),

        AppMsg::SaveCompleted(result) => {
            match result {
                Ok(()) => {
                    model.document.mark_saved();
                    let name = model
                        .document
                        .file_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| model.document.display_name());
                    tracing::info!("Saved {}", name);
                    model.ui.set_status(format!("Saved {}", name));

                    if model.ui.quit_after_save {
                        model.ui.quit_after_save = false;
                        return Some(Cmd::Quit);
                    }
                }
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    model.ui.quit_after_save = false;
                    model.ui.set_error(e.user_message());
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if model.document.is_modified {
                model.ui.prompt = Some(Prompt::QuitConfirm);
                Some(Cmd::Redraw)
            } else {
                Some(Cmd::Quit)
            }
        }

        AppMsg::ConfirmQuit => {
            if model.ui.prompt.take().is_none() {
                return None;
            }
            model.ui.clear_message();
            model.ui.quit_after_save = true;
            let cmd = save(model);
            if !matches!(cmd, Some(Cmd::SaveFile { .. })) {
                model.ui.quit_after_save = false;
            }
            cmd
        }

        AppMsg::DiscardQuit => {
            model.ui.prompt.take()?;
            model.ui.clear_message();
            Some(Cmd::Quit)
        }

        AppMsg::CancelQuit => {
            model.ui.prompt.take()?;
            model.ui.clear_message();
            Some(Cmd::Redraw)
        }
    }
}

/// Build the save command from the normalized document text
fn save(model: &mut AppModel) -> Option<Cmd> {
    match model.document.file_path.clone() {
        Some(path) => {
            let content = normalize_for_save(&model.document.lines());
            Some(Cmd::SaveFile { path, content })
        }
        None => {
            model.ui.set_error("No file path - cannot save");
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use std::path::PathBuf;

    fn model_with_file(text: &str) -> AppModel {
        let mut doc = Document::with_text(text);
        doc.file_path = Some(PathBuf::from("/tmp/COMMIT_EDITMSG"));
        AppModel::new(doc, (80, 24))
    }

    #[test]
    fn test_save_normalizes_content() {
        let mut model = model_with_file("Title  \n\nBody\t\n\n\n");
        let cmd = update_app(&mut model, AppMsg::SaveFile);
        assert_eq!(
            cmd,
            Some(Cmd::SaveFile {
                path: PathBuf::from("/tmp/COMMIT_EDITMSG"),
                content: "Title\n\nBody\n".to_string(),
            })
        );
    }

    #[test]
    fn test_save_without_path_is_an_error() {
        let mut model = AppModel::new(Document::with_text("Title"), (80, 24));
        update_app(&mut model, AppMsg::SaveFile);
        assert!(model.ui.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn test_quit_clean_document_quits() {
        let mut model = model_with_file("Title");
        assert_eq!(update_app(&mut model, AppMsg::Quit), Some(Cmd::Quit));
        assert_eq!(model.ui.prompt, None);
    }

    #[test]
    fn test_prompt_answers_without_prompt_do_nothing() {
        let mut model = model_with_file("Title");
        assert_eq!(update_app(&mut model, AppMsg::DiscardQuit), None);
        assert_eq!(update_app(&mut model, AppMsg::CancelQuit), None);
        assert_eq!(update_app(&mut model, AppMsg::ConfirmQuit), None);
    }
}
