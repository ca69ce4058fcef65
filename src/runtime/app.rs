//! The event loop

use anyhow::{Context, Result};
use crossterm::event;

use commit_editor::commands::Cmd;
use commit_editor::input::handle_event;
use commit_editor::keymap::Keymap;
use commit_editor::messages::{AppMsg, Msg};
use commit_editor::model::{AppModel, SegmentContent, SegmentId};
use commit_editor::terminal::Tui;
use commit_editor::theme::Theme;
use commit_editor::update::update;
use commit_editor::util::write_file;
use commit_editor::view;

/// Owns the terminal and the model for one editing session
pub struct App {
    terminal: Tui,
    model: AppModel,
    keymap: Keymap,
    theme: Theme,
}

impl App {
    pub fn new(terminal: Tui, mut model: AppModel) -> Self {
        let keymap = Keymap::default();
        model.ui.status_bar.update_segment(
            SegmentId::KeyHints,
            SegmentContent::Dim(keymap.status_hints()),
        );

        Self {
            terminal,
            model,
            keymap,
            theme: Theme::default(),
        }
    }

    /// Run until a `Cmd::Quit`
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;

        loop {
            let event = event::read().context("Failed to read terminal event")?;
            let Some(cmd) = handle_event(&mut self.model, &self.keymap, event) else {
                continue;
            };

            let redraw = cmd.needs_redraw();
            if self.process_cmd(cmd) {
                tracing::info!("Quitting");
                return Ok(());
            }
            if redraw {
                self.draw()?;
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let model = &self.model;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| view::render(frame, model, theme))
            .context("Failed to draw")?;
        Ok(())
    }

    /// Execute a command. Returns true when the editor should exit.
    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::Redraw => false,
            Cmd::Quit => true,
            Cmd::SaveFile { path, content } => {
                let result = write_file(&path, &content);
                match update(&mut self.model, Msg::App(AppMsg::SaveCompleted(result))) {
                    Some(next) => self.process_cmd(next),
                    None => false,
                }
            }
        }
    }
}
