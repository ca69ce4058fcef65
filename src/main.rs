//! commit-editor - a terminal editor for git commit messages
//!
//! Set as `core.editor`; git runs it with the message file and waits for
//! it to exit.

mod cli;
mod runtime;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use commit_editor::model::{AppModel, Document};
use commit_editor::terminal;
use commit_editor::util::{filename_for_display, validate_file_for_opening};

use cli::CliArgs;
use runtime::App;

fn main() -> ExitCode {
    commit_editor::tracing::init();

    let args = CliArgs::parse();

    if let Err(e) = validate_file_for_opening(&args.file) {
        tracing::warn!("Refusing to open {}: {}", args.file.display(), e);
        eprintln!("{}", e.user_message(&filename_for_display(&args.file)));
        return ExitCode::FAILURE;
    }

    match run(&args.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<()> {
    let document = Document::from_file(path.to_path_buf())
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let (width, height) = crossterm::terminal::size().context("Failed to query terminal size")?;

    terminal::install_panic_hook();
    let tui = terminal::setup_terminal()?;

    let model = AppModel::new(document, (width, height));
    let result = App::new(tui, model).run();

    terminal::restore_terminal()?;
    result
}
