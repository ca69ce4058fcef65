//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Edit a git commit message
#[derive(Parser, Debug)]
#[command(
    name = "commit-editor",
    version,
    about = "A terminal editor for git commit messages"
)]
pub struct CliArgs {
    /// The message file git asks to edit (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file() {
        let args = CliArgs::try_parse_from(["commit-editor", ".git/COMMIT_EDITMSG"]).unwrap();
        assert_eq!(args.file, PathBuf::from(".git/COMMIT_EDITMSG"));
    }

    #[test]
    fn test_file_is_required() {
        assert!(CliArgs::try_parse_from(["commit-editor"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(CliArgs::try_parse_from(["commit-editor", "a", "b"]).is_err());
    }
}
