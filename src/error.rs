//! Errors surfaced to the user
//!
//! Malformed message content is never an error; only identity lookup and
//! file I/O can fail.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// `git config user.name` / `user.email` did not produce an identity
    MissingIdentity,
    /// Reading or writing the message file failed
    Io { path: PathBuf, message: String },
}

impl EditorError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Short text for the message bar
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingIdentity => "Git user not configured".to_string(),
            Self::Io { path, message } => {
                format!("Error writing {}: {}", path.display(), message)
            }
        }
    }
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentity => write!(f, "git user.name or user.email is not set"),
            Self::Io { path, message } => write!(f, "{}: {}", path.display(), message),
        }
    }
}

impl std::error::Error for EditorError {}
