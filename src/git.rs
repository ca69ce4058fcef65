//! Committer identity lookup
//!
//! The sign-off toggle needs `user.name` and `user.email`. They come from
//! `git config`, behind a trait so the editor can be driven without git.

use std::process::Command;

use crate::error::EditorError;

/// Committer name and email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Value part of a `Signed-off-by` trailer: `Name <email>`
    pub fn sign_off_value(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Source of the committer identity
pub trait IdentityProvider {
    fn identity(&self) -> Result<Identity, EditorError>;
}

/// Reads the identity with `git config`
#[derive(Debug, Clone, Default)]
pub struct GitIdentity;

impl GitIdentity {
    fn config_value(key: &str) -> Option<String> {
        let output = match Command::new("git").args(["config", key]).output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to run git config {}: {}", key, e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!("git config {} exited with {}", key, output.status);
            return None;
        }

        parse_config_value(&String::from_utf8_lossy(&output.stdout))
    }
}

impl IdentityProvider for GitIdentity {
    fn identity(&self) -> Result<Identity, EditorError> {
        let name = Self::config_value("user.name");
        let email = Self::config_value("user.email");

        match (name, email) {
            (Some(name), Some(email)) => Ok(Identity { name, email }),
            _ => Err(EditorError::MissingIdentity),
        }
    }
}

/// Trim git's output; an empty value counts as unset
fn parse_config_value(stdout: &str) -> Option<String> {
    let value = stdout.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
