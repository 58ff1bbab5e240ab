//! Error types for vsx-core

use std::path::PathBuf;

use crate::apply::Operation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the candidate editor binaries resolved on PATH.
    #[error("Visual Studio Code binary not found (tried: {})", .candidates.join(", "))]
    BinaryNotFound { candidates: Vec<String> },

    /// The editor binary could not be started at all.
    #[error("Failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// `--list-extensions` exited non-zero.
    #[error(
        "Listing installed extensions failed (exit code: {}): {}",
        exit_code_text(.exit_code),
        .stderr.trim()
    )]
    QueryFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// An inventory token was not of the form `name@version`.
    #[error("Malformed extension token in inventory: '{token}'")]
    MalformedInventoryToken { token: String },

    /// An install or uninstall call exited non-zero.
    #[error(
        "Error {operation} Visual Studio Code extension : {identifier} (exit code: {}): {output}",
        exit_code_text(.exit_code)
    )]
    MutationFailed {
        operation: Operation,
        identifier: String,
        exit_code: Option<i32>,
        output: String,
    },

    /// Module arguments were missing, mistyped or unsupported.
    #[error("Invalid module arguments: {0}")]
    InvalidParams(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A process killed by a signal has no exit code.
fn exit_code_text(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl Error {
    /// Message reported to the host when the run fails.
    ///
    /// Mutation failures carry their own prefix; anything else is reported
    /// as an unexpected exception.
    pub fn host_message(&self) -> String {
        match self {
            Error::MutationFailed { .. } => self.to_string(),
            other => format!("Exception Unknown : {}", other),
        }
    }
}
